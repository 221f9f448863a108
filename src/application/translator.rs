use crate::domain::entities::analysis::Insights;
use crate::domain::entities::report::Report;
use crate::domain::error::ProviderError;
use crate::domain::ports::translation::TranslationService;
use crate::domain::values::language::Language;
use crate::domain::values::phrasebook;
use std::borrow::Cow;
use std::sync::Arc;

/// Translates report text fields: online service, then the offline phrase
/// table, then the original text.
pub struct Translator {
    online: Option<Arc<dyn TranslationService>>,
}

impl Translator {
    /// `online` is `None` when no translation service is available.
    pub fn new(online: Option<Arc<dyn TranslationService>>) -> Self {
        Self { online }
    }

    /// Borrowed when no translation is needed; otherwise a new report with
    /// translated leaf strings. The input is never modified.
    ///
    /// Once the online service reports itself unavailable, the remaining
    /// fields of this report skip it and go straight to the phrase book.
    pub async fn translate<'a>(&self, report: &'a Report, target: Language) -> Cow<'a, Report> {
        if target == report.language {
            return Cow::Borrowed(report);
        }

        let mut online = self.online.clone();
        let executive_summary = cascade(&mut online, &report.executive_summary, target).await;

        let mut insights = Vec::with_capacity(3);
        for insight in report.analysis.insights.iter() {
            insights.push(cascade(&mut online, insight, target).await);
        }

        let mut recommendations = Vec::with_capacity(report.recommendations.len());
        for rec in &report.recommendations {
            recommendations.push(cascade(&mut online, rec, target).await);
        }

        let mut translated = report.clone();
        translated.executive_summary = executive_summary;
        translated.analysis.insights =
            Insights::try_from(insights).unwrap_or_else(|_| report.analysis.insights.clone());
        translated.recommendations = recommendations;
        translated.language = target;
        Cow::Owned(translated)
    }

    /// Never fails. An online result only counts when it differs from the
    /// input text.
    pub async fn translate_field(&self, text: &str, target: Language) -> String {
        cascade(&mut self.online.clone(), text, target).await
    }
}

async fn cascade(
    online: &mut Option<Arc<dyn TranslationService>>,
    text: &str,
    target: Language,
) -> String {
    if let Some(service) = online.clone() {
        match service.translate(text, target).await {
            Ok(result) if result != text => return result,
            Ok(_) => {}
            Err(ProviderError::TranslationUnavailable(reason)) => {
                tracing::warn!(service = service.name(), %reason, "online translation unavailable, using phrase book");
                *online = None;
            }
            Err(e) => {
                tracing::debug!(service = service.name(), error = %e, "online translation failed");
            }
        }
    }

    match phrasebook::lookup(target, text) {
        Some(phrase) => phrase.to_string(),
        None => text.to_string(),
    }
}
