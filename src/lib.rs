pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::collector::Collector;
use crate::application::composer::ReportComposer;
use crate::application::insights::InsightGenerator;
use crate::application::pipeline::{PipelineContext, PipelineStages, ReportPipeline};
use crate::application::sentiment::SentimentEstimator;
use crate::application::translator::Translator;
use crate::config::{Settings, TranslationMode};
use crate::domain::entities::activity::ActivityLogEntry;
use crate::domain::entities::query::Query;
use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::completion::CompletionProvider;
use crate::domain::ports::news_source::NewsSource;
use crate::domain::ports::report_repository::ReportRepository;
use crate::domain::ports::signal_provider::SignalProvider;
use crate::domain::ports::translation::TranslationService;
use crate::domain::values::language::Language;
use crate::infrastructure::llm::groq::GroqProvider;
use crate::infrastructure::news::newsapi::NewsApiClient;
use crate::infrastructure::signals::simulated::SimulatedSignalProvider;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::report_repo::SqliteReportRepo;
use crate::infrastructure::translation::google::GoogleTranslate;
use rusqlite::Connection;
use std::borrow::Cow;
use std::sync::Arc;

/// External integrations. `None` means unconfigured; every stage degrades
/// instead of failing.
#[derive(Clone)]
pub struct Providers {
    pub news: Option<Arc<dyn NewsSource>>,
    pub completion: Option<Arc<dyn CompletionProvider>>,
    pub translation: Option<Arc<dyn TranslationService>>,
    pub signals: Arc<dyn SignalProvider>,
    pub social_enabled: bool,
}

impl Providers {
    /// No external integrations at all; simulated signals only.
    pub fn offline() -> Self {
        Self {
            news: None,
            completion: None,
            translation: None,
            signals: Arc::new(SimulatedSignalProvider),
            social_enabled: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let creds = &settings.credentials;

        let news: Option<Arc<dyn NewsSource>> = creds
            .news_api_key
            .clone()
            .map(|key| Arc::new(NewsApiClient::new(key, None)) as Arc<dyn NewsSource>);

        let completion: Option<Arc<dyn CompletionProvider>> =
            creds.completion_api_key.clone().map(|key| {
                Arc::new(GroqProvider::new(
                    key,
                    settings.completion_model.clone(),
                    settings.completion_url.clone(),
                )) as Arc<dyn CompletionProvider>
            });

        let translation: Option<Arc<dyn TranslationService>> = match settings.translation {
            TranslationMode::Online => Some(Arc::new(GoogleTranslate::new(None))),
            TranslationMode::Offline => None,
        };

        Self {
            news,
            completion,
            translation,
            signals: Arc::new(SimulatedSignalProvider),
            social_enabled: creds.social_api_key.is_some(),
        }
    }
}

pub struct MarketScope {
    pipeline: ReportPipeline,
    translator: Translator,
}

impl MarketScope {
    /// Wires providers from the environment and opens the SQLite history.
    pub fn new() -> Result<Self, DomainError> {
        let settings = Settings::from_env();
        tracing::debug!(credentials = ?settings.credentials, "loaded settings");
        Self::open(&settings.db_path, Providers::from_settings(&settings))
    }

    pub fn open(db_path: &str, providers: Providers) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        run_migrations(&conn)?;
        Ok(Self::with_providers(
            Arc::new(SqliteReportRepo::new(conn)),
            providers,
        ))
    }

    pub fn with_providers(history: Arc<dyn ReportRepository>, providers: Providers) -> Self {
        let stages = PipelineStages {
            collector: Collector::new(providers.news, providers.signals.clone()),
            sentiment: SentimentEstimator::new(providers.signals, providers.social_enabled),
            insights: InsightGenerator::new(providers.completion),
            composer: ReportComposer,
        };
        Self {
            pipeline: ReportPipeline::new(stages, Arc::new(PipelineContext::new(history))),
            translator: Translator::new(providers.translation),
        }
    }

    pub async fn generate(&self, query: Query) -> Result<Report, DomainError> {
        self.pipeline.run(query).await
    }

    pub async fn translate<'a>(&self, report: &'a Report, target: Language) -> Cow<'a, Report> {
        self.translator.translate(report, target).await
    }

    pub fn reports(&self, limit: Option<usize>) -> Result<Vec<Report>, DomainError> {
        self.pipeline.context().history().list(limit)
    }

    pub fn report(&self, id: &str) -> Result<Report, DomainError> {
        self.pipeline
            .context()
            .history()
            .get_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Report {id}")))
    }

    pub fn report_count(&self) -> Result<usize, DomainError> {
        self.pipeline.context().history().count()
    }

    pub fn activity_log(&self) -> Vec<ActivityLogEntry> {
        self.pipeline.context().activity().snapshot()
    }
}
