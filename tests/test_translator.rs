mod common;

use common::{query, setup, MapTranslation, UnreachableTranslation};
use marketscope::application::composer::SUMMARY_TEMPLATE;
use marketscope::application::translator::Translator;
use marketscope::domain::entities::analysis::DEFAULT_INSIGHTS;
use marketscope::domain::entities::report::Report;
use marketscope::domain::values::language::Language;
use std::borrow::Cow;
use std::sync::Arc;

async fn sample_report() -> Report {
    setup().generate(query("AI trends in healthcare 2024")).await.unwrap()
}

#[tokio::test]
async fn test_english_is_identity() {
    let report = sample_report().await;
    let translator = Translator::new(Some(Arc::new(MapTranslation::new())));

    let out = translator.translate(&report, Language::English).await;
    match out {
        Cow::Borrowed(r) => assert!(std::ptr::eq(r, &report)),
        Cow::Owned(_) => panic!("English target should not copy the report"),
    }
}

#[tokio::test]
async fn test_unknown_language_name_is_noop() {
    let report = sample_report().await;
    let translator = Translator::new(None);
    let out = translator
        .translate(&report, Language::from_name_or_default("Klingon"))
        .await;
    assert!(matches!(out, Cow::Borrowed(_)));
}

#[tokio::test]
async fn test_no_service_and_no_dictionary_entry_leaves_text() {
    let report = sample_report().await;
    let translator = Translator::new(None);

    // German has no offline phrases.
    let out = translator.translate(&report, Language::German).await;
    assert_eq!(out.executive_summary, report.executive_summary);
    assert_eq!(out.analysis.insights, report.analysis.insights);
    assert_eq!(out.recommendations, report.recommendations);
    assert_eq!(out.language, Language::German);
}

#[tokio::test]
async fn test_offline_dictionary_translates_summary_template() {
    let mut report = sample_report().await;
    report.executive_summary = SUMMARY_TEMPLATE.to_string();
    let translator = Translator::new(None);

    let out = translator.translate(&report, Language::Spanish).await;
    assert_eq!(
        out.executive_summary,
        "Este informe proporciona un análisis integral del mercado con perspectivas impulsadas por IA."
    );
    assert_eq!(out.analysis.insights[0], "Fuerte potencial de crecimiento en mercados emergentes");
    assert_eq!(out.recommendations[2], "Expandirse a nuevos mercados");
}

#[tokio::test]
async fn test_field_failure_is_isolated() {
    let report = sample_report().await;
    let service = MapTranslation::new()
        .fails_on(&report.executive_summary)
        .translates(DEFAULT_INSIGHTS[0], "Gran potencial (en línea)");
    let translator = Translator::new(Some(Arc::new(service)));

    let out = translator.translate(&report, Language::Spanish).await;
    // The composed summary carries highlights, so no offline phrase matches either.
    assert_eq!(out.executive_summary, report.executive_summary);
    assert_eq!(out.analysis.insights[0], "Gran potencial (en línea)");
    // Online returned the input unchanged, so the offline phrase wins.
    assert_eq!(out.analysis.insights[1], "Adopción creciente de tecnologías de IA");
}

#[tokio::test]
async fn test_online_result_identical_to_input_falls_through() {
    let translator = Translator::new(Some(Arc::new(MapTranslation::new())));
    let out = translator
        .translate_field("Focus on customer experience", Language::French)
        .await;
    assert_eq!(out, "Se concentrer sur l'expérience client");
}

#[tokio::test]
async fn test_online_service_beats_dictionary() {
    let service = MapTranslation::new().translates("Expand into new markets", "Ampliar mercados");
    let translator = Translator::new(Some(Arc::new(service)));
    let out = translator
        .translate_field("Expand into new markets", Language::Spanish)
        .await;
    assert_eq!(out, "Ampliar mercados");
}

#[tokio::test]
async fn test_original_report_is_not_mutated() {
    let report = sample_report().await;
    let before = report.clone();
    let translator = Translator::new(None);

    let out = translator.translate(&report, Language::Hindi).await;
    assert!(matches!(out, Cow::Owned(_)));
    assert_ne!(out.recommendations, report.recommendations);
    assert_eq!(report, before);
    assert_eq!(out.id, report.id);
}

#[tokio::test]
async fn test_unavailable_service_is_skipped_for_remaining_fields() {
    let report = sample_report().await;
    let service = Arc::new(UnreachableTranslation::default());
    let translator = Translator::new(Some(service.clone()));

    let out = translator.translate(&report, Language::Spanish).await;
    assert_eq!(service.calls(), 1);
    assert_eq!(out.analysis.insights[0], "Fuerte potencial de crecimiento en mercados emergentes");
    assert_eq!(out.recommendations[2], "Expandirse a nuevos mercados");

    // The next report tries the service again.
    translator.translate(&report, Language::Spanish).await;
    assert_eq!(service.calls(), 2);
}
