mod common;

use common::query;
use marketscope::application::export::render_markdown;
use marketscope::{MarketScope, Providers};
use tempfile::TempDir;

#[tokio::test]
async fn test_sqlite_history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("reports.db");
    let db = db.to_str().unwrap();

    let id = {
        let ms = MarketScope::open(db, Providers::offline()).unwrap();
        ms.generate(query("green hydrogen")).await.unwrap().id
    };

    let ms = MarketScope::open(db, Providers::offline()).unwrap();
    assert_eq!(ms.report_count().unwrap(), 1);
    let report = ms.report(&id).unwrap();
    assert_eq!(report.market_data.query.text(), "green hydrogen");
    assert_eq!(report.analysis.insights.as_slice().len(), 3);
}

#[tokio::test]
async fn test_list_limit_returns_most_recent_oldest_first() {
    let ms = MarketScope::open(":memory:", Providers::offline()).unwrap();
    for q in ["one", "two", "three"] {
        ms.generate(query(q)).await.unwrap();
    }

    let all = ms.reports(None).unwrap();
    let texts: Vec<&str> = all.iter().map(|r| r.market_data.query.text()).collect();
    assert_eq!(texts, ["one", "two", "three"]);

    let recent = ms.reports(Some(2)).unwrap();
    let texts: Vec<&str> = recent.iter().map(|r| r.market_data.query.text()).collect();
    assert_eq!(texts, ["two", "three"]);
}

#[tokio::test]
async fn test_markdown_export_has_report_sections() {
    let ms = MarketScope::open(":memory:", Providers::offline()).unwrap();
    let report = ms.generate(query("space tourism")).await.unwrap();
    let md = render_markdown(&report);

    assert!(md.starts_with(&format!("# {}", report.title)));
    assert!(md.contains("## Executive Summary"));
    assert!(md.contains(&format!("- {}", report.analysis.insights[0])));
    assert!(md.contains("- Focus on customer experience"));
    assert!(md.contains(&format!("Risk Level: {}", report.analysis.risk_level)));
    assert!(md.contains("Growth Potential: "));
}
