use crate::domain::entities::analysis::Analysis;
use crate::domain::entities::collected_data::CollectedData;
use crate::domain::values::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A composed report. Never mutated after composition; translation yields a
/// new value so the source-language original stays in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub executive_summary: String,
    pub market_data: CollectedData,
    pub analysis: Analysis,
    pub recommendations: Vec<String>,
    pub language: Language,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        title: String,
        executive_summary: String,
        market_data: CollectedData,
        analysis: Analysis,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            executive_summary,
            market_data,
            analysis,
            recommendations,
            language: Language::English,
            generated_at: Utc::now(),
        }
    }
}
