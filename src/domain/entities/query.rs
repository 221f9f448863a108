use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// A research request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    text: String,
    industry: Option<String>,
    timeframe: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(DomainError::InvalidInput(
                "Please enter a market research query".into(),
            ));
        }
        Ok(Self {
            text,
            industry: None,
            timeframe: None,
        })
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = non_blank(industry.into());
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = non_blank(timeframe.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    pub fn timeframe(&self) -> Option<&str> {
        self.timeframe.as_deref()
    }
}

fn non_blank(s: String) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_query() {
        assert!(Query::new("   ").is_err());
        assert!(Query::new("").is_err());
    }

    #[test]
    fn test_hints() {
        let q = Query::new("  EV batteries ")
            .unwrap()
            .with_industry("Automotive")
            .with_timeframe(" ");
        assert_eq!(q.text(), "EV batteries");
        assert_eq!(q.industry(), Some("Automotive"));
        assert_eq!(q.timeframe(), None);
    }
}
