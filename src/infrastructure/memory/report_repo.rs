use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::report_repository::ReportRepository;
use std::sync::RwLock;

/// Process-lifetime report history. Grows monotonically.
#[derive(Default)]
pub struct InMemoryReportRepo {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportRepository for InMemoryReportRepo {
    fn append(&self, report: &Report) -> Result<(), DomainError> {
        let mut reports = self
            .reports
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        reports.push(report.clone());
        Ok(())
    }

    fn list(&self, limit: Option<usize>) -> Result<Vec<Report>, DomainError> {
        let reports = self
            .reports
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let skip = limit.map_or(0, |l| reports.len().saturating_sub(l));
        Ok(reports[skip..].to_vec())
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Report>, DomainError> {
        let reports = self
            .reports
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(reports.iter().find(|r| r.id == id).cloned())
    }

    fn count(&self) -> Result<usize, DomainError> {
        let reports = self
            .reports
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(reports.len())
    }
}
