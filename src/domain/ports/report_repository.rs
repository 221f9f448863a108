use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;

/// Append-only history of composed reports, oldest first.
pub trait ReportRepository: Send + Sync {
    fn append(&self, report: &Report) -> Result<(), DomainError>;
    /// The most recent `limit` reports (all when `None`), oldest first.
    fn list(&self, limit: Option<usize>) -> Result<Vec<Report>, DomainError>;
    fn get_by_id(&self, id: &str) -> Result<Option<Report>, DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
}
