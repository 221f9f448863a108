use crate::domain::entities::report::Report;
use crate::domain::error::DomainError;
use crate::domain::ports::report_repository::ReportRepository;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::Mutex;

/// Report history persisted as JSON documents, ordered by insertion.
pub struct SqliteReportRepo {
    conn: Mutex<Connection>,
}

impl SqliteReportRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn decode(document: String) -> Result<Report, DomainError> {
        serde_json::from_str(&document)
            .map_err(|e| DomainError::Parse(format!("Corrupt report document: {e}")))
    }
}

impl ReportRepository for SqliteReportRepo {
    fn append(&self, report: &Report) -> Result<(), DomainError> {
        let document = serde_json::to_string(report)
            .map_err(|e| DomainError::Parse(format!("Failed to encode report: {e}")))?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO reports (id, title, query, document, generated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                report.id,
                report.title,
                report.market_data.query.text(),
                document,
                report.generated_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to append report: {e}")))?;
        Ok(())
    }

    fn list(&self, limit: Option<usize>) -> Result<Vec<Report>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        // Newest `limit` rows, flipped back to oldest-first below.
        let limit = limit.map_or(-1, |l| l as i64);
        let mut stmt = conn
            .prepare("SELECT document FROM reports ORDER BY seq DESC LIMIT ?1")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let documents = stmt
            .query_map(params![limit], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let mut reports = documents
            .into_iter()
            .map(Self::decode)
            .collect::<Result<Vec<_>, _>>()?;
        reports.reverse();
        Ok(reports)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<Report>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let document: Option<String> = conn
            .query_row(
                "SELECT document FROM reports WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        document.map(Self::decode).transpose()
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(n as usize)
    }
}
