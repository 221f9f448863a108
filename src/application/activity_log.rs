use crate::domain::entities::activity::{ActivityLogEntry, StageStatus};
use std::sync::Mutex;

/// Process-wide, append-only activity log. Each append completes under the
/// lock, so entries from concurrent runs never interleave mid-write.
#[derive(Default)]
pub struct ActivityLog {
    entries: Mutex<Vec<ActivityLogEntry>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, agent: &str, activity: impl Into<String>, status: StageStatus) -> ActivityLogEntry {
        let entry = ActivityLogEntry::new(agent, activity, status);
        tracing::info!(agent, status = %status, activity = %entry.activity, "pipeline activity");
        // A poisoned lock still holds a consistent Vec: pushes are atomic.
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.push(entry.clone());
        entry
    }

    pub fn snapshot(&self) -> Vec<ActivityLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_keeps_append_order() {
        let log = ActivityLog::new();
        assert!(log.snapshot().is_empty());
        log.record("Scraper Agent", "one", StageStatus::Active);
        log.record("Scraper Agent", "two", StageStatus::Completed);
        let entry = log.record("Analyzer Agent", "three", StageStatus::Active);

        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].activity, "one");
        assert_eq!(entries[2], entry);
    }
}
