use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Active,
    Completed,
    Failed,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageStatus::Active => write!(f, "active"),
            StageStatus::Completed => write!(f, "completed"),
            StageStatus::Failed => write!(f, "failed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub activity: String,
    pub status: StageStatus,
}

impl ActivityLogEntry {
    pub fn new(agent: impl Into<String>, activity: impl Into<String>, status: StageStatus) -> Self {
        Self {
            timestamp: Utc::now(),
            agent: agent.into(),
            activity: activity.into(),
            status,
        }
    }
}

impl fmt::Display for ActivityLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.timestamp.format("%H:%M:%S"),
            self.agent,
            self.status,
            self.activity
        )
    }
}
