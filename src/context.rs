//! Per-run context shared by every record builder

use chrono::{DateTime, Duration, Utc};

use crate::config::SeederConfig;

/// Values captured once at the start of a seeding run.
///
/// Every builder reads the same timestamp so that all documents of a run
/// agree on "now".
#[derive(Debug, Clone)]
pub struct RunContext {
    timestamp: DateTime<Utc>,
    config: SeederConfig,
}

impl RunContext {
    /// Capture the current wall-clock time
    pub fn new(config: SeederConfig) -> Self {
        Self::at(config, Utc::now())
    }

    /// Build a context pinned to a given timestamp
    pub fn at(config: SeederConfig, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, config }
    }

    /// Timestamp shared by every document of the run
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Configuration the run was started with
    pub fn config(&self) -> &SeederConfig {
        &self.config
    }

    /// Physical name of a logical collection
    pub fn collection<'a>(&'a self, logical: &'a str) -> &'a str {
        self.config.collection(logical)
    }

    /// Run timestamp minus `days`
    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.timestamp - Duration::days(days)
    }

    /// Run timestamp plus `days`
    pub fn days_ahead(&self, days: i64) -> DateTime<Utc> {
        self.timestamp + Duration::days(days)
    }

    /// Run timestamp minus `hours`
    pub fn hours_ago(&self, hours: i64) -> DateTime<Utc> {
        self.timestamp - Duration::hours(hours)
    }
}
