//! Drive journal.
//!
//! Immutable record of drives performed, in order. Recording returns a
//! new journal and leaves the existing one untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One drive: which vehicle, what it produced, and when.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriveRecord {
    /// Vehicle kind name
    pub vehicle: String,
    /// The line the drive produced
    pub message: String,
    /// When the drive happened
    pub timestamp: DateTime<Utc>,
}

impl DriveRecord {
    /// Record a drive happening now.
    pub fn now(vehicle: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            vehicle: vehicle.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered journal of drives.
///
/// # Example
///
/// ```rust
/// use drive_strategy::journal::{DriveLog, DriveRecord};
///
/// let log = DriveLog::new();
/// let updated = log.record(DriveRecord::now("goods", "Normal drive capability"));
///
/// assert_eq!(updated.records().len(), 1);
/// assert_eq!(log.records().len(), 0); // Original unchanged
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveLog {
    records: Vec<DriveRecord>,
}

impl DriveLog {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a drive, returning a new journal.
    pub fn record(&self, record: DriveRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    pub fn records(&self) -> &[DriveRecord] {
        &self.records
    }

    /// Lines produced, in drive order.
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Time between first and last drive.
    pub fn duration(&self) -> Option<std::time::Duration> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_journal_is_empty() {
        let log = DriveLog::new();
        assert!(log.records().is_empty());
        assert!(log.duration().is_none());
    }

    #[test]
    fn messages_keep_drive_order() {
        let log = DriveLog::new()
            .record(DriveRecord::now("sports", "Sports drive capability"))
            .record(DriveRecord::now("goods", "Normal drive capability"));

        assert_eq!(
            log.messages(),
            ["Sports drive capability", "Normal drive capability"]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let first = DriveRecord {
            vehicle: "goods".to_string(),
            message: "Normal drive capability".to_string(),
            timestamp: start,
        };
        let last = DriveRecord {
            timestamp: start + Duration::seconds(5),
            ..first.clone()
        };

        let log = DriveLog::new().record(first).record(last);
        assert_eq!(log.duration(), Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn journal_serializes_correctly() {
        let log = DriveLog::new().record(DriveRecord::now("base", "Normal driving"));
        let json = serde_json::to_string(&log).unwrap();
        let deserialized: DriveLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
