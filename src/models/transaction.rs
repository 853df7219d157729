//! Transaction log entries

use std::fmt;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the catalog file and in listings
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionAction {
    Borrowed,
    Returned,
}

impl TransactionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionAction::Borrowed => "borrowed",
            TransactionAction::Returned => "returned",
        }
    }
}

impl fmt::Display for TransactionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of a borrow or return
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub user_id: String,
    pub user_name: String,
    pub title: String,
    pub action: TransactionAction,
    #[serde(with = "local_time")]
    pub time: NaiveDateTime,
}

impl Transaction {
    /// Stamp a new entry with the current local time, truncated to seconds
    pub fn now(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        title: impl Into<String>,
        action: TransactionAction,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            title: title.into(),
            action,
            time: truncate_to_seconds(now),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

fn truncate_to_seconds(time: NaiveDateTime) -> NaiveDateTime {
    time.with_nanosecond(0).unwrap_or(time)
}

mod local_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_serializes_as_legacy_string() {
        let json = r#"{"user_id":"u1","user_name":"Alice","title":"Dune","action":"borrowed","time":"2024-03-01 09:15:00"}"#;
        let entry: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(entry.action, TransactionAction::Borrowed);
        assert_eq!(entry.formatted_time(), "2024-03-01 09:15:00");
        assert_eq!(serde_json::to_string(&entry).unwrap(), json);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let json = r#"{"user_id":"u1","user_name":"Alice","title":"Dune","action":"returned","time":"yesterday"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_now_has_whole_seconds() {
        let entry = Transaction::now("u1", "Alice", "Dune", TransactionAction::Returned);
        assert_eq!(entry.time.nanosecond(), 0);
        assert_eq!(entry.action.to_string(), "returned");
    }
}
