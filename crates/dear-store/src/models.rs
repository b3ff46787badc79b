//! Record structs persisted in the local SQLite database.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use dear_shared::{ChatRole, DeliveryStatus};

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

/// A row of `journal_entries`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: String,
    pub sentiment_score: Option<f64>,
    pub sentiment_label: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Whether this copy came from (or was confirmed by) the backend.
    pub synced: bool,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// A row of `chat_messages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessageRecord {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub emotion: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub flagged: bool,
    pub delivery: DeliveryStatus,
}

// ---------------------------------------------------------------------------
// Column helpers
// ---------------------------------------------------------------------------

/// Encode a timestamp as fixed-width RFC-3339 so that text ordering in SQL
/// matches chronological ordering.
pub(crate) fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_failure(idx, e))
}

pub(crate) fn conversion_failure<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}
