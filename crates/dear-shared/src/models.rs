//! Domain entities handed to the use-case layer and its consumers.
//!
//! These are independent of both the wire format (`dear-net`) and the
//! persisted format (`dear-store`); the mapping layer in `dear-client`
//! translates between them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ChatRole, DeliveryStatus};

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

/// A mood-tagged journal entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// Server-assigned id once synced, client UUID otherwise.
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form mood label chosen by the user.
    pub mood: String,
    /// Sentiment score derived by the backend, if analysed.
    pub sentiment_score: Option<f64>,
    /// Sentiment label derived by the backend, if analysed.
    pub sentiment_label: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `true` only for entries confirmed written to the backend.
    pub synced: bool,
}

/// Aggregates derived from the local journal collection. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthStatistics {
    pub total_journals: usize,
    /// Most common mood, or [`crate::constants::NO_MOOD`] when empty.
    pub most_frequent_mood: String,
    /// Mean of the non-null sentiment scores, rounded to two decimals.
    pub average_sentiment: f64,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// One message of the assistant conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Emotion detected by the assistant, replies only.
    pub emotion: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub flagged: bool,
    pub delivery: DeliveryStatus,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Wellness content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AudioTrack {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MotivationalQuote {
    pub id: String,
    pub text: String,
    pub author: String,
}
