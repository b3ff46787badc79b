//! Wire-format request and response bodies.
//!
//! Field names follow the backend's JSON exactly. Anything the backend may
//! omit is optional here; unknown fields are ignored.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}

// ---------------------------------------------------------------------------
// Journals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CreateJournalRequest {
    pub title: String,
    pub content: String,
    pub mood: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct JournalResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub mood: String,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    /// Date-time as sent by the server; parsed by the mapping layer.
    pub created_at: String,
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// Assistant reply text.
    #[serde(alias = "reply")]
    pub content: String,
    #[serde(default)]
    pub emotion: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlagRequest {
    pub is_flagged: bool,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserProfileResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub username: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AudioTrackResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MotivationalQuoteResponse {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
    pub author: String,
}

/// Ids arrive as strings from some endpoints and as integers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
