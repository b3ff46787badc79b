//! Translation between wire, persisted and domain shapes.
//!
//! Everything here is pure. The only fallible step is reading a server
//! timestamp: the backend sends offset-free ISO date-times
//! (`2024-06-01T07:30:00.123456`), which are taken to be UTC. Strings that
//! carry an offset are rejected rather than guessed at.

use chrono::{DateTime, NaiveDateTime, Utc};

use dear_net::dto::{
    ArticleResponse, AudioTrackResponse, JournalResponse, MotivationalQuoteResponse,
    UserProfileResponse,
};
use dear_shared::{Article, AudioTrack, ChatMessage, JournalEntry, MotivationalQuote, User};
use dear_store::{ChatMessageRecord, JournalRecord};

use crate::error::MappingError;

const SERVER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parse a server date-time as UTC.
pub fn parse_server_timestamp(raw: &str) -> Result<DateTime<Utc>, MappingError> {
    NaiveDateTime::parse_from_str(raw.trim(), SERVER_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| MappingError::Timestamp {
            raw: raw.to_string(),
            source,
        })
}

/// A server journal is by definition synced.
pub fn journal_record_from_response(dto: JournalResponse) -> Result<JournalRecord, MappingError> {
    Ok(JournalRecord {
        created_at: parse_server_timestamp(&dto.created_at)?,
        id: dto.id,
        title: dto.title,
        content: dto.content,
        mood: dto.mood,
        sentiment_score: dto.sentiment_score,
        sentiment_label: dto.sentiment_label,
        synced: true,
    })
}

pub fn journal_from_record(record: JournalRecord) -> JournalEntry {
    JournalEntry {
        id: record.id,
        title: record.title,
        content: record.content,
        mood: record.mood,
        sentiment_score: record.sentiment_score,
        sentiment_label: record.sentiment_label,
        created_at: record.created_at,
        synced: record.synced,
    }
}

pub fn chat_message_from_record(record: ChatMessageRecord) -> ChatMessage {
    ChatMessage {
        id: record.id,
        role: record.role,
        content: record.content,
        emotion: record.emotion,
        timestamp: record.timestamp,
        flagged: record.flagged,
        delivery: record.delivery,
    }
}

pub fn user_from_response(dto: UserProfileResponse) -> User {
    User {
        id: dto.id,
        username: dto.username,
        email: dto.email,
    }
}

pub fn article_from_response(dto: ArticleResponse) -> Article {
    Article {
        id: dto.id,
        title: dto.title,
        url: dto.url,
    }
}

pub fn audio_track_from_response(dto: AudioTrackResponse) -> AudioTrack {
    AudioTrack {
        id: dto.id,
        title: dto.title,
        url: dto.url,
    }
}

pub fn quote_from_response(dto: MotivationalQuoteResponse) -> MotivationalQuote {
    MotivationalQuote {
        id: dto.id,
        text: dto.text,
        author: dto.author,
    }
}
