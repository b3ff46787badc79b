//! Repository seams between the use cases and the data sources.
//!
//! Each trait returns [`crate::Result`]; observable collections are plain
//! streams that never carry an error. The `Default*` implementations merge
//! the local store with the backend.

use async_trait::async_trait;
use futures::stream::BoxStream;

use dear_shared::{
    Article, AudioTrack, ChatMessage, GrowthStatistics, JournalEntry, MotivationalQuote, User,
};

use crate::error::Result;

pub mod auth;
pub mod chat;
pub mod content;
pub mod journal;
pub mod user;

pub use auth::DefaultAuthRepository;
pub use chat::DefaultChatRepository;
pub use content::DefaultContentRepository;
pub use journal::{fold_growth_statistics, DefaultJournalRepository};
pub use user::DefaultUserRepository;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    fn is_logged_in(&self) -> BoxStream<'static, bool>;
    /// Authenticate and store the returned token.
    async fn login(&self, email: &str, password: &str) -> Result<()>;
    /// Create the account, then log in with it.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()>;
    async fn logout(&self) -> Result<()>;
}

#[async_trait]
pub trait JournalRepository: Send + Sync {
    /// All local journals, newest first, re-emitted on every change.
    fn observe_journals(&self) -> BoxStream<'static, Vec<JournalEntry>>;
    fn observe_journal(&self, id: &str) -> BoxStream<'static, Option<JournalEntry>>;
    /// Pull the server's journal list into the local store.
    async fn sync(&self) -> Result<()>;
    async fn create_journal(&self, title: &str, content: &str, mood: &str) -> Result<()>;
    async fn update_journal(&self, id: &str, title: &str, content: &str, mood: &str)
        -> Result<()>;
    async fn delete_journal(&self, id: &str) -> Result<()>;
    async fn growth_statistics(&self) -> Result<GrowthStatistics>;
}

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Chat history, oldest first, re-emitted on every change.
    fn observe_chat_history(&self) -> BoxStream<'static, Vec<ChatMessage>>;
    async fn send_message(&self, text: &str) -> Result<()>;
    /// Resend a user message whose delivery failed or never finished.
    async fn retry_message(&self, id: &str) -> Result<()>;
    async fn delete_message(&self, id: &str) -> Result<()>;
    async fn flag_message(&self, id: &str, flagged: bool) -> Result<()>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_profile(&self) -> Result<User>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn articles(&self) -> Result<Vec<Article>>;
    async fn audio_tracks(&self) -> Result<Vec<AudioTrack>>;
    async fn quotes(&self) -> Result<Vec<MotivationalQuote>>;
    /// Tracks for `mood`; empty when the backend has none.
    async fn mood_music(&self, mood: &str) -> Result<Vec<AudioTrack>>;
    async fn recommended_music(&self) -> Result<Vec<AudioTrack>>;
}
