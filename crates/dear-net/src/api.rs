//! One async trait per backend area.

use async_trait::async_trait;

use crate::dto::*;
use crate::error::Result;

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;
    /// `POST auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<()>;
}

#[async_trait]
pub trait JournalApi: Send + Sync {
    /// `GET journals`
    async fn list_journals(&self) -> Result<Vec<JournalResponse>>;
    /// `POST journals`
    async fn create_journal(&self, request: &CreateJournalRequest) -> Result<JournalResponse>;
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    /// `POST chat/`
    async fn post_message(&self, request: &ChatRequest) -> Result<ChatResponse>;
    /// `DELETE chat/{id}`
    async fn delete_message(&self, id: &str) -> Result<()>;
    /// `PATCH chat/{id}/flag`
    async fn set_flag(&self, id: &str, request: &FlagRequest) -> Result<()>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET users/me`
    async fn profile(&self) -> Result<UserProfileResponse>;
}

#[async_trait]
pub trait ContentApi: Send + Sync {
    /// `GET articles`
    async fn articles(&self) -> Result<Vec<ArticleResponse>>;
    /// `GET audio`
    async fn audio(&self) -> Result<Vec<AudioTrackResponse>>;
    /// `GET quotes`
    async fn quotes(&self) -> Result<Vec<MotivationalQuoteResponse>>;
    /// `GET music?mood=`
    async fn mood_music(&self, mood: &str) -> Result<Vec<AudioTrackResponse>>;
    /// `GET music/recommend`
    async fn recommended_music(&self) -> Result<Vec<AudioTrackResponse>>;
}
