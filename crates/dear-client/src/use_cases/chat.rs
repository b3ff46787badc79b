use std::sync::Arc;

use futures::stream::BoxStream;

use dear_shared::ChatMessage;

use crate::error::Result;
use crate::repository::ChatRepository;

use super::require_filled;

pub struct GetChatHistory {
    repo: Arc<dyn ChatRepository>,
}

impl GetChatHistory {
    pub fn new(repo: Arc<dyn ChatRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> BoxStream<'static, Vec<ChatMessage>> {
        self.repo.observe_chat_history()
    }
}

pub struct SendMessage {
    repo: Arc<dyn ChatRepository>,
}

impl SendMessage {
    pub fn new(repo: Arc<dyn ChatRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, text: &str) -> Result<()> {
        require_filled(text, "message")?;
        self.repo.send_message(text).await
    }
}

pub struct RetryMessage {
    repo: Arc<dyn ChatRepository>,
}

impl RetryMessage {
    pub fn new(repo: Arc<dyn ChatRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<()> {
        self.repo.retry_message(id).await
    }
}

pub struct DeleteMessage {
    repo: Arc<dyn ChatRepository>,
}

impl DeleteMessage {
    pub fn new(repo: Arc<dyn ChatRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<()> {
        self.repo.delete_message(id).await
    }
}

pub struct FlagMessage {
    repo: Arc<dyn ChatRepository>,
}

impl FlagMessage {
    pub fn new(repo: Arc<dyn ChatRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str, flagged: bool) -> Result<()> {
        self.repo.flag_message(id, flagged).await
    }
}
