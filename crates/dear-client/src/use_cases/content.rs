use std::sync::Arc;

use dear_shared::{Article, AudioTrack, JournalEntry, MotivationalQuote};

use crate::error::Result;
use crate::repository::ContentRepository;

pub struct GetArticles {
    repo: Arc<dyn ContentRepository>,
}

impl GetArticles {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<Article>> {
        self.repo.articles().await
    }
}

pub struct GetAudioTracks {
    repo: Arc<dyn ContentRepository>,
}

impl GetAudioTracks {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<AudioTrack>> {
        self.repo.audio_tracks().await
    }
}

pub struct GetMoodMusic {
    repo: Arc<dyn ContentRepository>,
}

impl GetMoodMusic {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, mood: &str) -> Result<Vec<AudioTrack>> {
        self.repo.mood_music(mood).await
    }
}

pub struct GetRecommendedMusic {
    repo: Arc<dyn ContentRepository>,
}

impl GetRecommendedMusic {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// The backend picks recommendations on its own for now; `journals` is
    /// accepted so callers already pass what a personalised pick will need.
    pub async fn execute(&self, journals: &[JournalEntry]) -> Result<Vec<AudioTrack>> {
        tracing::debug!(journals = journals.len(), "fetching recommended music");
        self.repo.recommended_music().await
    }
}

pub struct GetQuotes {
    repo: Arc<dyn ContentRepository>,
}

impl GetQuotes {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<MotivationalQuote>> {
        self.repo.quotes().await
    }
}
