//! Wellness content. Every call is a fresh fetch; nothing is cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use dear_net::ContentApi;
use dear_shared::{Article, AudioTrack, MotivationalQuote};

use crate::error::Result;
use crate::mappers::{article_from_response, audio_track_from_response, quote_from_response};
use crate::repository::ContentRepository;

pub struct DefaultContentRepository {
    api: Arc<dyn ContentApi>,
}

impl DefaultContentRepository {
    pub fn new(api: Arc<dyn ContentApi>) -> Self {
        Self { api }
    }
}

/// The music endpoints answer 404 when they have nothing to offer.
fn empty_on_not_found<T>(result: dear_net::Result<Vec<T>>) -> dear_net::Result<Vec<T>> {
    match result {
        Err(e) if e.is_not_found() => {
            debug!("no music available");
            Ok(Vec::new())
        }
        other => other,
    }
}

#[async_trait]
impl ContentRepository for DefaultContentRepository {
    async fn articles(&self) -> Result<Vec<Article>> {
        let articles = self.api.articles().await?;
        Ok(articles.into_iter().map(article_from_response).collect())
    }

    async fn audio_tracks(&self) -> Result<Vec<AudioTrack>> {
        let tracks = self.api.audio().await?;
        Ok(tracks.into_iter().map(audio_track_from_response).collect())
    }

    async fn quotes(&self) -> Result<Vec<MotivationalQuote>> {
        let quotes = self.api.quotes().await?;
        Ok(quotes.into_iter().map(quote_from_response).collect())
    }

    async fn mood_music(&self, mood: &str) -> Result<Vec<AudioTrack>> {
        let tracks = empty_on_not_found(self.api.mood_music(mood).await)?;
        Ok(tracks.into_iter().map(audio_track_from_response).collect())
    }

    async fn recommended_music(&self) -> Result<Vec<AudioTrack>> {
        let tracks = empty_on_not_found(self.api.recommended_music().await)?;
        Ok(tracks.into_iter().map(audio_track_from_response).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DearError;
    use crate::testing::MockContentApi;

    #[tokio::test]
    async fn music_404_is_empty() {
        let repo = DefaultContentRepository::new(Arc::new(MockContentApi::music_failing(404)));
        assert!(repo.mood_music("sad").await.unwrap().is_empty());
        assert!(repo.recommended_music().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_music_failures_propagate() {
        let repo = DefaultContentRepository::new(Arc::new(MockContentApi::music_failing(500)));
        let err = repo.mood_music("sad").await.unwrap_err();
        assert!(matches!(err, DearError::Remote(_)));
    }

    #[tokio::test]
    async fn content_is_mapped() {
        let api = Arc::new(MockContentApi::default());
        let repo = DefaultContentRepository::new(api.clone());

        assert_eq!(repo.articles().await.unwrap()[0].title, "Sleep hygiene");
        assert_eq!(repo.audio_tracks().await.unwrap().len(), 2);
        assert_eq!(repo.quotes().await.unwrap()[0].text, "One day at a time.");
        assert_eq!(repo.mood_music("calm").await.unwrap()[0].id, "calm");
        assert_eq!(api.calls(), 4);
    }
}
