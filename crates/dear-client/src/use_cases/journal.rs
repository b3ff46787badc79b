use std::sync::Arc;

use futures::stream::BoxStream;

use dear_shared::{GrowthStatistics, JournalEntry};

use crate::error::Result;
use crate::repository::JournalRepository;

use super::require_filled;

pub struct GetJournals {
    repo: Arc<dyn JournalRepository>,
}

impl GetJournals {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> BoxStream<'static, Vec<JournalEntry>> {
        self.repo.observe_journals()
    }
}

pub struct GetJournalById {
    repo: Arc<dyn JournalRepository>,
}

impl GetJournalById {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, id: &str) -> BoxStream<'static, Option<JournalEntry>> {
        self.repo.observe_journal(id)
    }
}

pub struct SyncJournals {
    repo: Arc<dyn JournalRepository>,
}

impl SyncJournals {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<()> {
        self.repo.sync().await
    }
}

/// Create a journal when `id` is `None`, otherwise edit the local copy.
pub struct SaveJournal {
    repo: Arc<dyn JournalRepository>,
}

impl SaveJournal {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: Option<&str>,
        title: &str,
        content: &str,
        mood: &str,
    ) -> Result<()> {
        require_filled(title, "title")?;
        require_filled(content, "content")?;
        match id {
            None => self.repo.create_journal(title, content, mood).await,
            Some(id) => self.repo.update_journal(id, title, content, mood).await,
        }
    }
}

pub struct DeleteJournal {
    repo: Arc<dyn JournalRepository>,
}

impl DeleteJournal {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<()> {
        self.repo.delete_journal(id).await
    }
}

pub struct GetGrowthStatistics {
    repo: Arc<dyn JournalRepository>,
}

impl GetGrowthStatistics {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<GrowthStatistics> {
        self.repo.growth_statistics().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use futures::stream::{self, StreamExt};

    use crate::error::{DearError, ValidationError};

    /// Counts every repository call and otherwise does nothing.
    #[derive(Default)]
    struct CountingRepository {
        created: AtomicU32,
        updated: AtomicU32,
        other: AtomicU32,
    }

    impl CountingRepository {
        fn total(&self) -> u32 {
            self.created.load(Ordering::SeqCst)
                + self.updated.load(Ordering::SeqCst)
                + self.other.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl JournalRepository for CountingRepository {
        fn observe_journals(&self) -> BoxStream<'static, Vec<JournalEntry>> {
            self.other.fetch_add(1, Ordering::SeqCst);
            stream::empty().boxed()
        }

        fn observe_journal(&self, _id: &str) -> BoxStream<'static, Option<JournalEntry>> {
            self.other.fetch_add(1, Ordering::SeqCst);
            stream::empty().boxed()
        }

        async fn sync(&self) -> Result<()> {
            self.other.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn create_journal(&self, _: &str, _: &str, _: &str) -> Result<()> {
            self.created.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn update_journal(&self, _: &str, _: &str, _: &str, _: &str) -> Result<()> {
            self.updated.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_journal(&self, _: &str) -> Result<()> {
            self.other.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn growth_statistics(&self) -> Result<GrowthStatistics> {
            self.other.fetch_add(1, Ordering::SeqCst);
            Ok(GrowthStatistics {
                total_journals: 0,
                most_frequent_mood: "-".into(),
                average_sentiment: 0.0,
            })
        }
    }

    #[tokio::test]
    async fn blank_title_or_content_is_rejected_before_any_call() {
        let repo = Arc::new(CountingRepository::default());
        let save = SaveJournal::new(repo.clone());

        for (id, title, content) in [
            (None, "", "body"),
            (None, "title", "   "),
            (Some("j1"), " ", "body"),
            (Some("j1"), "title", ""),
        ] {
            let err = save.execute(id, title, content, "calm").await.unwrap_err();
            assert!(matches!(
                err,
                DearError::Validation(ValidationError::Blank(_))
            ));
        }

        assert_eq!(repo.total(), 0);
    }

    #[tokio::test]
    async fn save_dispatches_on_id() {
        let repo = Arc::new(CountingRepository::default());
        let save = SaveJournal::new(repo.clone());

        save.execute(None, "t", "c", "m").await.unwrap();
        save.execute(Some("j1"), "t", "c", "m").await.unwrap();

        assert_eq!(repo.created.load(Ordering::SeqCst), 1);
        assert_eq!(repo.updated.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pass_through_use_cases() {
        let repo = Arc::new(CountingRepository::default());

        SyncJournals::new(repo.clone()).execute().await.unwrap();
        DeleteJournal::new(repo.clone()).execute("j1").await.unwrap();
        let stats = GetGrowthStatistics::new(repo.clone()).execute().await.unwrap();
        assert_eq!(stats.most_frequent_mood, "-");
        assert!(GetJournals::new(repo.clone()).execute().next().await.is_none());
        assert!(GetJournalById::new(repo.clone())
            .execute("j1")
            .next()
            .await
            .is_none());

        assert_eq!(repo.total(), 5);
    }
}
