//! Journals: the local store renders, the backend is pulled on demand.
//!
//! Creation is remote-first and online-only. Updates and deletes touch only
//! the local store; there is no remote edit or delete call.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

use dear_net::dto::CreateJournalRequest;
use dear_net::JournalApi;
use dear_shared::constants::NO_MOOD;
use dear_shared::{GrowthStatistics, JournalEntry};
use dear_store::{JournalRecord, LocalStore};

use crate::error::{DearError, Result};
use crate::mappers::{journal_from_record, journal_record_from_response};
use crate::repository::JournalRepository;

pub struct DefaultJournalRepository {
    api: Arc<dyn JournalApi>,
    store: Arc<LocalStore>,
}

impl DefaultJournalRepository {
    pub fn new(api: Arc<dyn JournalApi>, store: Arc<LocalStore>) -> Self {
        Self { api, store }
    }
}

#[async_trait]
impl JournalRepository for DefaultJournalRepository {
    fn observe_journals(&self) -> BoxStream<'static, Vec<JournalEntry>> {
        WatchStream::new(self.store.observe_journals())
            .map(|records| records.into_iter().map(journal_from_record).collect())
            .boxed()
    }

    fn observe_journal(&self, id: &str) -> BoxStream<'static, Option<JournalEntry>> {
        let id = id.to_string();
        WatchStream::new(self.store.observe_journals())
            .map(move |records| {
                records
                    .into_iter()
                    .find(|record| record.id == id)
                    .map(journal_from_record)
            })
            .boxed()
    }

    /// Upsert every server journal. Local journals the server no longer
    /// lists are kept. Nothing is written unless the whole list maps.
    async fn sync(&self) -> Result<()> {
        let remote = self.api.list_journals().await.map_err(|e| {
            warn!(error = %e, "journal sync failed");
            DearError::from(e)
        })?;

        let records = remote
            .into_iter()
            .map(journal_record_from_response)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        self.store.upsert_journals(&records).await?;
        info!(count = records.len(), "journals synced");
        Ok(())
    }

    async fn create_journal(&self, title: &str, content: &str, mood: &str) -> Result<()> {
        let request = CreateJournalRequest {
            title: title.to_string(),
            content: content.to_string(),
            mood: mood.to_string(),
        };
        let created = self.api.create_journal(&request).await.map_err(|e| {
            warn!(error = %e, "journal create failed");
            DearError::from(e)
        })?;

        let record = journal_record_from_response(created)?;
        self.store.upsert_journal(&record).await?;
        info!(journal_id = %record.id, "journal created");
        Ok(())
    }

    async fn update_journal(
        &self,
        id: &str,
        title: &str,
        content: &str,
        mood: &str,
    ) -> Result<()> {
        let mut record = self
            .store
            .journal(id)
            .await?
            .ok_or_else(|| DearError::not_found("journal", id))?;

        record.title = title.to_string();
        record.content = content.to_string();
        record.mood = mood.to_string();
        self.store.upsert_journal(&record).await?;
        info!(journal_id = %id, "journal updated locally");
        Ok(())
    }

    async fn delete_journal(&self, id: &str) -> Result<()> {
        let removed = self.store.delete_journal(id).await?;
        debug!(journal_id = %id, removed, "journal deleted locally");
        Ok(())
    }

    async fn growth_statistics(&self) -> Result<GrowthStatistics> {
        let journals = self.store.journals().await?;
        Ok(fold_growth_statistics(&journals))
    }
}

/// Count, most frequent mood and mean sentiment of `journals`.
///
/// Mood ties go to the mood seen first in `journals`. The mean ignores
/// journals without a score and is rounded half-up to two decimals.
pub fn fold_growth_statistics(journals: &[JournalRecord]) -> GrowthStatistics {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for journal in journals {
        let count = counts.entry(journal.mood.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(journal.mood.as_str());
        }
        *count += 1;
    }

    let mut most_frequent_mood = NO_MOOD;
    let mut best = 0;
    for mood in first_seen {
        let count = counts[mood];
        if count > best {
            best = count;
            most_frequent_mood = mood;
        }
    }

    let scores: Vec<f64> = journals.iter().filter_map(|j| j.sentiment_score).collect();
    let average_sentiment = if scores.is_empty() {
        0.0
    } else {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        (mean * 100.0 + 0.5).floor() / 100.0
    };

    GrowthStatistics {
        total_journals: journals.len(),
        most_frequent_mood: most_frequent_mood.to_string(),
        average_sentiment,
    }
}
