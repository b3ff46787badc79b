//! Observable local collections.
//!
//! [`LocalStore`] owns one `watch` channel per query shape: all journals
//! newest first, and the whole chat history oldest first. Every successful
//! write re-reads the affected collection under the same lock and publishes
//! it, so a subscriber never misses a write and new subscribers start from the
//! latest snapshot. Dropping a receiver cancels the subscription.
//!
//! Reads and writes run on tokio's blocking pool; awaiting one never stalls
//! the runtime thread while another caller holds the connection.

use std::sync::Arc;

use tokio::sync::watch;

use dear_shared::DeliveryStatus;

use crate::database::{lock, run_blocking, Database, SharedDatabase};
use crate::error::{Result, StoreError};
use crate::models::{ChatMessageRecord, JournalRecord};

type Snapshot<T> = Arc<watch::Sender<Vec<T>>>;

pub struct LocalStore {
    db: SharedDatabase,
    journals: Snapshot<JournalRecord>,
    chat: Snapshot<ChatMessageRecord>,
}

impl LocalStore {
    /// Wrap `db` and load the initial snapshots.
    pub fn open(db: SharedDatabase) -> Result<Self> {
        let (journals, chat) = {
            let guard = lock(&db)?;
            (guard.list_journals()?, guard.list_chat_messages()?)
        };

        tracing::debug!(
            journals = journals.len(),
            chat_messages = chat.len(),
            "local store opened"
        );

        Ok(Self {
            db,
            journals: Arc::new(watch::channel(journals).0),
            chat: Arc::new(watch::channel(chat).0),
        })
    }

    // ------------------------------------------------------------------
    // Journals
    // ------------------------------------------------------------------

    /// Subscribe to the journal collection, newest first.
    pub fn observe_journals(&self) -> watch::Receiver<Vec<JournalRecord>> {
        self.journals.subscribe()
    }

    /// Read the journal collection once.
    pub async fn journals(&self) -> Result<Vec<JournalRecord>> {
        run_blocking(&self.db, |db| db.list_journals()).await
    }

    pub async fn journal(&self, id: &str) -> Result<Option<JournalRecord>> {
        let id = id.to_string();
        run_blocking(&self.db, move |db| found(db.get_journal(&id))).await
    }

    pub async fn upsert_journal(&self, journal: &JournalRecord) -> Result<()> {
        let journal = journal.clone();
        self.write_journals(move |db| db.upsert_journal(&journal)).await
    }

    /// Upsert a batch atomically with a single notification.
    pub async fn upsert_journals(&self, journals: &[JournalRecord]) -> Result<()> {
        let journals = journals.to_vec();
        self.write_journals(move |db| db.upsert_journals(&journals)).await
    }

    pub async fn delete_journal(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.write_journals(move |db| db.delete_journal(&id)).await
    }

    async fn write_journals<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let snapshot = Arc::clone(&self.journals);
        run_blocking(&self.db, move |db| {
            let out = op(db)?;
            snapshot.send_replace(db.list_journals()?);
            Ok(out)
        })
        .await
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// Subscribe to the chat history, oldest first.
    pub fn observe_chat(&self) -> watch::Receiver<Vec<ChatMessageRecord>> {
        self.chat.subscribe()
    }

    pub async fn chat_message(&self, id: &str) -> Result<Option<ChatMessageRecord>> {
        let id = id.to_string();
        run_blocking(&self.db, move |db| found(db.get_chat_message(&id))).await
    }

    pub async fn upsert_chat_message(&self, message: &ChatMessageRecord) -> Result<()> {
        let message = message.clone();
        self.write_chat(move |db| db.upsert_chat_message(&message)).await
    }

    /// Store `reply` and confirm `message_id` atomically.
    pub async fn record_chat_reply(&self, message_id: &str, reply: &ChatMessageRecord) -> Result<bool> {
        let message_id = message_id.to_string();
        let reply = reply.clone();
        self.write_chat(move |db| db.record_chat_reply(&message_id, &reply)).await
    }

    pub async fn delete_chat_message(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        self.write_chat(move |db| db.delete_chat_message(&id)).await
    }

    pub async fn set_chat_flag(&self, id: &str, flagged: bool) -> Result<bool> {
        let id = id.to_string();
        self.write_chat(move |db| db.set_chat_flag(&id, flagged)).await
    }

    pub async fn set_delivery_status(&self, id: &str, status: DeliveryStatus) -> Result<bool> {
        let id = id.to_string();
        self.write_chat(move |db| db.set_delivery_status(&id, status)).await
    }

    async fn write_chat<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let snapshot = Arc::clone(&self.chat);
        run_blocking(&self.db, move |db| {
            let out = op(db)?;
            snapshot.send_replace(db.list_chat_messages()?);
            Ok(out)
        })
        .await
    }
}

fn found<T>(lookup: Result<T>) -> Result<Option<T>> {
    match lookup {
        Ok(record) => Ok(Some(record)),
        Err(StoreError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
