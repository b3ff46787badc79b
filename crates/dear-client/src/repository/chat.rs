//! Chat: optimistic local history, proxied through the assistant backend.
//!
//! A user message is stored `Pending` before the backend is asked for a
//! reply. The reply and the `Confirmed` status are written in one
//! transaction; any failure marks the message `Failed` instead. Failed
//! messages stay in the history until the user retries or deletes them;
//! nothing is retried automatically.
//!
//! A message that could not even be marked `Failed` stays `Pending`. Retry
//! accepts it too, as long as no delivery for it is running in this process.
//!
//! Concurrent sends are not serialised. Each write is atomic on its own, so
//! rapid sends never corrupt the history, but replies may interleave.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use futures::stream::{BoxStream, StreamExt};
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};
use uuid::Uuid;

use dear_net::dto::{ChatRequest, FlagRequest};
use dear_net::ChatApi;
use dear_shared::{ChatMessage, ChatRole, DeliveryStatus};
use dear_store::{ChatMessageRecord, LocalStore};

use crate::error::{DearError, Result, ValidationError};
use crate::mappers::chat_message_from_record;
use crate::repository::ChatRepository;
use crate::session::SessionState;

pub struct DefaultChatRepository {
    api: Arc<dyn ChatApi>,
    store: Arc<LocalStore>,
    session: SessionState,
    in_flight: Mutex<HashSet<String>>,
}

/// Holds a message id in the in-flight set until dropped.
struct Delivery<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    id: String,
}

impl Drop for Delivery<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

impl DefaultChatRepository {
    pub fn new(api: Arc<dyn ChatApi>, store: Arc<LocalStore>, session: SessionState) -> Self {
        Self {
            api,
            store,
            session,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// `None` if a delivery for `id` is already running.
    fn claim(&self, id: &str) -> Option<Delivery<'_>> {
        let fresh = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string());
        fresh.then(|| Delivery {
            in_flight: &self.in_flight,
            id: id.to_string(),
        })
    }

    async fn mark_failed(&self, id: &str) {
        if let Err(e) = self
            .store
            .set_delivery_status(id, DeliveryStatus::Failed)
            .await
        {
            warn!(message_id = %id, error = %e, "could not mark chat message failed");
        }
    }

    /// Ask the backend to answer the stored user message `id`.
    async fn deliver(&self, id: &str, text: &str) -> Result<()> {
        let request = ChatRequest {
            message: text.to_string(),
        };

        let reply = match self.api.post_message(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                let session_invalid = e.is_session_invalid();
                warn!(message_id = %id, error = %e, session_invalid, "chat delivery failed");
                self.mark_failed(id).await;
                if session_invalid {
                    if let Err(clear) = self.session.clear().await {
                        warn!(message_id = %id, error = %clear, "could not clear rejected session");
                    }
                    return Err(DearError::Unauthorized);
                }
                return Err(e.into());
            }
        };

        let assistant = ChatMessageRecord {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::Assistant,
            content: reply.content,
            emotion: reply.emotion,
            timestamp: Utc::now(),
            flagged: false,
            delivery: DeliveryStatus::Confirmed,
        };

        if let Err(e) = self.store.record_chat_reply(id, &assistant).await {
            warn!(message_id = %id, error = %e, "chat reply not stored");
            self.mark_failed(id).await;
            return Err(e.into());
        }

        debug!(message_id = %id, reply_id = %assistant.id, "chat reply stored");
        Ok(())
    }
}

#[async_trait]
impl ChatRepository for DefaultChatRepository {
    fn observe_chat_history(&self) -> BoxStream<'static, Vec<ChatMessage>> {
        WatchStream::new(self.store.observe_chat())
            .map(|records| records.into_iter().map(chat_message_from_record).collect())
            .boxed()
    }

    async fn send_message(&self, text: &str) -> Result<()> {
        let message = ChatMessageRecord {
            id: Uuid::new_v4().to_string(),
            role: ChatRole::User,
            content: text.to_string(),
            emotion: None,
            timestamp: Utc::now(),
            flagged: false,
            delivery: DeliveryStatus::Pending,
        };
        let _delivery = self.claim(&message.id);
        self.store.upsert_chat_message(&message).await?;
        debug!(message_id = %message.id, "user message stored");

        self.deliver(&message.id, &message.content).await
    }

    /// The retried message moves to the end of the history so that its reply
    /// follows it directly.
    async fn retry_message(&self, id: &str) -> Result<()> {
        let Some(_delivery) = self.claim(id) else {
            debug!(message_id = %id, "retry refused: delivery in progress");
            return Err(ValidationError::NotRetryable(id.to_string()).into());
        };

        let mut message = self
            .store
            .chat_message(id)
            .await?
            .ok_or_else(|| DearError::not_found("chat message", id))?;

        let awaiting = matches!(
            message.delivery,
            DeliveryStatus::Failed | DeliveryStatus::Pending
        );
        if message.role != ChatRole::User || !awaiting {
            debug!(message_id = %id, status = message.delivery.as_str(), "retry refused");
            return Err(ValidationError::NotRetryable(id.to_string()).into());
        }

        message.delivery = DeliveryStatus::Pending;
        message.timestamp = Utc::now();
        self.store.upsert_chat_message(&message).await?;
        info!(message_id = %id, "retrying chat message");

        self.deliver(&message.id, &message.content).await
    }

    async fn delete_message(&self, id: &str) -> Result<()> {
        let removed = self.store.delete_chat_message(id).await?;
        debug!(message_id = %id, removed, "chat message deleted locally");
        Ok(())
    }

    async fn flag_message(&self, id: &str, flagged: bool) -> Result<()> {
        self.api
            .set_flag(id, &FlagRequest { is_flagged: flagged })
            .await
            .map_err(|e| {
                warn!(message_id = %id, error = %e, "flag update rejected");
                DearError::from(e)
            })?;

        let updated = self.store.set_chat_flag(id, flagged).await?;
        debug!(message_id = %id, flagged, updated, "chat flag stored");
        Ok(())
    }
}
