//! Durable key-value preferences with observable values.
//!
//! Values live in the `preferences` table. [`PreferenceStore`] keeps the
//! auth token and the onboarding flag in `watch` channels so the session
//! layer and the HTTP client always see the latest value. Writes run on the
//! blocking pool and publish while still holding the connection.

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};
use tokio::sync::watch;

use dear_shared::constants::{PREF_AUTH_TOKEN, PREF_ONBOARDING_COMPLETED};

use crate::database::{lock, run_blocking, Database, SharedDatabase};
use crate::error::Result;

impl Database {
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn().execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Returns `true` if the key was present.
    pub fn remove_preference(&self, key: &str) -> Result<bool> {
        let affected = self
            .conn()
            .execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(affected > 0)
    }
}

/// Observable auth token and onboarding flag.
pub struct PreferenceStore {
    db: SharedDatabase,
    auth_token: Arc<watch::Sender<Option<String>>>,
    onboarding_completed: Arc<watch::Sender<bool>>,
}

impl PreferenceStore {
    /// Load the current values from `db`.
    pub fn open(db: SharedDatabase) -> Result<Self> {
        let (token, onboarding) = {
            let guard = lock(&db)?;
            let token = guard.get_preference(PREF_AUTH_TOKEN)?;
            let onboarding = guard
                .get_preference(PREF_ONBOARDING_COMPLETED)?
                .is_some_and(|v| v == "true");
            (token, onboarding)
        };

        Ok(Self {
            db,
            auth_token: Arc::new(watch::channel(token).0),
            onboarding_completed: Arc::new(watch::channel(onboarding).0),
        })
    }

    // ------------------------------------------------------------------
    // Auth token
    // ------------------------------------------------------------------

    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.borrow().clone()
    }

    /// Subscribe to the token. The receiver starts at the current value.
    pub fn watch_auth_token(&self) -> watch::Receiver<Option<String>> {
        self.auth_token.subscribe()
    }

    pub async fn save_auth_token(&self, token: &str) -> Result<()> {
        let token = token.to_string();
        let sender = Arc::clone(&self.auth_token);
        run_blocking(&self.db, move |db| {
            db.set_preference(PREF_AUTH_TOKEN, &token)?;
            sender.send_replace(Some(token));
            Ok(())
        })
        .await?;
        tracing::debug!("auth token saved");
        Ok(())
    }

    pub async fn clear_auth_token(&self) -> Result<()> {
        let sender = Arc::clone(&self.auth_token);
        run_blocking(&self.db, move |db| {
            db.remove_preference(PREF_AUTH_TOKEN)?;
            sender.send_replace(None);
            Ok(())
        })
        .await?;
        tracing::info!("auth token cleared");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------

    pub fn onboarding_completed(&self) -> bool {
        *self.onboarding_completed.borrow()
    }

    pub fn watch_onboarding_completed(&self) -> watch::Receiver<bool> {
        self.onboarding_completed.subscribe()
    }

    pub async fn set_onboarding_completed(&self) -> Result<()> {
        let sender = Arc::clone(&self.onboarding_completed);
        run_blocking(&self.db, move |db| {
            db.set_preference(PREF_ONBOARDING_COMPLETED, "true")?;
            sender.send_replace(true);
            Ok(())
        })
        .await
    }
}
