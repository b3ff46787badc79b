//! The one owner of "is somebody logged in".

use std::sync::Arc;

use futures::{Stream, StreamExt};
use tokio_stream::wrappers::WatchStream;

use dear_store::PreferenceStore;

use crate::error::Result;

/// Session state derived from the stored auth token.
///
/// Consumers subscribe instead of reading ambient state; clearing the token
/// here is what forces the UI back to the login screen.
#[derive(Clone)]
pub struct SessionState {
    prefs: Arc<PreferenceStore>,
}

impl SessionState {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    pub fn is_logged_in_now(&self) -> bool {
        self.prefs.auth_token().is_some()
    }

    /// Current login state, then every change to it.
    pub fn is_logged_in(&self) -> impl Stream<Item = bool> + Send + 'static {
        WatchStream::new(self.prefs.watch_auth_token()).map(|token| token.is_some())
    }

    pub async fn start(&self, token: &str) -> Result<()> {
        self.prefs.save_auth_token(token).await?;
        Ok(())
    }

    /// Forget the token, ending the session.
    pub async fn clear(&self) -> Result<()> {
        self.prefs.clear_auth_token().await?;
        tracing::info!("session cleared");
        Ok(())
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dear_store::Database;

    fn session() -> SessionState {
        let db = Database::open_in_memory().unwrap().into_shared();
        SessionState::new(Arc::new(PreferenceStore::open(db).unwrap()))
    }

    #[tokio::test]
    async fn stream_follows_token() {
        let session = session();
        let mut logged_in = Box::pin(session.is_logged_in());
        assert_eq!(logged_in.next().await, Some(false));

        session.start("tok").await.unwrap();
        assert_eq!(logged_in.next().await, Some(true));
        assert!(session.is_logged_in_now());

        session.clear().await.unwrap();
        assert_eq!(logged_in.next().await, Some(false));
        assert!(!session.is_logged_in_now());
    }
}
