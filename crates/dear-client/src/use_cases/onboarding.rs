use std::sync::Arc;

use futures::stream::{BoxStream, StreamExt};
use tokio_stream::wrappers::WatchStream;

use dear_store::PreferenceStore;

use crate::error::Result;

pub struct CheckOnboardingStatus {
    prefs: Arc<PreferenceStore>,
}

impl CheckOnboardingStatus {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    /// Whether onboarding has been completed, then every change.
    pub fn execute(&self) -> BoxStream<'static, bool> {
        WatchStream::new(self.prefs.watch_onboarding_completed()).boxed()
    }
}

pub struct CompleteOnboarding {
    prefs: Arc<PreferenceStore>,
}

impl CompleteOnboarding {
    pub fn new(prefs: Arc<PreferenceStore>) -> Self {
        Self { prefs }
    }

    pub async fn execute(&self) -> Result<()> {
        self.prefs.set_onboarding_completed().await?;
        tracing::info!("onboarding completed");
        Ok(())
    }
}
