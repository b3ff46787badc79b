use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt};
use tracing::{info, warn};

use dear_net::dto::{LoginRequest, RegisterRequest};
use dear_net::AuthApi;

use crate::error::{DearError, Result};
use crate::repository::AuthRepository;
use crate::session::SessionState;

pub struct DefaultAuthRepository {
    api: Arc<dyn AuthApi>,
    session: SessionState,
}

impl DefaultAuthRepository {
    pub fn new(api: Arc<dyn AuthApi>, session: SessionState) -> Self {
        Self { api, session }
    }
}

#[async_trait]
impl AuthRepository for DefaultAuthRepository {
    fn is_logged_in(&self) -> BoxStream<'static, bool> {
        self.session.is_logged_in().boxed()
    }

    async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await.map_err(|e| {
            warn!(error = %e, "login failed");
            DearError::from(e)
        })?;

        self.session.start(&response.access_token).await?;
        info!("logged in");
        Ok(())
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.api.register(&request).await.map_err(|e| {
            warn!(error = %e, "registration failed");
            DearError::from(e)
        })?;
        info!(username, "registered");

        self.login(email, password).await
    }

    async fn logout(&self) -> Result<()> {
        self.session.clear().await
    }
}
