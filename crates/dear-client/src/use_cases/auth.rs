use std::sync::Arc;

use futures::stream::BoxStream;

use crate::error::Result;
use crate::repository::AuthRepository;

use super::require_filled;

pub struct CheckAuthStatus {
    repo: Arc<dyn AuthRepository>,
}

impl CheckAuthStatus {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> BoxStream<'static, bool> {
        self.repo.is_logged_in()
    }
}

pub struct Login {
    repo: Arc<dyn AuthRepository>,
}

impl Login {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<()> {
        require_filled(email, "email")?;
        require_filled(password, "password")?;
        self.repo.login(email.trim(), password).await
    }
}

pub struct Register {
    repo: Arc<dyn AuthRepository>,
}

impl Register {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, username: &str, email: &str, password: &str) -> Result<()> {
        require_filled(username, "username")?;
        require_filled(email, "email")?;
        require_filled(password, "password")?;
        self.repo.register(username.trim(), email.trim(), password).await
    }
}

pub struct Logout {
    repo: Arc<dyn AuthRepository>,
}

impl Logout {
    pub fn new(repo: Arc<dyn AuthRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<()> {
        self.repo.logout().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DearError, ValidationError};
    use crate::repository::DefaultAuthRepository;
    use crate::testing::{session, MockAuthApi};
    use futures::StreamExt;

    #[tokio::test]
    async fn blank_credentials_never_reach_the_backend() {
        let api = Arc::new(MockAuthApi::default());
        let repo = Arc::new(DefaultAuthRepository::new(api.clone(), session()));
        let login = Login::new(repo.clone());
        let register = Register::new(repo);

        let err = login.execute("", "pw").await.unwrap_err();
        assert!(matches!(err, DearError::Validation(ValidationError::Blank("email"))));
        assert!(login.execute("a@b.c", "  ").await.is_err());
        assert!(register.execute(" ", "a@b.c", "pw").await.is_err());

        assert_eq!(api.login_calls() + api.register_calls(), 0);
    }

    #[tokio::test]
    async fn login_logout_cycle() {
        let repo = Arc::new(DefaultAuthRepository::new(
            Arc::new(MockAuthApi::default()),
            session(),
        ));
        let status = CheckAuthStatus::new(repo.clone());

        Login::new(repo.clone()).execute(" a@b.c ", "pw").await.unwrap();
        Logout::new(repo).execute().await.unwrap();

        assert_eq!(status.execute().next().await, Some(false));
    }
}
