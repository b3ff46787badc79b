use std::sync::Arc;

use dear_shared::User;

use crate::error::Result;
use crate::repository::UserRepository;

pub struct GetUserProfile {
    repo: Arc<dyn UserRepository>,
}

impl GetUserProfile {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<User> {
        self.repo.get_profile().await
    }
}
