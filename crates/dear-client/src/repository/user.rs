use std::sync::Arc;

use async_trait::async_trait;

use dear_net::UserApi;
use dear_shared::User;

use crate::error::Result;
use crate::mappers::user_from_response;
use crate::repository::UserRepository;

pub struct DefaultUserRepository {
    api: Arc<dyn UserApi>,
}

impl DefaultUserRepository {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for DefaultUserRepository {
    async fn get_profile(&self) -> Result<User> {
        Ok(user_from_response(self.api.profile().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockUserApi;

    #[tokio::test]
    async fn profile_is_mapped() {
        let repo = DefaultUserRepository::new(Arc::new(MockUserApi));
        let user = repo.get_profile().await.unwrap();
        assert_eq!(user.username, "dear");
        assert_eq!(user.id, "7");
    }
}
