//! List Users Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

pub struct ListUsersUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext) -> Result<Vec<User>, ServiceError> {
        tracing::debug!("Listing users");

        let users = self.user_repository.list_all(ctx).await?;

        tracing::debug!(count = users.len(), "Found users");
        Ok(users)
    }
}
