//! Get User By Username Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Use case for fetching a user by username
pub struct GetUserByUsernameUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl GetUserByUsernameUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::User` for an empty username, before any store access.
    /// Returns `ServiceError::NotFound` if no user has that username.
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext, username: &str) -> Result<User, ServiceError> {
        if username.is_empty() {
            return Err(ServiceError::user("A username is required"));
        }

        tracing::debug!(username, "Getting user by username");

        let user = self
            .user_repository
            .find_by_username(ctx, username)
            .await
            .inspect_err(|err| tracing::warn!(username, error = %err, "User lookup failed"))?;

        tracing::debug!(user_id = %user.id(), "User found");
        Ok(user)
    }
}
