//! Create User Use Case

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Use case for creating a new user
pub struct CreateUserUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` for a malformed name (prefixed with
    /// "Unable to create user: ") or one that is already taken.
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext, data: CreateUserData) -> Result<User, ServiceError> {
        tracing::info!(username = %data.name, "Creating new user");

        data.validate().map_err(|err| {
            tracing::warn!(username = %data.name, reason = %err, "Rejected user creation input");
            ServiceError::validation_with_source(format!("Unable to create user: {err}"), err)
        })?;

        let created = self.user_repository.insert(ctx, data).await?;

        tracing::info!(user_id = %created.id(), username = created.username(), "User created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockUserRepository;
    use crate::domain::models::user::UserStatus;
    use crate::shared::errors::ErrorKind;

    #[tokio::test]
    async fn should_create_active_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .times(1)
            .returning(|_, data| Ok(User::new(data)));

        let use_case = CreateUserUseCase::new(Arc::new(repo));
        let user = use_case
            .execute(&RequestContext::new(), CreateUserData { name: "o'brien".to_string() })
            .await
            .unwrap();

        assert_eq!(user.username(), "o'brien");
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[tokio::test]
    async fn should_reject_empty_name_with_exact_message() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().times(0);

        let use_case = CreateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(&RequestContext::new(), CreateUserData { name: String::new() })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Unable to create user: Invalid user name ''");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn should_propagate_taken_username() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_, _| Err(ServiceError::validation("Username is already taken")));

        let use_case = CreateUserUseCase::new(Arc::new(repo));
        let err = use_case
            .execute(&RequestContext::new(), CreateUserData { name: "jdoe".to_string() })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.safe_message(), "Username is already taken");
    }
}
