//! User Repository Gateway

use async_trait::async_trait;

use crate::domain::models::user::{CreateUserData, User};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new active user; "Username is already taken" when the name is in use
    async fn insert(&self, ctx: &RequestContext, data: CreateUserData) -> Result<User, ServiceError>;

    async fn find_by_username(&self, ctx: &RequestContext, username: &str) -> Result<User, ServiceError>;

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<User>, ServiceError>;
}
