//! In-Memory User Repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

const CREATE: &str = "create new user";
const GET: &str = "get user by username";
const LIST: &str = "list users";

/// Process-local implementation of UserRepository, listing in insertion order
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, ctx: &RequestContext, data: CreateUserData) -> Result<User, ServiceError> {
        ctx.run(CREATE, async {
            let mut users = self.users.write().await;
            if ctx.is_done() {
                return Err(ServiceError::cancelled(CREATE));
            }

            if users.iter().any(|user| user.username() == data.name) {
                return Err(ServiceError::validation("Username is already taken"));
            }

            let user = User::new(data);
            users.push(user.clone());
            Ok(user)
        })
        .await
    }

    async fn find_by_username(&self, ctx: &RequestContext, username: &str) -> Result<User, ServiceError> {
        ctx.run(GET, async {
            let users = self.users.read().await;
            users
                .iter()
                .find(|user| user.username() == username)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("Could not find a user with that name"))
        })
        .await
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<User>, ServiceError> {
        ctx.run(LIST, async { Ok(self.users.read().await.clone()) })
            .await
    }
}
