//! PostgreSQL User Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User, UserId, UserStatus};
use crate::infrastructure::driven_adapters::database::is_unique_violation;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

const CREATE: &str = "create new user";
const GET: &str = "get user by username";
const LIST: &str = "list users";

const USERNAME_CONSTRAINT: &str = "users_username_key";

/// Database row representation for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    status: String,
    created_on: DateTime<Utc>,
    modified_on: DateTime<Utc>,
}

impl UserRow {
    /// A status the domain does not know is a corrupted row, reported as a
    /// system failure of `operation`.
    fn into_user(self, operation: &str) -> Result<User, ServiceError> {
        let status = self
            .status
            .parse::<UserStatus>()
            .map_err(|err| ServiceError::system(operation, err))?;

        Ok(User::restore(
            UserId::from_uuid(self.id),
            self.username,
            status,
            self.created_on,
            self.modified_on,
        ))
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Could not find a user with that name")
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_row(&self, user: &User) -> Result<User, ServiceError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (id, username, status, created_on, modified_on)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, status, created_on, modified_on
            ",
        )
        .bind(user.id().as_uuid())
        .bind(user.username())
        .bind(user.status().as_str())
        .bind(user.created_on())
        .bind(user.modified_on())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err, USERNAME_CONSTRAINT) {
                ServiceError::validation_with_source("Username is already taken", err)
            } else {
                ServiceError::system(CREATE, err)
            }
        })?;

        row.into_user(CREATE)
    }

    async fn select_by_username(&self, username: &str) -> Result<User, ServiceError> {
        // PostgreSQL text cannot hold NUL, so no stored username can match.
        if username.contains('\0') {
            return Err(not_found());
        }

        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, status, created_on, modified_on
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ServiceError::system(GET, err))?;

        match row {
            Some(row) => row.into_user(GET),
            None => Err(not_found()),
        }
    }

    async fn select_all(&self) -> Result<Vec<User>, ServiceError> {
        sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, username, status, created_on, modified_on
            FROM users
            ORDER BY created_on ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| ServiceError::system(LIST, err))?
        .into_iter()
        .map(|row| row.into_user(LIST))
        .collect()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, ctx: &RequestContext, data: CreateUserData) -> Result<User, ServiceError> {
        let user = User::new(data);
        ctx.run(CREATE, self.insert_row(&user)).await
    }

    async fn find_by_username(&self, ctx: &RequestContext, username: &str) -> Result<User, ServiceError> {
        ctx.run(GET, self.select_by_username(username)).await
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<User>, ServiceError> {
        ctx.run(LIST, self.select_all()).await
    }
}
