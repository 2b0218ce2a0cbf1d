//! User Domain Model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::creation_timestamp;
use crate::domain::validation::{self, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a user may use the system
///
/// A deactivated user is immutable while in that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Deactivated,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deactivated => "deactivated",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown user status '{0}'")]
pub struct UnknownUserStatus(String);

impl FromStr for UserStatus {
    type Err = UnknownUserStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "deactivated" => Ok(Self::Deactivated),
            other => Err(UnknownUserStatus(other.to_string())),
        }
    }
}

/// Data required to create a new User
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserData {
    pub name: String,
}

impl CreateUserData {
    /// # Errors
    ///
    /// Returns an error when the name does not match the user name pattern.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        validation::validate_user_name(&self.name)
    }
}

/// User domain entity; new users always start out active
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    status: UserStatus,
    created_on: DateTime<Utc>,
    modified_on: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn new(data: CreateUserData) -> Self {
        let now = creation_timestamp();
        Self {
            id: UserId::new(),
            username: data.name,
            status: UserStatus::Active,
            created_on: now,
            modified_on: now,
        }
    }

    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(
        id: UserId,
        username: String,
        status: UserStatus,
        created_on: DateTime<Utc>,
        modified_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            status,
            created_on,
            modified_on,
        }
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn status(&self) -> UserStatus {
        self.status
    }

    #[must_use]
    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    #[must_use]
    pub fn modified_on(&self) -> DateTime<Utc> {
        self.modified_on
    }
}
