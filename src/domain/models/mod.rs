//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod network;
pub mod user;

use chrono::{DateTime, SubsecRound, Utc};

pub use network::{CreateNetworkData, Network, NetworkId};
pub use user::{CreateUserData, User, UserId, UserStatus};

/// Current time at the microsecond resolution PostgreSQL stores, so an
/// entity reads back exactly as it was created on every backend.
pub(crate) fn creation_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
