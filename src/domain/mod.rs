//! Domain Layer
//!
//! Contains the core business logic, domain models, validation rules and
//! gateway traits (ports). This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod validation;

pub use gateways::{NetworkRepository, UserRepository};
pub use models::{CreateNetworkData, CreateUserData, Network, NetworkId, User, UserId, UserStatus};
