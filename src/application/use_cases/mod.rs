//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod networks;
pub mod users;

pub use networks::{CreateNetworkUseCase, GetNetworkByNameUseCase, ListNetworksUseCase};
pub use users::{CreateUserUseCase, GetUserByUsernameUseCase, ListUsersUseCase};
