//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod network;
pub mod user;

pub use network::{CreateNetworkDto, NetworkListDto, NetworkResponseDto};
pub use user::{CreateUserDto, UserListDto, UserQuery, UserResponseDto};
