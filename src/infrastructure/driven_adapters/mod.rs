//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Repositories (in-memory and PostgreSQL)
//! - Configuration
//! - Logging setup

pub mod config;
pub mod database;
pub mod logging;
pub mod network_repository;
pub mod repositories;
pub mod user_repository;

pub use config::AppConfig;
pub use repositories::Repositories;
