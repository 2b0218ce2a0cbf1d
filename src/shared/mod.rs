//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod context;
pub mod errors;

pub use context::RequestContext;
pub use errors::{ApiError, ErrorKind, ServiceError};
