//! Ley Manager API
//!
//! Registry of named networks (with IPv4/IPv6 address ranges) and users,
//! backed by either an in-memory or a PostgreSQL store, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
