//! HTTP Handlers

pub mod health;
pub mod networks;
pub mod users;
