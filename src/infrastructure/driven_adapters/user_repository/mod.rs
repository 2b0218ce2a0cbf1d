//! User Repository Implementations

mod memory;
mod postgres;

pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
