//! Network Repository Implementations

mod memory;
mod postgres;

pub use memory::InMemoryNetworkRepository;
pub use postgres::PostgresNetworkRepository;
