//! Network Use Cases
//!
//! Business logic for managing networks.

mod create_network;
mod get_network_by_name;
mod list_networks;

pub use create_network::CreateNetworkUseCase;
pub use get_network_by_name::GetNetworkByNameUseCase;
pub use list_networks::ListNetworksUseCase;
