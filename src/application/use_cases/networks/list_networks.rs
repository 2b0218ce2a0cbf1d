//! List Networks Use Case

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Use case for listing every managed network
pub struct ListNetworksUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl ListNetworksUseCase {
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext) -> Result<Vec<Network>, ServiceError> {
        tracing::debug!("Listing networks");

        let networks = self.network_repository.list_all(ctx).await?;

        tracing::debug!(count = networks.len(), "Found networks");
        Ok(networks)
    }
}
