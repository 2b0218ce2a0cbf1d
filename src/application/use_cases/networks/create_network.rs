//! Create Network Use Case
//!
//! Validates and registers a new managed network.

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{CreateNetworkData, Network};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Use case for creating a new network
pub struct CreateNetworkUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl CreateNetworkUseCase {
    /// Create a new CreateNetworkUseCase
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` when the input breaks a validation
    /// rule (prefixed with "Unable to create network: ") or the name is taken.
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext, data: CreateNetworkData) -> Result<Network, ServiceError> {
        tracing::info!(name = %data.name, "Creating new network");

        if let Err(err) = data.validate() {
            tracing::warn!(name = %data.name, reason = %err, "Rejected network creation input");
            return Err(ServiceError::validation_with_source(
                format!("Unable to create network: {err}"),
                err,
            ));
        }

        let created = self.network_repository.insert(ctx, data).await?;

        tracing::info!(
            network_id = %created.id(),
            name = created.name(),
            "Network created successfully"
        );

        Ok(created)
    }
}
