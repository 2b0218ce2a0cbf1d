//! Get Network By Name Use Case

use std::sync::Arc;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::Network;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Use case for getting a network by its name
pub struct GetNetworkByNameUseCase {
    network_repository: Arc<dyn NetworkRepository>,
}

impl GetNetworkByNameUseCase {
    #[must_use]
    pub fn new(network_repository: Arc<dyn NetworkRepository>) -> Self {
        Self { network_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::User` for an empty name, before any store access.
    /// Returns `ServiceError::NotFound` if no network has that name.
    /// Returns `ServiceError::System` if the store fails.
    pub async fn execute(&self, ctx: &RequestContext, name: &str) -> Result<Network, ServiceError> {
        if name.is_empty() {
            return Err(ServiceError::user("A network name is required"));
        }

        tracing::debug!(name, "Getting network by name");

        let network = self
            .network_repository
            .find_by_name(ctx, name)
            .await
            .inspect_err(|err| tracing::warn!(name, error = %err, "Network lookup failed"))?;

        tracing::debug!(network_id = %network.id(), "Network found");
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockNetworkRepository;
    use crate::domain::models::network::CreateNetworkData;
    use crate::shared::errors::ErrorKind;

    fn create_test_network() -> Network {
        Network::new(CreateNetworkData {
            name: "home-lab".to_string(),
            ipv4_cidr: None,
            ipv6_cidr: Some("fd00:10::/64".to_string()),
        })
    }

    #[tokio::test]
    async fn should_return_network_when_found() {
        let network = create_test_network();
        let stored = network.clone();
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_name()
            .withf(|_, name| name == "home-lab")
            .returning(move |_, _| Ok(stored.clone()));

        let use_case = GetNetworkByNameUseCase::new(Arc::new(repo));
        let found = use_case.execute(&RequestContext::new(), "home-lab").await.unwrap();

        assert_eq!(found, network);
    }

    #[tokio::test]
    async fn should_return_not_found_when_network_does_not_exist() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_name()
            .returning(|_, _| Err(ServiceError::not_found("Could not find a network with that name")));

        let use_case = GetNetworkByNameUseCase::new(Arc::new(repo));
        let err = use_case.execute(&RequestContext::new(), "nowhere").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.safe_message(), "Could not find a network with that name");
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_store_access() {
        let mut repo = MockNetworkRepository::new();
        repo.expect_find_by_name().times(0);

        let use_case = GetNetworkByNameUseCase::new(Arc::new(repo));
        let err = use_case.execute(&RequestContext::new(), "").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::User);
    }
}
