//! In-Memory Network Repository
//!
//! Keeps networks in an append-only vector, so listings come back in
//! insertion order.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{CreateNetworkData, Network};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

const CREATE: &str = "create new network";
const GET: &str = "get network by name";
const LIST: &str = "list networks";

/// Process-local implementation of NetworkRepository
///
/// The uniqueness scan and the append happen under one write lock; readers
/// share the lock with each other.
#[derive(Debug, Default)]
pub struct InMemoryNetworkRepository {
    networks: RwLock<Vec<Network>>,
}

impl InMemoryNetworkRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NetworkRepository for InMemoryNetworkRepository {
    async fn insert(&self, ctx: &RequestContext, data: CreateNetworkData) -> Result<Network, ServiceError> {
        ctx.run(CREATE, async {
            let mut networks = self.networks.write().await;

            // Waiting for the lock can outlive the request.
            if ctx.is_done() {
                return Err(ServiceError::cancelled(CREATE));
            }

            if networks.iter().any(|network| network.name() == data.name) {
                return Err(ServiceError::validation("Network name is already taken"));
            }

            let network = Network::new(data);
            networks.push(network.clone());
            Ok(network)
        })
        .await
    }

    async fn find_by_name(&self, ctx: &RequestContext, name: &str) -> Result<Network, ServiceError> {
        ctx.run(GET, async {
            self.networks
                .read()
                .await
                .iter()
                .find(|network| network.name() == name)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("Could not find a network with that name"))
        })
        .await
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Network>, ServiceError> {
        ctx.run(LIST, async { Ok(self.networks.read().await.clone()) })
            .await
    }
}
