//! Network Repository Gateway
//!
//! Abstract trait defining the contract for network persistence operations.

use async_trait::async_trait;

use crate::domain::models::network::{CreateNetworkData, Network};
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

/// Repository trait for Network persistence operations
///
/// Every error returned is already classified; callers pass it through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NetworkRepository: Send + Sync {
    /// Assign an identity and timestamps to `data` and persist it.
    ///
    /// Fails with a validation error ("Network name is already taken") when
    /// another network already uses the name.
    async fn insert(&self, ctx: &RequestContext, data: CreateNetworkData) -> Result<Network, ServiceError>;

    /// Find a network by its name, failing with a not-found error if absent
    async fn find_by_name(&self, ctx: &RequestContext, name: &str) -> Result<Network, ServiceError>;

    /// All stored networks, ordered as the backend documents
    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Network>, ServiceError>;
}
