//! PostgreSQL Network Repository Implementation
//!
//! Implements the NetworkRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::NetworkRepository;
use crate::domain::models::network::{CreateNetworkData, Network, NetworkId};
use crate::infrastructure::driven_adapters::database::is_unique_violation;
use crate::shared::context::RequestContext;
use crate::shared::errors::ServiceError;

const CREATE: &str = "create new network";
const GET: &str = "get network by name";
const LIST: &str = "list networks";

const NAME_CONSTRAINT: &str = "networks_name_key";

/// Database row representation for network table
#[derive(Debug, sqlx::FromRow)]
struct NetworkRow {
    id: Uuid,
    name: String,
    ipv4_cidr: Option<String>,
    ipv6_cidr: Option<String>,
    created_on: DateTime<Utc>,
    modified_on: DateTime<Utc>,
}

impl From<NetworkRow> for Network {
    fn from(row: NetworkRow) -> Self {
        Network::restore(
            NetworkId::from_uuid(row.id),
            row.name,
            row.ipv4_cidr,
            row.ipv6_cidr,
            row.created_on,
            row.modified_on,
        )
    }
}

fn not_found() -> ServiceError {
    ServiceError::not_found("Could not find a network with that name")
}

/// PostgreSQL implementation of NetworkRepository
///
/// Name uniqueness is enforced by the `networks_name_key` constraint.
pub struct PostgresNetworkRepository {
    pool: PgPool,
}

impl PostgresNetworkRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_row(&self, network: &Network) -> Result<Network, ServiceError> {
        sqlx::query_as::<_, NetworkRow>(
            r"
            INSERT INTO networks (id, name, ipv4_cidr, ipv6_cidr, created_on, modified_on)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, ipv4_cidr, ipv6_cidr, created_on, modified_on
            ",
        )
        .bind(network.id().as_uuid())
        .bind(network.name())
        .bind(network.ipv4_cidr())
        .bind(network.ipv6_cidr())
        .bind(network.created_on())
        .bind(network.modified_on())
        .fetch_one(&self.pool)
        .await
        .map(Network::from)
        .map_err(|err| {
            if is_unique_violation(&err, NAME_CONSTRAINT) {
                ServiceError::validation_with_source("Network name is already taken", err)
            } else {
                ServiceError::system(CREATE, err)
            }
        })
    }

    async fn select_by_name(&self, name: &str) -> Result<Network, ServiceError> {
        // PostgreSQL text cannot hold NUL, so no stored name can match.
        if name.contains('\0') {
            return Err(not_found());
        }

        let row = sqlx::query_as::<_, NetworkRow>(
            r"
            SELECT id, name, ipv4_cidr, ipv6_cidr, created_on, modified_on
            FROM networks
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| ServiceError::system(GET, err))?;

        row.map(Network::from).ok_or_else(not_found)
    }

    async fn select_all(&self) -> Result<Vec<Network>, ServiceError> {
        let rows = sqlx::query_as::<_, NetworkRow>(
            r"
            SELECT id, name, ipv4_cidr, ipv6_cidr, created_on, modified_on
            FROM networks
            ORDER BY created_on ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| ServiceError::system(LIST, err))?;

        Ok(rows.into_iter().map(Network::from).collect())
    }
}

#[async_trait]
impl NetworkRepository for PostgresNetworkRepository {
    async fn insert(&self, ctx: &RequestContext, data: CreateNetworkData) -> Result<Network, ServiceError> {
        let network = Network::new(data);
        ctx.run(CREATE, self.insert_row(&network)).await
    }

    async fn find_by_name(&self, ctx: &RequestContext, name: &str) -> Result<Network, ServiceError> {
        ctx.run(GET, self.select_by_name(name)).await
    }

    async fn list_all(&self, ctx: &RequestContext) -> Result<Vec<Network>, ServiceError> {
        ctx.run(LIST, self.select_all()).await
    }
}
