//! Network DTOs
//!
//! Data transfer objects for network API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::network::{CreateNetworkData, Network};

/// DTO for creating a new network
///
/// Only length bounds are checked here; name and range syntax belong to
/// the domain validation so its messages reach the client unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateNetworkDto {
    #[serde(default)]
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    pub name: String,

    #[serde(default, rename = "ipv4CIDR")]
    #[validate(length(max = 64, message = "ipv4CIDR must be at most 64 characters"))]
    pub ipv4_cidr: Option<String>,

    #[serde(default, rename = "ipv6CIDR")]
    #[validate(length(max = 64, message = "ipv6CIDR must be at most 64 characters"))]
    pub ipv6_cidr: Option<String>,
}

impl From<CreateNetworkDto> for CreateNetworkData {
    fn from(dto: CreateNetworkDto) -> Self {
        Self {
            name: dto.name,
            ipv4_cidr: dto.ipv4_cidr,
            ipv6_cidr: dto.ipv6_cidr,
        }
    }
}

/// DTO for network responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "ipv4CIDR", skip_serializing_if = "Option::is_none")]
    pub ipv4_cidr: Option<String>,
    #[serde(rename = "ipv6CIDR", skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr: Option<String>,
    pub created_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
}

impl From<Network> for NetworkResponseDto {
    fn from(network: Network) -> Self {
        Self {
            id: *network.id().as_uuid(),
            name: network.name().to_string(),
            ipv4_cidr: network.ipv4_cidr().map(ToString::to_string),
            ipv6_cidr: network.ipv6_cidr().map(ToString::to_string),
            created_on: network.created_on(),
            modified_on: network.modified_on(),
        }
    }
}

/// Body of `GET /network`
#[derive(Debug, Clone, Serialize)]
pub struct NetworkListDto {
    pub networks: Vec<NetworkResponseDto>,
}

impl From<Vec<Network>> for NetworkListDto {
    fn from(networks: Vec<Network>) -> Self {
        Self {
            networks: networks.into_iter().map(NetworkResponseDto::from).collect(),
        }
    }
}
