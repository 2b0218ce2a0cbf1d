//! Network Domain Model
//!
//! Represents a managed network and the address ranges attached to it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::creation_timestamp;
use crate::domain::validation::{self, InvalidInput};

/// Newtype wrapper for Network ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId(Uuid);

impl NetworkId {
    /// Create a new random NetworkId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for NetworkId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Data required to create a new Network
///
/// Empty range strings are treated the same as absent ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateNetworkData {
    pub name: String,
    pub ipv4_cidr: Option<String>,
    pub ipv6_cidr: Option<String>,
}

impl CreateNetworkData {
    /// Check the name pattern, then that at least one range is present,
    /// then the syntax of each present range.
    ///
    /// # Errors
    ///
    /// Returns the first rule the input breaks.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        validation::validate_network_name(&self.name)?;

        let ipv4_cidr = non_empty(self.ipv4_cidr.as_deref());
        let ipv6_cidr = non_empty(self.ipv6_cidr.as_deref());
        validation::require_address_range(ipv4_cidr, ipv6_cidr)?;

        if let Some(cidr) = ipv4_cidr {
            validation::validate_ipv4_cidr(cidr)?;
        }
        if let Some(cidr) = ipv6_cidr {
            validation::validate_ipv6_cidr(cidr)?;
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Network domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    id: NetworkId,
    name: String,
    ipv4_cidr: Option<String>,
    ipv6_cidr: Option<String>,
    created_on: DateTime<Utc>,
    modified_on: DateTime<Utc>,
}

impl Network {
    /// Create a new Network with a fresh identity; both timestamps are set
    /// to the same instant.
    #[must_use]
    pub fn new(data: CreateNetworkData) -> Self {
        let now = creation_timestamp();
        Self {
            id: NetworkId::new(),
            name: data.name,
            ipv4_cidr: data.ipv4_cidr.filter(|v| !v.is_empty()),
            ipv6_cidr: data.ipv6_cidr.filter(|v| !v.is_empty()),
            created_on: now,
            modified_on: now,
        }
    }

    /// Restore a Network from persisted data
    #[must_use]
    pub fn restore(
        id: NetworkId,
        name: String,
        ipv4_cidr: Option<String>,
        ipv6_cidr: Option<String>,
        created_on: DateTime<Utc>,
        modified_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            ipv4_cidr,
            ipv6_cidr,
            created_on,
            modified_on,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &NetworkId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ipv4_cidr(&self) -> Option<&str> {
        self.ipv4_cidr.as_deref()
    }

    #[must_use]
    pub fn ipv6_cidr(&self) -> Option<&str> {
        self.ipv6_cidr.as_deref()
    }

    #[must_use]
    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    #[must_use]
    pub fn modified_on(&self) -> DateTime<Utc> {
        self.modified_on
    }
}
