//! Catalog snapshots and their `MessagePack` encoding.
//!
//! A snapshot carries every grocery field (including unset expiration and
//! location) plus the location registry, so reloading reproduces the catalog
//! exactly, in the same order.

use larder_foundation::{Error, ErrorKind, Grocery, LocationRegistry, Result};
use serde::{Deserialize, Serialize};

/// Everything the catalog needs persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The records, in collection order.
    pub groceries: Vec<Grocery>,
    /// The location registry.
    pub locations: LocationRegistry,
}

impl Snapshot {
    /// Builds a snapshot from borrowed catalog state.
    #[must_use]
    pub fn capture(groceries: &[Grocery], locations: &LocationRegistry) -> Self {
        Self {
            groceries: groceries.to_vec(),
            locations: locations.clone(),
        }
    }
}

/// Serializes a snapshot to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(snapshot: &Snapshot) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(snapshot)
        .map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes a snapshot from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}
