//! Named storage locations and their membership index.
//!
//! The grocery ↔ location relationship is kept as an explicit bidirectional
//! index: each [`Location`] holds the set of grocery keys assigned to it, and
//! each grocery carries its location key. The catalog is the only writer and
//! updates both sides in the same operation, so the two views never diverge.
//!
//! Locations are created lazily the first time a store command names them and
//! are never deleted.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named storage place groceries can be assigned to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Display name as first entered by the user.
    pub name: String,
    /// Lower-cased keys of the groceries stored here. Back-references only;
    /// the catalog owns the records.
    pub members: BTreeSet<String>,
}

impl Location {
    /// Creates an empty location with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
        }
    }
}

/// All known locations, keyed case-insensitively by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationRegistry {
    locations: BTreeMap<String, Location>,
}

impl LocationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of known locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no locations exist yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Resolves a location name to its key, creating the location if it does
    /// not exist. Returns the key and whether the location was just created.
    pub fn resolve_or_create(&mut self, name: &str) -> (String, bool) {
        let key = name.to_lowercase();
        let created = !self.locations.contains_key(&key);
        if created {
            self.locations.insert(key.clone(), Location::new(name));
        }
        (key, created)
    }

    /// Looks up a location by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Location> {
        self.locations.get(key)
    }

    /// Records that a grocery is stored at the keyed location.
    ///
    /// No-op if the location does not exist; callers resolve first.
    pub fn attach(&mut self, location_key: &str, grocery_key: &str) {
        if let Some(location) = self.locations.get_mut(location_key) {
            location.members.insert(grocery_key.to_string());
        }
    }

    /// Removes a grocery from the keyed location's member set.
    pub fn detach(&mut self, location_key: &str, grocery_key: &str) {
        if let Some(location) = self.locations.get_mut(location_key) {
            location.members.remove(grocery_key);
        }
    }

    /// Iterates over all locations in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}
