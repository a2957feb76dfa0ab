//! Destination model and catalog lookup.
//!
//! Destinations are immutable reference data owned by an external catalog
//! and looked up by identifier when a trip is calculated.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The category of a destination, which determines whether the
/// tourist-zone surcharge applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationCategory {
    /// A tourist-zone destination; allowance components attract a surcharge.
    Tourist,
    /// A regular destination with no surcharge.
    Normal,
}

/// Represents a travel destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique identifier for the destination.
    pub id: u32,
    /// The human-readable name of the destination.
    pub name: String,
    /// Whether the destination is a tourist zone.
    pub category: DestinationCategory,
    /// The fixed transport fare to this destination.
    pub transport_cost: Decimal,
    /// Road distance to the destination in kilometers.
    pub distance_km: Decimal,
    /// Whether the destination is currently selectable for new trips.
    pub active: bool,
}

impl Destination {
    /// Returns true if this destination is a tourist zone.
    pub fn is_tourist(&self) -> bool {
        self.category == DestinationCategory::Tourist
    }
}

/// A catalog of destinations, looked up by identifier.
///
/// Inactive destinations remain resolvable so that historical trips can be
/// recalculated; they are only excluded from [`DestinationCatalog::active`]
/// listings used to populate new-trip forms.
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    destinations: HashMap<u32, Destination>,
}

impl DestinationCatalog {
    /// Builds a catalog from a list of destinations.
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations: destinations.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Looks up a destination by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DestinationNotFound`] if no destination with
    /// the given identifier exists.
    pub fn lookup(&self, id: u32) -> EngineResult<&Destination> {
        self.destinations
            .get(&id)
            .ok_or(EngineError::DestinationNotFound { id })
    }

    /// Returns all active destinations, sorted by identifier.
    pub fn active(&self) -> Vec<&Destination> {
        let mut active: Vec<&Destination> =
            self.destinations.values().filter(|d| d.active).collect();
        active.sort_by_key(|d| d.id);
        active
    }

    /// Returns the number of destinations in the catalog.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Returns true if the catalog holds no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
