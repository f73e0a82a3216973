//! Zone registry — the ordered set of configured zones with index maps.
//!
//! Lookups that the original driver performed as linear scans on every
//! notification (name → zone, sensor variable → zone, supplier → downstream
//! outlet) are backed by maps built once after load. Zones are addressed by
//! their stable 1-based configuration index throughout.

use std::collections::HashMap;

use crate::id::SysvarId;
use crate::zone::Zone;

/// Ordered collection of populated zones with precomputed lookups.
///
/// The registry is built once at startup and its zone states are mutated
/// exclusively by the zone controller; the maps themselves never change
/// after construction.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    positions: HashMap<usize, usize>,
    by_name: HashMap<String, usize>,
    outlets: HashMap<usize, usize>,
    by_sysvar: HashMap<SysvarId, usize>,
}

impl ZoneRegistry {
    /// Build the registry and its lookup maps from loaded zones.
    ///
    /// Zones are expected in ascending index order (as the loader produces
    /// them). Where two zones collide on a name or a sensor variable, the
    /// first one wins — matching the original driver's scan order.
    #[must_use]
    pub fn new(zones: Vec<Zone>) -> Self {
        let mut positions = HashMap::new();
        let mut by_name = HashMap::new();
        let mut by_sysvar = HashMap::new();

        for (position, zone) in zones.iter().enumerate() {
            positions.insert(zone.index, position);
            by_name.entry(zone.config.name.clone()).or_insert(zone.index);
            for sysvar in [zone.config.temperature_sysvar, zone.config.humidity_sysvar]
                .into_iter()
                .flatten()
            {
                by_sysvar.entry(sysvar).or_insert(zone.index);
            }
        }

        // Reverse topology: which zone is downstream of a given supplier.
        // Needs the name map complete first.
        let mut outlets = HashMap::new();
        for zone in &zones {
            if let Some(supplier) = zone
                .config
                .inlet_zone
                .as_deref()
                .and_then(|name| by_name.get(name))
            {
                outlets.entry(*supplier).or_insert(zone.index);
            }
        }

        Self {
            zones,
            positions,
            by_name,
            outlets,
            by_sysvar,
        }
    }

    /// Number of populated zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate zones in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Look up a zone by its 1-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Zone> {
        self.positions.get(&index).map(|&pos| &self.zones[pos])
    }

    /// Mutable zone access for state updates.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Zone> {
        self.positions
            .get(&index)
            .map(|&pos| &mut self.zones[pos])
    }

    /// Index of the zone with the given name. An empty name never matches.
    #[must_use]
    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Index of the first zone that names the given zone as its inlet
    /// supplier — i.e. the zone downstream of `index`.
    #[must_use]
    pub fn outlet_of(&self, index: usize) -> Option<usize> {
        self.outlets.get(&index).copied()
    }

    /// Index of the zone owning the given sensor variable (temperature or
    /// humidity channel).
    #[must_use]
    pub fn owner_of_sysvar(&self, sysvar: SysvarId) -> Option<usize> {
        self.by_sysvar.get(&sysvar).copied()
    }
}
