use super::{Extra, LicenseRecord};
use std::collections::HashMap;

/// One name → record mapping. Keys are raw license names, matched exactly.
pub type LicenseMap = HashMap<String, LicenseRecord>;

/// LicenseRepository aggregate: the full loaded dataset.
///
/// Built once from the dataset and only ever read afterwards; there are no
/// mutating methods once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseRepository {
    stable_map: LicenseMap,
    risky_map: LicenseMap,
    extra_maps: HashMap<Extra, LicenseMap>,
}

impl LicenseRepository {
    pub fn new(
        stable_map: LicenseMap,
        risky_map: LicenseMap,
        extra_maps: HashMap<Extra, LicenseMap>,
    ) -> Self {
        Self {
            stable_map,
            risky_map,
            extra_maps,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Highest-trust entries, consulted first.
    pub fn stable_map(&self) -> &LicenseMap {
        &self.stable_map
    }

    /// Lower-confidence entries, consulted only when risky lookups are enabled.
    pub fn risky_map(&self) -> &LicenseMap {
        &self.risky_map
    }

    pub fn extra_map(&self, extra: Extra) -> Option<&LicenseMap> {
        self.extra_maps.get(&extra)
    }

    /// `None` selects the stable map; an organization selects its map if the dataset has one.
    pub fn get_map(&self, extra: Option<Extra>) -> Option<&LicenseMap> {
        match extra {
            None => Some(&self.stable_map),
            Some(extra) => self.extra_map(extra),
        }
    }

    pub fn extras(&self) -> impl Iterator<Item = Extra> + '_ {
        self.extra_maps.keys().copied()
    }

    /// Total number of entries across every map.
    pub fn entry_count(&self) -> usize {
        self.stable_map.len()
            + self.risky_map.len()
            + self.extra_maps.values().map(HashMap::len).sum::<usize>()
    }
}
