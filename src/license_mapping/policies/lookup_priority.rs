use crate::license_mapping::domain::{Extra, LicenseMap, LicenseRepository};
use std::fmt;

/// One map probed during a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTier {
    Stable,
    Risky,
    Extra(Extra),
}

impl LookupTier {
    /// Whether the tier is probed with the quote-normalized name.
    /// The risky tier is probed with the name exactly as given.
    pub fn uses_normalized_name(&self) -> bool {
        !matches!(self, LookupTier::Risky)
    }

    /// The map this tier reads, or `None` if the dataset has no such map.
    pub fn select<'a>(&self, repository: &'a LicenseRepository) -> Option<&'a LicenseMap> {
        match self {
            LookupTier::Stable => Some(repository.stable_map()),
            LookupTier::Risky => Some(repository.risky_map()),
            LookupTier::Extra(extra) => repository.extra_map(*extra),
        }
    }
}

impl fmt::Display for LookupTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupTier::Stable => write!(f, "stable"),
            LookupTier::Risky => write!(f, "risky"),
            LookupTier::Extra(extra) => write!(f, "extra:{}", extra),
        }
    }
}

/// LookupPriority policy for the order in which maps are consulted
///
/// Priority order:
/// 1. stable map (always)
/// 2. risky map (if risky lookups are enabled)
/// 3. organization map (if an extra organization is given)
///
/// The first valid hit wins; later tiers are never consulted after a hit.
pub struct LookupPriority;

impl LookupPriority {
    pub fn tiers(risky: bool, extra: Option<Extra>) -> Vec<LookupTier> {
        let mut tiers = vec![LookupTier::Stable];
        if risky {
            tiers.push(LookupTier::Risky);
        }
        if let Some(extra) = extra {
            tiers.push(LookupTier::Extra(extra));
        }
        tiers
    }
}
