use crate::license_mapping::domain::Extra;

/// MapRequest - Request DTO for the license mapping use case
///
/// Defaults to a stable-map-only lookup; risky and extra lookups are opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRequest {
    /// License name as the caller received it
    pub license_name: String,
    /// Whether to also consult the lower-confidence map
    pub risky: bool,
    /// Organization whose override map is consulted last
    pub extra: Option<Extra>,
}

impl MapRequest {
    pub fn new(license_name: impl Into<String>) -> Self {
        Self {
            license_name: license_name.into(),
            risky: false,
            extra: None,
        }
    }

    pub fn with_risky(mut self, risky: bool) -> Self {
        self.risky = risky;
        self
    }

    pub fn with_extra(mut self, extra: Option<Extra>) -> Self {
        self.extra = extra;
        self
    }
}
