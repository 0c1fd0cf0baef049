use super::LicenseSource;
use crate::shared::Result;
use serde::Serialize;

/// LicenseObject value object: a resolved canonical identifier and its source.
///
/// Fields are private and there are no setters, so a value handed to a caller
/// cannot be changed. Each successful lookup builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LicenseObject {
    id: String,
    src: LicenseSource,
}

impl LicenseObject {
    pub fn new(id: String, src: LicenseSource) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Canonical license identifier cannot be empty");
        }
        Ok(Self { id, src })
    }

    /// Canonical license identifier (e.g. an SPDX short identifier)
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn src(&self) -> LicenseSource {
        self.src
    }

    pub fn is_spdx_identifier(&self) -> bool {
        self.src == LicenseSource::Spdx
    }

    pub fn is_scancode_licensedb_identifier(&self) -> bool {
        self.src == LicenseSource::ScancodeLicensedb
    }

    pub fn is_custom_identifier(&self) -> bool {
        self.src == LicenseSource::Custom
    }
}

impl std::fmt::Display for LicenseObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.src)
    }
}
