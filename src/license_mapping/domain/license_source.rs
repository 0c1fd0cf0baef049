use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provenance of a canonical identifier: which data source validated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseSource {
    /// SPDX license list
    Spdx,
    /// ScanCode LicenseDB
    ScancodeLicensedb,
    /// Custom, internally maintained list
    Custom,
}

impl LicenseSource {
    pub const ALL: [LicenseSource; 3] = [
        LicenseSource::Spdx,
        LicenseSource::ScancodeLicensedb,
        LicenseSource::Custom,
    ];

    /// Tag as written in the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseSource::Spdx => "spdx",
            LicenseSource::ScancodeLicensedb => "scancode-licensedb",
            LicenseSource::Custom => "custom",
        }
    }
}

impl fmt::Display for LicenseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LicenseSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LicenseSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| format!("Unknown license source tag: '{}'", s))
    }
}
