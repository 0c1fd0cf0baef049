use crate::adapters::outbound::dataset::MergedDataParser;
use crate::license_mapping::domain::LicenseRepository;
use crate::ports::outbound::LicenseMapReader;
use crate::shared::Result;

/// Merged dataset bundled with the crate.
pub const EMBEDDED_DATASET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/merged_data.json"
));

/// EmbeddedLicenseMapReader adapter for the bundled dataset
///
/// Needs no filesystem access at runtime, so it is the default source for
/// the process-wide instance.
pub struct EmbeddedLicenseMapReader;

impl EmbeddedLicenseMapReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedLicenseMapReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseMapReader for EmbeddedLicenseMapReader {
    fn read_license_map(&self) -> Result<LicenseRepository> {
        MergedDataParser::parse(EMBEDDED_DATASET, &self.source_name())
    }

    fn source_name(&self) -> String {
        "embedded merged_data.json".to_string()
    }
}
