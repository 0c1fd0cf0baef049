use crate::license_mapping::domain::LicenseRepository;
use crate::shared::Result;

/// LicenseMapReader port for loading the license dataset
///
/// This port abstracts where the precomputed name → identifier dataset comes
/// from (bundled resource, file on disk, test fixture). It is called once per
/// repository; the result is never reloaded or mutated.
pub trait LicenseMapReader {
    /// Loads and parses the full dataset
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dataset cannot be read
    /// - The dataset is not a JSON object of `"<name>Map"` entries
    fn read_license_map(&self) -> Result<LicenseRepository>;

    /// Human-readable origin of the dataset, used in log and error messages
    fn source_name(&self) -> String;
}
