use super::QuoteNormalizer;
use crate::license_mapping::domain::{Extra, LicenseObject, LicenseRepository};
use crate::license_mapping::policies::LookupPriority;
use crate::shared::LynxError;

/// LicenseResolver resolves a license name against a loaded repository.
///
/// Maps are probed in [`LookupPriority`] order and the first valid entry wins.
/// Entries missing an `id` or a known `src` count as absent.
pub struct LicenseResolver<'a> {
    repository: &'a LicenseRepository,
}

impl<'a> LicenseResolver<'a> {
    pub fn new(repository: &'a LicenseRepository) -> Self {
        Self { repository }
    }

    /// Maps a license name to its canonical identifier.
    ///
    /// # Arguments
    /// * `license_name` - Free-form license name
    /// * `risky` - Also consult the lower-confidence map
    /// * `extra` - Also consult this organization's map
    ///
    /// # Errors
    /// Returns [`LynxError::NotFound`] carrying `license_name` unchanged when no
    /// enabled map has a valid entry.
    pub fn map(
        &self,
        license_name: &str,
        risky: bool,
        extra: Option<Extra>,
    ) -> Result<LicenseObject, LynxError> {
        let normalized_name = QuoteNormalizer::normalize_quotes(license_name);

        for tier in LookupPriority::tiers(risky, extra) {
            let Some(map) = tier.select(self.repository) else {
                tracing::debug!(%tier, "license map not present in dataset");
                continue;
            };

            let key = if tier.uses_normalized_name() {
                normalized_name.as_str()
            } else {
                license_name
            };

            if let Some(object) = map.get(key).and_then(|record| record.to_license_object()) {
                tracing::debug!(
                    license_name,
                    %tier,
                    id = object.id(),
                    src = %object.src(),
                    "license resolved"
                );
                return Ok(object);
            }
        }

        tracing::debug!(license_name, risky, ?extra, "license not found");
        Err(LynxError::not_found(license_name))
    }
}
