use crate::application::dto::MapRequest;
use crate::license_mapping::domain::LicenseObject;
use crate::shared::LynxError;

/// LicenseMappingPort - Inbound port for license name resolution
///
/// This port is the application's public lookup API. Resolution runs
/// synchronously and produces its result exactly once; there is nothing to
/// cancel or retry since the same input always yields the same outcome.
pub trait LicenseMappingPort {
    /// Resolves a license name to its canonical identifier
    ///
    /// # Errors
    /// Returns [`LynxError::NotFound`] if no enabled map has a valid entry
    fn map_license(&self, request: &MapRequest) -> Result<LicenseObject, LynxError>;
}
