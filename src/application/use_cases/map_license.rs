use crate::application::dto::MapRequest;
use crate::license_mapping::domain::{LicenseObject, LicenseRepository};
use crate::license_mapping::services::LicenseResolver;
use crate::ports::inbound::LicenseMappingPort;
use crate::ports::outbound::LicenseMapReader;
use crate::shared::{LynxError, Result};

/// MapLicenseUseCase - Core use case for license name resolution
///
/// Owns the repository loaded through a [`LicenseMapReader`]. The reader is
/// consulted once in [`MapLicenseUseCase::load`]; every lookup afterwards
/// only reads the repository.
#[derive(Debug, Clone)]
pub struct MapLicenseUseCase {
    repository: LicenseRepository,
}

impl MapLicenseUseCase {
    pub fn new(repository: LicenseRepository) -> Self {
        Self { repository }
    }

    /// Loads the dataset from `reader` and builds the use case around it.
    pub fn load<R: LicenseMapReader>(reader: &R) -> Result<Self> {
        let repository = reader.read_license_map()?;
        tracing::debug!(
            source = %reader.source_name(),
            entries = repository.entry_count(),
            "license mapping use case ready"
        );
        Ok(Self::new(repository))
    }

    pub fn repository(&self) -> &LicenseRepository {
        &self.repository
    }

    pub fn execute(&self, request: &MapRequest) -> std::result::Result<LicenseObject, LynxError> {
        LicenseResolver::new(&self.repository).map(
            &request.license_name,
            request.risky,
            request.extra,
        )
    }
}

impl LicenseMappingPort for MapLicenseUseCase {
    fn map_license(&self, request: &MapRequest) -> std::result::Result<LicenseObject, LynxError> {
        self.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_mapping::domain::{Extra, LicenseMap, LicenseRecord, LicenseSource};
    use std::collections::HashMap;

    struct StubReader {
        fail: bool,
    }

    impl LicenseMapReader for StubReader {
        fn read_license_map(&self) -> Result<LicenseRepository> {
            if self.fail {
                anyhow::bail!("stub reader failure");
            }
            let mut stable = LicenseMap::new();
            stable.insert(
                "MIT".to_string(),
                LicenseRecord::valid("MIT", LicenseSource::Spdx),
            );
            let mut internal = LicenseMap::new();
            internal.insert(
                "X11".to_string(),
                LicenseRecord::valid("X11", LicenseSource::Spdx),
            );
            let mut extras = HashMap::new();
            extras.insert(Extra::Internal, internal);
            Ok(LicenseRepository::new(stable, LicenseMap::new(), extras))
        }

        fn source_name(&self) -> String {
            "stub".to_string()
        }
    }

    #[test]
    fn test_load_and_execute() {
        let use_case = MapLicenseUseCase::load(&StubReader { fail: false }).unwrap();
        let object = use_case.execute(&MapRequest::new("MIT")).unwrap();
        assert_eq!(object.id(), "MIT");
        assert_eq!(use_case.repository().entry_count(), 2);
    }

    #[test]
    fn test_load_propagates_reader_error() {
        let err = MapLicenseUseCase::load(&StubReader { fail: true }).unwrap_err();
        assert!(err.to_string().contains("stub reader failure"));
    }

    #[test]
    fn test_port_honours_request_flags() {
        let use_case = MapLicenseUseCase::load(&StubReader { fail: false }).unwrap();
        let port: &dyn LicenseMappingPort = &use_case;

        assert!(port.map_license(&MapRequest::new("X11")).is_err());
        let object = port
            .map_license(&MapRequest::new("X11").with_extra(Some(Extra::Internal)))
            .unwrap();
        assert_eq!(object.id(), "X11");
    }

    #[test]
    fn test_results_are_independent_values() {
        let use_case = MapLicenseUseCase::load(&StubReader { fail: false }).unwrap();
        let first = use_case.execute(&MapRequest::new("MIT")).unwrap();
        let second = use_case.execute(&MapRequest::new("MIT")).unwrap();
        drop(first);
        assert_eq!(second.id(), "MIT");
        assert_eq!(
            use_case.repository().stable_map()["MIT"].id(),
            Some("MIT")
        );
    }
}
