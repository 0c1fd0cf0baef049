//! Public entry point: the process-wide [`LicenseLynx`] instance and free
//! functions over it.

use std::sync::OnceLock;

use crate::adapters::outbound::embedded::EmbeddedLicenseMapReader;
use crate::adapters::outbound::filesystem::FileSystemLicenseMapReader;
use crate::application::dto::MapRequest;
use crate::application::use_cases::MapLicenseUseCase;
use crate::config::ConfigFile;
use crate::license_mapping::domain::{Extra, LicenseObject, LicenseRepository};
use crate::ports::inbound::LicenseMappingPort;
use crate::ports::outbound::LicenseMapReader;
use crate::shared::{LynxError, Result};

static GLOBAL: OnceLock<LicenseLynx> = OnceLock::new();

/// License name mapper over a read-only dataset.
///
/// Use [`LicenseLynx::global`] for the bundled dataset, loaded once per
/// process, or build an independent instance with [`LicenseLynx::new`],
/// [`LicenseLynx::from_reader`] or [`LicenseLynx::from_config`].
#[derive(Debug, Clone)]
pub struct LicenseLynx {
    use_case: MapLicenseUseCase,
    default_risky: bool,
    default_extra: Option<Extra>,
}

impl LicenseLynx {
    pub fn new(repository: LicenseRepository) -> Self {
        Self {
            use_case: MapLicenseUseCase::new(repository),
            default_risky: false,
            default_extra: None,
        }
    }

    pub fn from_reader<R: LicenseMapReader>(reader: &R) -> Result<Self> {
        Ok(Self {
            use_case: MapLicenseUseCase::load(reader)?,
            default_risky: false,
            default_extra: None,
        })
    }

    /// Loads `dataset_path` if configured, otherwise the bundled dataset,
    /// and takes the default flags from the config.
    pub fn from_config(config: &ConfigFile) -> Result<Self> {
        let lynx = match config.dataset_path {
            Some(ref path) => Self::from_reader(&FileSystemLicenseMapReader::new(path))?,
            None => Self::from_reader(&EmbeddedLicenseMapReader::new())?,
        };

        Ok(lynx
            .with_default_risky(config.risky.unwrap_or(false))
            .with_default_extra(config.extra()?))
    }

    /// Process-wide instance over the bundled dataset, loaded on first use.
    ///
    /// If the bundled dataset fails to load, the error is logged once and the
    /// instance holds an empty dataset: every lookup returns
    /// [`LynxError::NotFound`].
    pub fn global() -> &'static LicenseLynx {
        GLOBAL.get_or_init(|| Self::load_or_empty(&EmbeddedLicenseMapReader::new()))
    }

    fn load_or_empty<R: LicenseMapReader>(reader: &R) -> Self {
        Self::from_reader(reader).unwrap_or_else(|e| {
            tracing::error!(
                error = %e,
                source = %reader.source_name(),
                "failed to load license dataset, continuing with an empty one"
            );
            Self::new(LicenseRepository::empty())
        })
    }

    pub fn with_default_risky(mut self, risky: bool) -> Self {
        self.default_risky = risky;
        self
    }

    pub fn with_default_extra(mut self, extra: Option<Extra>) -> Self {
        self.default_extra = extra;
        self
    }

    /// Maps a license name to its canonical identifier.
    ///
    /// Probes the stable map, then the risky map if `risky` is set, then the
    /// `extra` organization's map. The first valid entry wins.
    pub fn map(
        &self,
        license_name: &str,
        risky: bool,
        extra: Option<Extra>,
    ) -> std::result::Result<LicenseObject, LynxError> {
        let request = MapRequest::new(license_name)
            .with_risky(risky)
            .with_extra(extra);
        self.use_case.execute(&request)
    }

    /// [`LicenseLynx::map`] with the instance's configured default flags.
    pub fn map_with_defaults(
        &self,
        license_name: &str,
    ) -> std::result::Result<LicenseObject, LynxError> {
        self.map(license_name, self.default_risky, self.default_extra)
    }

    pub fn repository(&self) -> &LicenseRepository {
        self.use_case.repository()
    }
}

impl LicenseMappingPort for LicenseLynx {
    fn map_license(&self, request: &MapRequest) -> std::result::Result<LicenseObject, LynxError> {
        self.use_case.execute(request)
    }
}

/// Maps a license name using the process-wide instance.
///
/// The bundled dataset is loaded on the first call. If it cannot be loaded,
/// an error is logged and this returns [`LynxError::NotFound`] for every name.
pub fn map(
    license_name: &str,
    risky: bool,
    extra: Option<Extra>,
) -> std::result::Result<LicenseObject, LynxError> {
    LicenseLynx::global().map(license_name, risky, extra)
}

pub fn is_spdx_identifier(object: &LicenseObject) -> bool {
    object.is_spdx_identifier()
}

pub fn is_scancode_licensedb_identifier(object: &LicenseObject) -> bool {
    object.is_scancode_licensedb_identifier()
}

pub fn is_custom_identifier(object: &LicenseObject) -> bool {
    object.is_custom_identifier()
}
