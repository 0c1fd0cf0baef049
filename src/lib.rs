//! license-lynx - License name normalization and lookup
//!
//! Resolves free-form license names (as entered by people or extracted by
//! tools) to a canonical identifier, together with the source that
//! validated it: the SPDX license list, ScanCode LicenseDB, or a custom list.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_mapping`): license models, lookup order, quote normalization and the resolver
//! - **Application Layer** (`application`): the mapping use case and its request DTO
//! - **Ports** (`ports`): interface definitions for callers and dataset sources
//! - **Adapters** (`adapters`): bundled and on-disk dataset readers
//! - **Shared** (`shared`): error types and file checks
//!
//! # Example
//!
//! ```no_run
//! use license_lynx::prelude::*;
//!
//! let object = license_lynx::map("The MIT License", false, None).unwrap();
//! assert_eq!(object.id(), "MIT");
//! assert!(is_spdx_identifier(&object));
//!
//! // Lower-confidence and organization-specific mappings are opt-in.
//! let risky = license_lynx::map("BSD", true, Some(Extra::Internal));
//! assert!(risky.is_ok());
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_mapping;
pub mod lynx;
pub mod ports;
pub mod shared;

pub use lynx::{
    is_custom_identifier, is_scancode_licensedb_identifier, is_spdx_identifier, map, LicenseLynx,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::dataset::MergedDataParser;
    pub use crate::adapters::outbound::embedded::EmbeddedLicenseMapReader;
    pub use crate::adapters::outbound::filesystem::FileSystemLicenseMapReader;
    pub use crate::application::dto::MapRequest;
    pub use crate::application::use_cases::MapLicenseUseCase;
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile};
    pub use crate::license_mapping::domain::{
        Extra, LicenseMap, LicenseObject, LicenseRecord, LicenseRepository, LicenseSource,
    };
    pub use crate::license_mapping::policies::{LookupPriority, LookupTier};
    pub use crate::license_mapping::services::{LicenseResolver, QuoteNormalizer};
    pub use crate::lynx::{
        is_custom_identifier, is_scancode_licensedb_identifier, is_spdx_identifier, LicenseLynx,
    };
    pub use crate::ports::inbound::LicenseMappingPort;
    pub use crate::ports::outbound::LicenseMapReader;
    pub use crate::shared::{LynxError, Result};
}
