pub mod extra;
pub mod license_object;
pub mod license_record;
pub mod license_repository;
pub mod license_source;

pub use extra::Extra;
pub use license_object::LicenseObject;
pub use license_record::LicenseRecord;
pub use license_repository::{LicenseMap, LicenseRepository};
pub use license_source::LicenseSource;
