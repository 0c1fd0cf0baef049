/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the mapping core uses to obtain the
/// license dataset.
pub mod license_map_reader;

pub use license_map_reader::LicenseMapReader;
