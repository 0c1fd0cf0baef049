/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces callers use to interact with the
/// application core.
pub mod license_mapping_port;

pub use license_mapping_port::LicenseMappingPort;
