/// Domain layer: license mapping models, lookup order and the resolver
///
/// Nothing here performs I/O; the dataset arrives through the
/// [`LicenseMapReader`](crate::ports::outbound::LicenseMapReader) port.
pub mod domain;
pub mod policies;
pub mod services;
