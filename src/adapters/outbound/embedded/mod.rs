/// Adapter serving the dataset compiled into the crate
mod embedded_reader;

pub use embedded_reader::{EmbeddedLicenseMapReader, EMBEDDED_DATASET};
