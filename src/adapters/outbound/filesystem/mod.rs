/// Filesystem adapters for reading datasets from disk
mod file_reader;

pub use file_reader::FileSystemLicenseMapReader;
