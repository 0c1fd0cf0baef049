/// Mock implementations for testing
mod mock_license_map_reader;

pub use mock_license_map_reader::MockLicenseMapReader;
