/// Dataset codec shared by every LicenseMapReader adapter
mod merged_data_parser;

pub use merged_data_parser::MergedDataParser;
