/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod dataset;
pub mod embedded;
pub mod filesystem;
