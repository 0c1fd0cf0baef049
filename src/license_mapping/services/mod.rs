pub mod license_resolver;
pub mod quote_normalizer;

pub use license_resolver::LicenseResolver;
pub use quote_normalizer::{QuoteNormalizer, DEFAULT_REPLACEMENT, QUOTE_CHARACTERS};
