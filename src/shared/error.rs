use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by license mapping and dataset loading.
///
/// A lookup only ever fails with [`LynxError::NotFound`]; the remaining
/// variants come from loading the dataset or the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LynxError {
    /// No enabled map holds a valid entry for the name.
    /// Carries the name exactly as the caller passed it, before quote normalization.
    #[error("License {license_name} not found")]
    NotFound { license_name: String },

    #[error("Failed to read license dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DatasetReadError { path: PathBuf, details: String },

    #[error("Failed to parse license dataset: {source_name}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON object of \"<name>Map\" entries")]
    DatasetParseError { source_name: String, details: String },

    #[error("Unknown extra organization: '{value}'\n\n💡 Hint: Supported values are: {supported}")]
    UnknownExtra { value: String, supported: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LynxError {
    pub fn not_found(license_name: impl Into<String>) -> Self {
        LynxError::NotFound {
            license_name: license_name.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LynxError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_contains_original_name() {
        let error = LynxError::not_found("Foo\u{2019}s License");
        let display = format!("{}", error);
        assert_eq!(display, "License Foo\u{2019}s License not found");
    }

    #[test]
    fn test_is_not_found() {
        assert!(LynxError::not_found("X").is_not_found());
        assert!(!LynxError::Validation {
            message: "bad".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_dataset_read_error_display() {
        let error = LynxError::DatasetReadError {
            path: PathBuf::from("/data/merged_data.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read license dataset"));
        assert!(display.contains("/data/merged_data.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_dataset_parse_error_display() {
        let error = LynxError::DatasetParseError {
            source_name: "embedded".to_string(),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse license dataset: embedded"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_unknown_extra_display() {
        let error = LynxError::UnknownExtra {
            value: "acme".to_string(),
            supported: "none, internal".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'acme'"));
        assert!(display.contains("none, internal"));
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let error: anyhow::Error = LynxError::not_found("MIT-ish").into();
        let lynx = error.downcast_ref::<LynxError>();
        assert_eq!(lynx, Some(&LynxError::not_found("MIT-ish")));
    }
}
