//! Configuration file support for license-lynx.
//!
//! Provides YAML-based configuration through `license-lynx.config.yml` files:
//! which dataset to load and the default lookup flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::license_mapping::domain::Extra;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-lynx.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Merged dataset to load instead of the bundled one.
    pub dataset_path: Option<PathBuf>,
    /// Default for risky lookups in `map_with_defaults`.
    pub risky: Option<bool>,
    /// Default organization tag in `map_with_defaults` (`none` disables it).
    pub extra: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured organization, already validated by [`load_config_from_path`].
    pub fn extra(&self) -> Result<Option<Extra>> {
        match self.extra.as_deref() {
            Some(value) => Ok(Extra::parse_optional(value)?),
            None => Ok(None),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref path) = config.dataset_path {
        if path.as_os_str().is_empty() {
            bail!(
                "Invalid config: dataset_path must not be empty.\n\n\
                 💡 Hint: Remove the field to use the bundled dataset."
            );
        }
    }

    if let Some(ref extra) = config.extra {
        Extra::parse_optional(extra).context("Invalid config: extra")?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
dataset_path: /opt/licenses/merged_data.json
risky: true
extra: internal
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.dataset_path.as_deref(),
            Some(Path::new("/opt/licenses/merged_data.json"))
        );
        assert_eq!(config.risky, Some(true));
        assert_eq!(config.extra().unwrap(), Some(Extra::Internal));
    }

    #[test]
    fn test_extra_none_disables() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "extra: none\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.extra().unwrap(), None);
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "risky: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
        assert_eq!(config.unwrap().risky, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_extra_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "extra: acme\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Invalid config: extra"));
        assert!(format!("{:#}", err).contains("acme"));
    }

    #[test]
    fn test_empty_dataset_path_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "dataset_path: \"\"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("dataset_path must not be empty"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
risky: true
fuzzy: true
threshold: 0.8
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("fuzzy"));
        assert!(config.unknown_fields.contains_key("threshold"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.dataset_path.is_none());
        assert!(config.risky.is_none());
        assert!(config.extra().unwrap().is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
