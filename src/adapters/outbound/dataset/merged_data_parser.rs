use crate::license_mapping::domain::{Extra, LicenseMap, LicenseRecord, LicenseRepository};
use crate::shared::{LynxError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

const STABLE_MAP_KEY: &str = "stableMap";
const RISKY_MAP_KEY: &str = "riskyMap";
const MAP_KEY_SUFFIX: &str = "Map";

/// Parser for the merged license dataset document
///
/// Expected shape:
/// ```json
/// {
///   "stableMap":   { "MIT License": { "id": "MIT", "src": "spdx" } },
///   "riskyMap":    { "BSD": { "id": "BSD-3-Clause", "src": "spdx" } },
///   "internalMap": { "Internal Use Only": { "id": "LicenseRef-internal", "src": "custom" } }
/// }
/// ```
///
/// Top-level keys not ending in `Map` are ignored. Organization maps whose
/// tag has no [`Extra`] variant are skipped. Entries that are not JSON
/// objects are dropped; object entries are kept verbatim and validated at
/// lookup time.
pub struct MergedDataParser;

impl MergedDataParser {
    pub fn parse(content: &str, source_name: &str) -> Result<LicenseRepository> {
        let document: Value =
            serde_json::from_str(content).map_err(|e| LynxError::DatasetParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;

        let Value::Object(root) = document else {
            return Err(LynxError::DatasetParseError {
                source_name: source_name.to_string(),
                details: "top-level value must be a JSON object".to_string(),
            }
            .into());
        };

        let mut stable_map = LicenseMap::new();
        let mut risky_map = LicenseMap::new();
        let mut extra_maps = HashMap::new();

        for (key, value) in root {
            if !key.ends_with(MAP_KEY_SUFFIX) {
                continue;
            }

            let Value::Object(entries) = value else {
                return Err(LynxError::DatasetParseError {
                    source_name: source_name.to_string(),
                    details: format!("'{}' must be a JSON object", key),
                }
                .into());
            };

            match key.as_str() {
                STABLE_MAP_KEY => stable_map = Self::parse_map(&key, entries),
                RISKY_MAP_KEY => risky_map = Self::parse_map(&key, entries),
                _ => match Extra::from_map_key(&key) {
                    Some(extra) => {
                        extra_maps.insert(extra, Self::parse_map(&key, entries));
                    }
                    None => {
                        tracing::warn!(
                            map = %key,
                            source = source_name,
                            "skipping license map for unknown organization"
                        );
                    }
                },
            }
        }

        let repository = LicenseRepository::new(stable_map, risky_map, extra_maps);
        tracing::debug!(
            source = source_name,
            stable = repository.stable_map().len(),
            risky = repository.risky_map().len(),
            total = repository.entry_count(),
            "license dataset loaded"
        );
        Ok(repository)
    }

    fn parse_map(map_key: &str, entries: Map<String, Value>) -> LicenseMap {
        let mut map = LicenseMap::with_capacity(entries.len());
        let mut dropped = 0usize;

        for (name, entry) in entries {
            match serde_json::from_value::<LicenseRecord>(entry) {
                Ok(record) => {
                    map.insert(name, record);
                }
                Err(e) => {
                    tracing::warn!(
                        map = map_key,
                        license_name = %name,
                        error = %e,
                        "dropping malformed license entry"
                    );
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            tracing::warn!(map = map_key, dropped, "dropped malformed license entries");
        }
        map
    }
}
