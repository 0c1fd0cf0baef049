use std::cell::Cell;
use std::collections::HashMap;
use license_lynx::prelude::*;

/// Mock LicenseMapReader for testing
pub struct MockLicenseMapReader {
    pub stable: LicenseMap,
    pub risky: LicenseMap,
    pub extras: HashMap<Extra, LicenseMap>,
    pub should_fail: bool,
    pub read_count: Cell<usize>,
}

impl MockLicenseMapReader {
    pub fn new() -> Self {
        Self {
            stable: LicenseMap::new(),
            risky: LicenseMap::new(),
            extras: HashMap::new(),
            should_fail: false,
            read_count: Cell::new(0),
        }
    }

    pub fn with_stable(mut self, name: &str, id: &str, src: LicenseSource) -> Self {
        self.stable
            .insert(name.to_string(), LicenseRecord::valid(id, src));
        self
    }

    pub fn with_risky(mut self, name: &str, id: &str, src: LicenseSource) -> Self {
        self.risky
            .insert(name.to_string(), LicenseRecord::valid(id, src));
        self
    }

    pub fn with_extra(mut self, extra: Extra, name: &str, id: &str, src: LicenseSource) -> Self {
        self.extras
            .entry(extra)
            .or_default()
            .insert(name.to_string(), LicenseRecord::valid(id, src));
        self
    }

    pub fn with_raw_stable(mut self, name: &str, record: LicenseRecord) -> Self {
        self.stable.insert(name.to_string(), record);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }
}

impl Default for MockLicenseMapReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseMapReader for MockLicenseMapReader {
    fn read_license_map(&self) -> Result<LicenseRepository> {
        self.read_count.set(self.read_count.get() + 1);
        if self.should_fail {
            anyhow::bail!("Mock license map reader failure");
        }

        Ok(LicenseRepository::new(
            self.stable.clone(),
            self.risky.clone(),
            self.extras.clone(),
        ))
    }

    fn source_name(&self) -> String {
        "mock".to_string()
    }
}
