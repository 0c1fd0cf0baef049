use super::{LicenseObject, LicenseSource};
use serde::Deserialize;

/// A dataset entry exactly as stored: either field may be missing or malformed.
///
/// Records are kept as-is at load time; validity is decided per lookup by
/// [`LicenseRecord::to_license_object`]. Older datasets name the identifier
/// `canonical`; `id` wins when an entry carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LicenseRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    canonical: Option<String>,
    #[serde(default)]
    src: Option<String>,
}

impl LicenseRecord {
    pub fn new(id: Option<String>, src: Option<String>) -> Self {
        Self {
            id,
            canonical: None,
            src,
        }
    }

    /// Shorthand for a well-formed record.
    pub fn valid(id: &str, src: LicenseSource) -> Self {
        Self::new(Some(id.to_string()), Some(src.as_str().to_string()))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().or(self.canonical.as_deref())
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Builds a fresh [`LicenseObject`] if `id` is non-empty and `src` is a known tag.
    pub fn to_license_object(&self) -> Option<LicenseObject> {
        let src = self.src.as_deref()?.parse::<LicenseSource>().ok()?;
        let id = self.id()?.to_string();
        LicenseObject::new(id, src).ok()
    }
}
