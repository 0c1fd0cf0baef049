use crate::shared::LynxError;
use std::fmt;
use std::str::FromStr;

/// Organizations that ship their own override map in the dataset.
///
/// Each member owns the dataset key `"<tag>Map"`; adding an organization means
/// adding a variant here and the matching map to the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extra {
    Internal,
}

impl Extra {
    pub const ALL: [Extra; 1] = [Extra::Internal];

    /// Lowercase organization tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Extra::Internal => "internal",
        }
    }

    /// Dataset key of this organization's map.
    pub fn map_key(&self) -> String {
        format!("{}Map", self.as_str())
    }

    /// Parses a tag where `"none"` and the empty string mean no extra map.
    pub fn parse_optional(value: &str) -> Result<Option<Extra>, LynxError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        trimmed.parse::<Extra>().map(Some)
    }

    /// Reverse of [`Extra::map_key`]; `None` for keys no variant owns.
    pub fn from_map_key(key: &str) -> Option<Extra> {
        let tag = key.strip_suffix("Map")?;
        Extra::ALL.into_iter().find(|extra| extra.as_str() == tag)
    }

    fn supported_values() -> String {
        std::iter::once("none")
            .chain(Extra::ALL.iter().map(|extra| extra.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Extra {
    type Err = LynxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Extra::ALL
            .into_iter()
            .find(|extra| extra.as_str() == lowered)
            .ok_or_else(|| LynxError::UnknownExtra {
                value: s.to_string(),
                supported: Extra::supported_values(),
            })
    }
}
