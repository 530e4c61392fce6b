//! License identifiers offered by the form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReadmeError;

/// Supported project licenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "ISC")]
    Isc,
}

impl License {
    /// Get all licenses in select-control order
    pub fn all() -> &'static [License] {
        &[
            License::Mit,
            License::Apache2,
            License::Gpl3,
            License::Bsd3Clause,
            License::Isc,
        ]
    }

    /// SPDX-style identifier, as written into the README
    pub fn id(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Isc => "ISC",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
            License::Gpl3 => "GPL 3.0",
            License::Bsd3Clause => "BSD 3-Clause",
            License::Isc => "ISC",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for License {
    type Err = ReadmeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        License::all()
            .iter()
            .copied()
            .find(|l| {
                l.id().eq_ignore_ascii_case(trimmed) || l.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ReadmeError::UnknownLicense(s.to_string()))
    }
}

/// Parse an optional license where the empty string means "no license"
pub fn parse_optional(s: &str) -> Result<Option<License>, ReadmeError> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}

/// Serde adapter for `Option<License>` fields: `""` and `null` both mean none
pub(crate) mod optional {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_optional, License};

    pub fn serialize<S: Serializer>(
        value: &Option<License>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|l| l.id()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<License>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_optional(&s).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_labels() {
        assert_eq!("MIT".parse::<License>().unwrap(), License::Mit);
        assert_eq!("apache-2.0".parse::<License>().unwrap(), License::Apache2);
        assert_eq!("GPL 3.0".parse::<License>().unwrap(), License::Gpl3);
        assert_eq!("bsd-3-clause".parse::<License>().unwrap(), License::Bsd3Clause);
        assert!("WTFPL".parse::<License>().is_err());
    }

    #[test]
    fn test_parse_optional_empty() {
        assert_eq!(parse_optional("").unwrap(), None);
        assert_eq!(parse_optional("  ").unwrap(), None);
        assert_eq!(parse_optional("ISC").unwrap(), Some(License::Isc));
    }

    #[test]
    fn test_display_is_id() {
        for license in License::all() {
            assert_eq!(license.to_string(), license.id());
        }
    }
}
