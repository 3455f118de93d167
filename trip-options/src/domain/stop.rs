//! Stop identifiers.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid stop or route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

/// Validate a feed identifier: non-empty, no surrounding whitespace.
pub(super) fn check_id(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            reason: "must not be empty",
        });
    }
    if s.trim() != s {
        return Err(InvalidId {
            reason: "must not have surrounding whitespace",
        });
    }
    Ok(())
}

/// A transit stop identifier from the schedule feed.
///
/// Shared as `Arc<str>` so rides and segments clone it cheaply.
///
/// # Examples
///
/// ```
/// use trip_options::domain::StopId;
///
/// let stop = StopId::parse("DC:1234").unwrap();
/// assert_eq!(stop.as_str(), "DC:1234");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse(" 1234").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(Arc<str>);

impl StopId {
    /// Parse a stop identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        check_id(s)?;
        Ok(StopId(Arc::from(s)))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.as_str())
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StopId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StopId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StopId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A stop with its human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
}

impl Stop {
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StopId::parse("1234").is_ok());
        assert!(StopId::parse("DC:1234").is_ok());
        assert!(StopId::parse("Metro Center").is_ok());
    }

    #[test]
    fn reject_empty_and_padded() {
        assert!(StopId::parse("").is_err());
        assert!(StopId::parse(" A").is_err());
        assert!(StopId::parse("A\t").is_err());
    }

    #[test]
    fn display_and_debug() {
        let stop = StopId::parse("S1").unwrap();
        assert_eq!(stop.to_string(), "S1");
        assert_eq!(format!("{stop:?}"), "StopId(S1)");
    }

    #[test]
    fn serde_roundtrip_rejects_invalid() {
        let stop: StopId = serde_json::from_str("\"S1\"").unwrap();
        assert_eq!(serde_json::to_string(&stop).unwrap(), "\"S1\"");
        assert!(serde_json::from_str::<StopId>("\"\"").is_err());
    }
}
