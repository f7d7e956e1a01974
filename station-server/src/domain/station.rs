//! Station identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Longest identifier accepted for a station.
const MAX_LEN: usize = 16;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A ground station identifier such as `GATN`.
///
/// Identifiers are 1 to 16 uppercase ASCII letters or digits. This type
/// guarantees that any `StationId` value is valid by construction.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationId;
///
/// let gatn = StationId::parse("GATN").unwrap();
/// assert_eq!(gatn.as_str(), "GATN");
///
/// // Lowercase is rejected
/// assert!(StationId::parse("gatn").is_err());
///
/// // Empty is rejected
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse a station identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.len() > MAX_LEN {
            return Err(InvalidStationId {
                reason: "must be at most 16 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidStationId {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets the registry look stations up by `&str` without allocating.
impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
