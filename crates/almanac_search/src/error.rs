//! Error types for event search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use almanac_ephem::EphemError;

/// Errors from scan configuration or oracle queries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid scan configuration or range.
    InvalidConfig(&'static str),
    /// An oracle query failed.
    Ephemeris(EphemError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemError> for SearchError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}
