//! Error types for calendar conversion and timezone formatting.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Julian/calendar conversion or timezone lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The requested IANA timezone name could not be resolved.
    UnknownZone(String),
    /// A Julian Date decomposed into a calendar date jiff rejects.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownZone(name) => write!(f, "unknown timezone: {name}"),
            Self::InvalidDate(msg) => write!(f, "invalid calendar date: {msg}"),
        }
    }
}

impl Error for TimeError {}
