//! Error types for the ephemeris oracle.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from engine configuration, table loading, or evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// Engine configuration rejected before any file access.
    InvalidConfig(&'static str),
    /// A table file could not be read.
    DataFile(String),
    /// A table file could not be parsed.
    Parse(String),
    /// The requested epoch is outside every loaded segment for the body.
    EpochOutOfRange { body: &'static str, jd_ut: f64 },
    /// Internal invariant violated.
    Internal(String),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::DataFile(msg) => write!(f, "data file error: {msg}"),
            Self::Parse(msg) => write!(f, "table parse error: {msg}"),
            Self::EpochOutOfRange { body, jd_ut } => {
                write!(f, "epoch out of range for {body}: JD {jd_ut}")
            }
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl Error for EphemError {}
