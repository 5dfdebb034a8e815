//! Time handling for the almanac: Julian Date ↔ calendar conversion and
//! timezone-aware ISO-8601 formatting.
//!
//! Scan times are Julian Dates in UT throughout the workspace; this crate
//! is the only place they are turned into human-facing calendar strings.

pub mod error;
pub mod julian;
pub mod zone;

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};
pub use zone::{jd_to_iso, load_zone};
