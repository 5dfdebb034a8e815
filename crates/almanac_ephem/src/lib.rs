//! Ephemeris oracle: body catalogue, the `Ephemeris` trait seam, and a
//! table-driven engine.
//!
//! Everything downstream (scanners, refiner, CLI) consumes the oracle
//! through the [`Ephemeris`] trait: a synchronous, side-effect-free query
//! for a body's geocentric ecliptic longitude and angular speed at a
//! Julian Date (UT). The production [`Engine`] serves queries from per-body
//! Chebyshev segment tables loaded once at startup; tests substitute
//! synthetic implementations.

pub mod chebyshev;
pub mod engine;
pub mod error;
pub mod segment;

pub use engine::{Engine, EngineConfig};
pub use error::EphemError;
pub use segment::{Segment, SegmentTable};

/// Bodies served by the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All supported bodies in scan order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Lowercase stem of the body's table file (`<stem>.eph`).
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// Parse a body from its name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

/// Geocentric ecliptic state of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Ecliptic longitude in degrees, normalised to [0, 360).
    pub longitude_deg: f64,
    /// Longitude rate in degrees per day (negative while retrograde).
    pub speed_deg_per_day: f64,
}

/// The oracle seam: longitude and speed of a body at a Julian Date (UT).
pub trait Ephemeris {
    fn position_and_speed(&self, body: Body, jd_ut: f64) -> Result<BodyState, EphemError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_count() {
        assert_eq!(ALL_BODIES.len(), 10);
    }

    #[test]
    fn from_name_roundtrip() {
        for body in ALL_BODIES {
            assert_eq!(Body::from_name(body.name()), Some(body));
            assert_eq!(Body::from_name(body.file_stem()), Some(body));
        }
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(Body::from_name("Vulcan"), None);
    }
}
