//! Celestial event search engine: sign ingresses, retrograde/direct
//! stations, and lunar phases.
//!
//! All searches share one pattern: a coarse scan at a fixed cadence
//! detects a crossing between consecutive samples, and a bisection refiner
//! pins down the exact time inside the bracket. Everything is generic over
//! the [`almanac_ephem::Ephemeris`] oracle, so the scanners run unchanged
//! against the file-backed engine or synthetic test oracles.
//!
//! Each search returns its own event vector; callers merge and order them.

pub mod config;
pub mod error;
pub mod ingress;
pub mod phase;
pub mod predicate;
pub mod refine;
pub mod station;
pub mod zodiac;

pub use config::ScanConfig;
pub use error::SearchError;
pub use ingress::{IngressEvent, next_ingress, search_ingresses};
pub use phase::{ALL_PHASES, Phase, PhaseEvent, search_lunar_phases};
pub use predicate::Predicate;
pub use refine::{Bracket, Refined, refine};
pub use station::{StationEvent, StationKind, next_station, search_stations};
pub use zodiac::{ALL_SIGNS, Sign, sign_from_longitude};
