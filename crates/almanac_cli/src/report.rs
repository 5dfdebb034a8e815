//! Event recording: merge, order, and serialize scan results.
//!
//! Each scan family hands over its own event vector; the recorder turns
//! them into one chronological list of `{datetime, event}` records with
//! timestamps rendered in the target timezone.

use jiff::tz::TimeZone;
use serde::Serialize;

use almanac_search::{IngressEvent, PhaseEvent, StationEvent};
use almanac_time::{TimeError, jd_to_iso};

/// One entry of the output artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRecord {
    /// ISO-8601 local timestamp including the UTC offset.
    pub datetime: String,
    /// Human-readable description.
    pub event: String,
}

pub fn describe_ingress(e: &IngressEvent) -> String {
    format!("{} enters {}", e.body.name(), e.sign.name())
}

pub fn describe_station(e: &StationEvent) -> String {
    format!("{} {}", e.body.name(), e.kind.verb())
}

pub fn describe_phase(e: &PhaseEvent) -> String {
    format!("{} in {}", e.phase.name(), e.sign.name())
}

/// Merge the per-family event vectors into one time-sorted report.
///
/// The sort is stable on the Julian Date, so events at the same instant
/// keep their insertion order (ingresses, then stations, then phases).
pub fn build_report(
    ingresses: &[IngressEvent],
    stations: &[StationEvent],
    phases: &[PhaseEvent],
    tz: &TimeZone,
) -> Result<Vec<EventRecord>, TimeError> {
    let mut entries: Vec<(f64, EventRecord)> =
        Vec::with_capacity(ingresses.len() + stations.len() + phases.len());

    for e in ingresses {
        entries.push((
            e.jd_ut,
            EventRecord {
                datetime: jd_to_iso(e.jd_ut, tz)?,
                event: describe_ingress(e),
            },
        ));
    }
    for e in stations {
        entries.push((
            e.jd_ut,
            EventRecord {
                datetime: jd_to_iso(e.jd_ut, tz)?,
                event: describe_station(e),
            },
        ));
    }
    for e in phases {
        entries.push((
            e.jd_ut,
            EventRecord {
                datetime: jd_to_iso(e.jd_ut, tz)?,
                event: describe_phase(e),
            },
        ));
    }

    entries.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(entries.into_iter().map(|(_, record)| record).collect())
}
