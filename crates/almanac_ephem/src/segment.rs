//! Segment-table text format parser and interval lookup.
//!
//! One table file per body:
//!
//! ```text
//! # optional comments
//! body mars
//! segment 2460676.5 2460708.5 8
//!   212.41 15.96 -0.031 ...
//! segment 2460708.5 2460740.5 8
//!   ...
//! ```
//!
//! Each `segment` record covers `[jd_start, jd_end]` and carries `n`
//! Chebyshev coefficients for ecliptic longitude in degrees over the
//! normalised interval; coefficients may break across lines. Segments must
//! be listed in ascending order.

use crate::chebyshev::eval_series;
use crate::error::EphemError;

/// A single Chebyshev segment covering `[jd_start, jd_end]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub jd_start: f64,
    pub jd_end: f64,
    pub coeffs: Vec<f64>,
}

impl Segment {
    /// Evaluate longitude (degrees) and its rate (degrees/day) at `jd_ut`.
    pub fn evaluate(&self, jd_ut: f64) -> (f64, f64) {
        let span = self.jd_end - self.jd_start;
        let s = 2.0 * (jd_ut - self.jd_start) / span - 1.0;
        let (lon, dlon_ds) = eval_series(&self.coeffs, s);
        (lon, dlon_ds * 2.0 / span)
    }
}

/// Parsed segment table for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentTable {
    body_name: String,
    segments: Vec<Segment>,
}

impl SegmentTable {
    /// Body name declared in the table header (lowercase).
    pub fn body_name(&self) -> &str {
        &self.body_name
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Find the segment containing `jd_ut`, boundaries inclusive.
    pub fn find(&self, jd_ut: f64) -> Option<&Segment> {
        let idx = self.segments.partition_point(|seg| seg.jd_end < jd_ut);
        self.segments
            .get(idx)
            .filter(|seg| jd_ut >= seg.jd_start && jd_ut <= seg.jd_end)
    }

    /// Overall `[first_start, last_end]` coverage.
    pub fn coverage(&self) -> (f64, f64) {
        // Parser guarantees at least one segment.
        (
            self.segments[0].jd_start,
            self.segments[self.segments.len() - 1].jd_end,
        )
    }
}

/// Parse a segment table from its text content.
pub fn parse_table(content: &str) -> Result<SegmentTable, EphemError> {
    let mut tokens = content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some("body") => {}
        _ => return Err(EphemError::Parse("expected 'body <name>' header".into())),
    }
    let body_name = tokens
        .next()
        .ok_or_else(|| EphemError::Parse("missing body name".into()))?
        .to_ascii_lowercase();

    let mut segments: Vec<Segment> = Vec::new();

    while let Some(keyword) = tokens.next() {
        if keyword != "segment" {
            return Err(EphemError::Parse(format!(
                "expected 'segment', found '{keyword}'"
            )));
        }

        let jd_start = parse_number(tokens.next(), "segment start")?;
        let jd_end = parse_number(tokens.next(), "segment end")?;
        let count = parse_number(tokens.next(), "coefficient count")? as usize;

        if !(jd_end > jd_start) {
            return Err(EphemError::Parse(format!(
                "segment [{jd_start}, {jd_end}] has non-positive span"
            )));
        }
        if count == 0 {
            return Err(EphemError::Parse(format!(
                "segment at JD {jd_start} declares zero coefficients"
            )));
        }
        if let Some(last) = segments.last()
            && jd_start < last.jd_start
        {
            return Err(EphemError::Parse(format!(
                "segment at JD {jd_start} out of order"
            )));
        }

        let mut coeffs = Vec::with_capacity(count);
        for _ in 0..count {
            coeffs.push(parse_number(tokens.next(), "coefficient")?);
        }

        segments.push(Segment {
            jd_start,
            jd_end,
            coeffs,
        });
    }

    if segments.is_empty() {
        return Err(EphemError::Parse(format!(
            "table for '{body_name}' has no segments"
        )));
    }

    Ok(SegmentTable {
        body_name,
        segments,
    })
}

fn parse_number(token: Option<&str>, what: &str) -> Result<f64, EphemError> {
    let token = token.ok_or_else(|| EphemError::Parse(format!("unexpected end of {what}")))?;
    token
        .parse()
        .map_err(|e| EphemError::Parse(format!("cannot parse '{token}' as {what}: {e}")))
}
