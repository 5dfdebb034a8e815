//! Julian Date ↔ Gregorian calendar conversion.
//!
//! Algorithms follow the standard formulation in Meeus, *Astronomical
//! Algorithms*, chapter 7. Dates are proleptic Gregorian; the Julian
//! calendar switchover is handled for dates before 1582-Oct-15.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a calendar date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `15.5` = the 15th at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    // Gregorian reform: 1582-Oct-15 and later use the Gregorian leap rule.
    let b = if (year, month, day.floor() as u32) >= (1582, 10, 15) {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to `(year, month, day)` where `day` carries
/// the fractional time of day.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 {
        (c - 4716.0) as i32
    } else {
        (c - 4715.0) as i32
    };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_reference_dates() {
        // Meeus ch. 7 worked examples.
        assert!((calendar_to_jd(1987, 6, 19.5) - 2_446_966.0).abs() < 1e-9);
        assert!((calendar_to_jd(1999, 1, 1.0) - 2_451_179.5).abs() < 1e-9);
        assert!((calendar_to_jd(1988, 1, 27.0) - 2_447_187.5).abs() < 1e-9);
    }

    #[test]
    fn scan_range_endpoints() {
        assert!((calendar_to_jd(2025, 1, 1.0) - 2_460_676.5).abs() < 1e-9);
        assert!((calendar_to_jd(2031, 12, 31.0) - 2_463_231.5).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_whole_days() {
        for &(y, m, d) in &[(2025, 1, 1), (2028, 2, 29), (2031, 12, 31), (1969, 7, 20)] {
            let jd = calendar_to_jd(y, m, d as f64);
            let (ry, rm, rd) = jd_to_calendar(jd);
            assert_eq!((ry, rm), (y, m));
            assert!((rd - d as f64).abs() < 1e-9, "{y}-{m}-{d} -> {rd}");
        }
    }

    #[test]
    fn roundtrip_fractional_day() {
        let jd = calendar_to_jd(2026, 6, 15.73);
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2026, 6));
        assert!((d - 15.73).abs() < 1e-8);
    }

    #[test]
    fn jd_to_calendar_noon() {
        let (y, m, d) = jd_to_calendar(J2000_JD);
        assert_eq!((y, m), (2000, 1));
        assert!((d - 1.5).abs() < 1e-9);
    }
}
