//! Timezone-aware ISO-8601 formatting of Julian Dates.
//!
//! A Julian Date in UT is decomposed into a UTC calendar time, projected
//! into the target IANA zone via jiff's bundled tzdata, and rendered as a
//! fixed-width `YYYY-MM-DDThh:mm:ss+hh:mm` string. The offset reflects the
//! zone's rules at that instant, including seasonal changes.

use jiff::civil::DateTime;
use jiff::tz::TimeZone;

use crate::error::TimeError;
use crate::julian::jd_to_calendar;

/// Resolve an IANA timezone name (e.g. `Europe/Warsaw`).
pub fn load_zone(name: &str) -> Result<TimeZone, TimeError> {
    TimeZone::get(name).map_err(|_| TimeError::UnknownZone(name.to_string()))
}

/// Split a fractional day into whole hours, minutes, and seconds.
///
/// Rounding at the end of a day can push the total to 24:00:00; that is
/// clamped to 23:59:59 so the calendar day is preserved.
pub(crate) fn split_day_fraction(frac: f64) -> (u32, u32, u32) {
    let total_seconds = frac * 86_400.0;
    let hours = (total_seconds / 3600.0).floor() as u32;
    let minutes = ((total_seconds % 3600.0) / 60.0).floor() as u32;
    let seconds = (total_seconds % 60.0).floor() as u32;
    if hours >= 24 {
        (23, 59, 59)
    } else {
        (hours, minutes, seconds)
    }
}

/// Format a Julian Date (UT) as ISO-8601 local time in `tz`.
pub fn jd_to_iso(jd_ut: f64, tz: &TimeZone) -> Result<String, TimeError> {
    let (year, month, day_frac) = jd_to_calendar(jd_ut);
    let day = day_frac.floor() as u32;
    let (hour, minute, second) = split_day_fraction(day_frac.fract());

    let utc = DateTime::new(
        year as i16,
        month as i8,
        day as i8,
        hour as i8,
        minute as i8,
        second as i8,
        0,
    )
    .map_err(|e| TimeError::InvalidDate(e.to_string()))?;

    let zoned = utc
        .to_zoned(TimeZone::UTC)
        .map_err(|e| TimeError::InvalidDate(e.to_string()))?
        .timestamp()
        .to_zoned(tz.clone());

    let off = zoned.offset().seconds();
    let sign = if off < 0 { '-' } else { '+' };
    let off = off.abs();

    Ok(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
        zoned.year(),
        zoned.month(),
        zoned.day(),
        zoned.hour(),
        zoned.minute(),
        zoned.second(),
        sign,
        off / 3600,
        (off % 3600) / 60,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn warsaw_winter_offset() {
        let tz = load_zone("Europe/Warsaw").unwrap();
        let jd = calendar_to_jd(2025, 1, 15.5); // 12:00 UT
        let iso = jd_to_iso(jd, &tz).unwrap();
        assert_eq!(iso, "2025-01-15T13:00:00+01:00");
    }

    #[test]
    fn warsaw_summer_offset() {
        let tz = load_zone("Europe/Warsaw").unwrap();
        let jd = calendar_to_jd(2025, 7, 15.5);
        let iso = jd_to_iso(jd, &tz).unwrap();
        assert_eq!(iso, "2025-07-15T14:00:00+02:00");
    }

    #[test]
    fn utc_zone_zero_offset() {
        let jd = calendar_to_jd(2026, 3, 1.25); // 06:00 UT
        let iso = jd_to_iso(jd, &TimeZone::UTC).unwrap();
        assert_eq!(iso, "2026-03-01T06:00:00+00:00");
    }

    #[test]
    fn day_rollover_across_zone() {
        // 23:30 UT on Jan 1 is 00:30 local on Jan 2 in Warsaw.
        let tz = load_zone("Europe/Warsaw").unwrap();
        let jd = calendar_to_jd(2025, 1, 1.0) + 23.5 / 24.0;
        let iso = jd_to_iso(jd, &tz).unwrap();
        assert_eq!(iso, "2025-01-02T00:30:00+01:00");
    }

    #[test]
    fn unknown_zone_rejected() {
        assert!(matches!(
            load_zone("Mars/Olympus_Mons"),
            Err(TimeError::UnknownZone(_))
        ));
    }

    #[test]
    fn split_truncates_seconds() {
        let (h, m, s) = split_day_fraction(0.5);
        assert_eq!((h, m, s), (12, 0, 0));
        let (h, m, s) = split_day_fraction(0.999_999_4);
        assert_eq!((h, m), (23, 59));
        assert!(s <= 59);
    }

    #[test]
    fn split_clamps_full_day() {
        assert_eq!(split_day_fraction(1.0), (23, 59, 59));
    }
}
