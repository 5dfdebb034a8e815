//! Zodiac sign classification.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 degrees.

/// The 12 zodiac signs in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Longitude of the sign's start boundary in degrees.
    pub const fn boundary_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

/// Determine the sign containing an ecliptic longitude.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60),
/// and so on. Input outside [0, 360) is normalised first.
pub fn sign_from_longitude(lon_deg: f64) -> Sign {
    let lon = lon_deg.rem_euclid(360.0);
    let idx = (lon / 30.0).floor() as u8;
    // Floating point can land exactly on 360.0 after normalisation.
    ALL_SIGNS[idx.min(11) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn boundaries_are_multiples_of_30() {
        for s in ALL_SIGNS {
            assert!((s.boundary_deg() - s.index() as f64 * 30.0).abs() < 1e-12);
        }
    }

    #[test]
    fn boundary_longitudes() {
        for i in 0..12u8 {
            let sign = sign_from_longitude(i as f64 * 30.0);
            assert_eq!(sign.index(), i, "boundary at {} deg", i as f64 * 30.0);
        }
    }

    #[test]
    fn mid_sign() {
        assert_eq!(sign_from_longitude(45.5), Sign::Taurus);
        assert_eq!(sign_from_longitude(359.9), Sign::Pisces);
    }

    #[test]
    fn wraps_and_negatives() {
        assert_eq!(sign_from_longitude(365.0), Sign::Aries);
        assert_eq!(sign_from_longitude(-10.0), Sign::Pisces);
        assert_eq!(sign_from_longitude(-360.0), Sign::Aries);
    }

    #[test]
    fn index_always_in_range() {
        let mut lon = -720.0;
        while lon <= 720.0 {
            let idx = sign_from_longitude(lon).index();
            assert!(idx <= 11, "lon {lon} -> index {idx}");
            lon += 0.25;
        }
    }
}
