//! Day-of-year solar approximation.
//!
//! A cosine fit for the declination and a clock-based hour angle without the
//! equation of time. Errors reach a few degrees, which is fine for stylized
//! lighting. The altitude can be stretched by an elevation gain: that is a
//! visual tuning knob for deeper nights, not a physical quantity.

use chrono::{Datelike, NaiveDateTime};

use crate::math::{cos_deg, wrap_degrees_180};
use crate::solar::horizon::horizontal_coordinates;
use crate::solar::julian::decimal_hour;
use crate::solar::types::{GeoPosition, SolarAngles};

/// Elevation gain used when none is configured.
pub const DEFAULT_ELEVATION_GAIN: f64 = 1.5;

/// Axial tilt used by the declination fit, degrees.
const AXIAL_TILT: f64 = 23.44;

/// Approximate declination in degrees for a 1-based day of the year.
pub fn declination(day_of_year: u32) -> f64 {
    -AXIAL_TILT * cos_deg(360.0 / 365.0 * (f64::from(day_of_year) + 10.0))
}

/// Solar altitude and azimuth, with the altitude multiplied by
/// `elevation_gain` and clamped to `[-90, 90]`.
///
/// The azimuth is derived from the unscaled altitude.
pub fn solar_angles(date_time: &NaiveDateTime, position: &GeoPosition, elevation_gain: f64) -> SolarAngles {
    let declination = declination(date_time.ordinal());
    let solar_hour = decimal_hour(date_time) + position.longitude() / 15.0;
    let hour_angle = wrap_degrees_180(15.0 * (solar_hour - 12.0));

    let physical = horizontal_coordinates(position.latitude(), declination, hour_angle);
    SolarAngles {
        altitude: (physical.altitude * elevation_gain).clamp(-90.0, 90.0),
        azimuth: physical.azimuth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::accurate;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_declination_extremes() {
        // Day 172 is June 21 in a common year, day 355 is December 21
        assert!((declination(172) - 23.44).abs() < 0.05);
        assert!((declination(355) + 23.44).abs() < 0.05);
        assert!(declination(80).abs() < 1.5, "equinox dec = {}", declination(80));
    }

    #[test]
    fn test_unit_gain_tracks_accurate_at_noon() {
        let paris = GeoPosition::new(48.8566, 2.3522).unwrap();
        let instant = at(2024, 6, 21, 12);
        let simple = solar_angles(&instant, &paris, 1.0);
        let precise = accurate::solar_angles(&instant, &paris);
        assert!((simple.altitude - precise.altitude).abs() < 2.0, "{simple:?} vs {precise:?}");
        assert!((simple.azimuth - precise.azimuth).abs() < 5.0, "{simple:?} vs {precise:?}");
    }

    #[test]
    fn test_gain_deepens_night_and_stays_in_range() {
        let paris = GeoPosition::new(48.8566, 2.3522).unwrap();
        let midnight = at(2024, 12, 21, 0);
        let plain = solar_angles(&midnight, &paris, 1.0);
        let amplified = solar_angles(&midnight, &paris, DEFAULT_ELEVATION_GAIN);
        assert!(amplified.altitude < plain.altitude);
        assert_eq!(amplified.altitude, (plain.altitude * DEFAULT_ELEVATION_GAIN).max(-90.0));
        assert_eq!(amplified.azimuth, plain.azimuth);

        for gain in [0.0, 0.5, 1.5, 3.0, 10.0] {
            for hour in 0..24 {
                let angles = solar_angles(&at(2024, 6, 21, hour), &paris, gain);
                assert!((-90.0..=90.0).contains(&angles.altitude));
                assert!((0.0..360.0).contains(&angles.azimuth));
            }
        }
    }
}
