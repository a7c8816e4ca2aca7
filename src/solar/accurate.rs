//! Julian-day based solar position (NOAA / Meeus low-order series).
//!
//! Accuracy is roughly a hundredth of a degree for dates within a few
//! centuries of J2000, which is far below anything visible on a light.

use chrono::NaiveDateTime;

use crate::math::{
    asin_deg, cos_deg, normalize_degrees_0_to_360, polynomial, sin_deg, tan_deg, wrap_degrees_180,
};
use crate::solar::horizon::horizontal_coordinates;
use crate::solar::julian::{decimal_hour, julian_century, julian_day};
use crate::solar::types::{GeoPosition, SolarAngles};

/// Minutes in a day.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Intermediate quantities of the solar series for one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarEphemeris {
    pub julian_day: f64,
    pub julian_century: f64,
    /// Geometric mean longitude of the sun, degrees `[0, 360)`.
    pub mean_longitude: f64,
    /// Geometric mean anomaly of the sun, degrees `[0, 360)`.
    pub mean_anomaly: f64,
    /// Eccentricity of Earth's orbit.
    pub eccentricity: f64,
    /// Apparent ecliptic longitude, degrees.
    pub apparent_longitude: f64,
    /// Corrected obliquity of the ecliptic, degrees.
    pub obliquity: f64,
    /// Solar declination, degrees.
    pub declination: f64,
    /// Equation of time, minutes.
    pub equation_of_time: f64,
}

impl SolarEphemeris {
    /// Evaluates the series for a Julian day.
    pub fn from_julian_day(jd: f64) -> Self {
        let t = julian_century(jd);

        let mean_longitude = normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t));
        let mean_anomaly = normalize_degrees_0_to_360(polynomial(&[357.52911, 35999.05029, -0.0001537], t));
        let eccentricity = polynomial(&[0.016708634, -0.000042037, -0.0000001267], t);

        let equation_of_center = sin_deg(mean_anomaly) * polynomial(&[1.914602, -0.004817, -0.000014], t)
            + sin_deg(2.0 * mean_anomaly) * polynomial(&[0.019993, -0.000101], t)
            + sin_deg(3.0 * mean_anomaly) * 0.000289;

        let true_longitude = mean_longitude + equation_of_center;
        // Longitude of the ascending node of the moon's orbit
        let omega = 125.04 - 1934.136 * t;
        let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin_deg(omega);

        let mean_obliquity = 23.0 + (26.0 + polynomial(&[21.448, -46.815, -0.00059, 0.001813], t) / 60.0) / 60.0;
        let obliquity = mean_obliquity + 0.00256 * cos_deg(omega);

        let declination = asin_deg(sin_deg(obliquity) * sin_deg(apparent_longitude));
        let equation_of_time = equation_of_time(mean_longitude, mean_anomaly, eccentricity, obliquity);

        Self {
            julian_day: jd,
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            eccentricity,
            apparent_longitude,
            obliquity,
            declination,
            equation_of_time,
        }
    }

    /// Evaluates the series for a civil date-time.
    pub fn from_date_time(date_time: &NaiveDateTime) -> Self {
        Self::from_julian_day(julian_day(date_time))
    }
}

/// Equation of time in minutes (Smart's five-term expansion).
fn equation_of_time(mean_longitude: f64, mean_anomaly: f64, eccentricity: f64, obliquity: f64) -> f64 {
    let y = tan_deg(obliquity / 2.0).powi(2);
    let l2 = (2.0 * mean_longitude).to_radians();
    let m = mean_anomaly.to_radians();

    let radians = y * l2.sin() - 2.0 * eccentricity * m.sin()
        + 4.0 * eccentricity * y * m.sin() * l2.cos()
        - 0.5 * y * y * (2.0 * l2).sin()
        - 1.25 * eccentricity * eccentricity * (2.0 * m).sin();

    4.0 * radians.to_degrees()
}

/// Hour angle in degrees `(-180, 180]` from the clock hour, equation of time
/// (minutes) and longitude (degrees east).
pub fn hour_angle(decimal_hour: f64, equation_of_time: f64, longitude: f64) -> f64 {
    let true_solar_time = (decimal_hour * 60.0 + equation_of_time + 4.0 * longitude).rem_euclid(MINUTES_PER_DAY);
    wrap_degrees_180(true_solar_time / 4.0 - 180.0)
}

/// Solar altitude and azimuth for an observer at a civil date-time.
pub fn solar_angles(date_time: &NaiveDateTime, position: &GeoPosition) -> SolarAngles {
    let ephemeris = SolarEphemeris::from_date_time(date_time);
    let hour_angle = hour_angle(decimal_hour(date_time), ephemeris.equation_of_time, position.longitude());
    horizontal_coordinates(position.latitude(), ephemeris.declination, hour_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .unwrap()
    }

    fn paris() -> GeoPosition {
        GeoPosition::new(48.8566, 2.3522).unwrap()
    }

    #[test]
    fn test_paris_summer_solstice_noon() {
        let angles = solar_angles(&at(2024, 6, 21, 12, 0), &paris());
        // Maximum for this latitude is 90 - 48.86 + 23.44 = 64.58
        assert!((angles.altitude - 64.0).abs() < 2.0, "altitude = {}", angles.altitude);
        assert!((angles.azimuth - 180.0).abs() < 10.0, "azimuth = {}", angles.azimuth);
    }

    #[test]
    fn test_paris_winter_midnight_is_night() {
        let angles = solar_angles(&at(2024, 12, 21, 0, 0), &paris());
        assert!(angles.altitude < 0.0, "altitude = {}", angles.altitude);
        assert!(!angles.is_daylight());
    }

    #[test]
    fn test_tropic_of_cancer_zenith() {
        let tropic = GeoPosition::new(23.44, 0.0).unwrap();
        let angles = solar_angles(&at(2024, 6, 21, 12, 0), &tropic);
        assert!(angles.altitude > 88.5, "altitude = {}", angles.altitude);
    }

    #[test]
    fn test_declination_at_solstices() {
        let june = SolarEphemeris::from_date_time(&at(2024, 6, 20, 21, 0));
        let december = SolarEphemeris::from_date_time(&at(2024, 12, 21, 9, 0));
        assert!((june.declination - 23.44).abs() < 0.05, "dec = {}", june.declination);
        assert!((december.declination + 23.44).abs() < 0.05, "dec = {}", december.declination);
    }

    #[test]
    fn test_yearly_ranges() {
        let start = at(2024, 1, 1, 12, 0);
        for day in 0..366 {
            let eph = SolarEphemeris::from_date_time(&(start + Duration::days(day)));
            assert!(eph.declination.abs() <= 23.45, "day {day}: dec = {}", eph.declination);
            assert!(eph.equation_of_time.abs() <= 17.0, "day {day}: eot = {}", eph.equation_of_time);
            assert!((0.0..360.0).contains(&eph.mean_longitude));
            assert!((0.0..360.0).contains(&eph.mean_anomaly));
        }
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // Early November peak of about +16.4 minutes, mid-February trough of about -14.2
        let november = SolarEphemeris::from_date_time(&at(2024, 11, 3, 12, 0));
        let february = SolarEphemeris::from_date_time(&at(2024, 2, 11, 12, 0));
        assert!((november.equation_of_time - 16.4).abs() < 0.3, "eot = {}", november.equation_of_time);
        assert!((february.equation_of_time + 14.2).abs() < 0.3, "eot = {}", february.equation_of_time);
    }

    #[test]
    fn test_hour_angle_range_and_sign() {
        assert!((hour_angle(12.0, 0.0, 0.0)).abs() < 1e-12);
        assert!(hour_angle(15.0, 0.0, 0.0) > 0.0);
        assert!(hour_angle(9.0, 0.0, 0.0) < 0.0);
        // Far west at midnight UTC still lands in range
        let ha = hour_angle(0.0, -10.0, -180.0);
        assert!(ha > -180.0 && ha <= 180.0, "ha = {ha}");
    }

    #[test]
    fn test_sun_rises_in_east_sets_in_west() {
        let morning = solar_angles(&at(2024, 3, 20, 7, 0), &paris());
        let evening = solar_angles(&at(2024, 3, 20, 17, 0), &paris());
        assert!(morning.azimuth > 45.0 && morning.azimuth < 180.0, "az = {}", morning.azimuth);
        assert!(evening.azimuth > 180.0 && evening.azimuth < 315.0, "az = {}", evening.azimuth);
    }

    #[test]
    fn test_angles_in_range_everywhere() {
        let instants = [at(1950, 1, 1, 0, 0), at(2024, 6, 21, 12, 0), at(2024, 9, 22, 18, 30), at(2099, 12, 31, 23, 59)];
        for instant in instants {
            for lat in [-90.0, -66.5, -23.44, 0.0, 23.44, 48.8566, 90.0] {
                for lon in [-180.0, -90.0, 0.0, 2.3522, 135.0, 180.0] {
                    let angles = solar_angles(&instant, &GeoPosition::new(lat, lon).unwrap());
                    assert!((-90.0..=90.0).contains(&angles.altitude), "{instant} {lat} {lon}: {angles:?}");
                    assert!((0.0..360.0).contains(&angles.azimuth), "{instant} {lat} {lon}: {angles:?}");
                }
            }
        }
    }

    #[test]
    fn test_pole_is_finite_all_day() {
        let pole = GeoPosition::new(90.0, 0.0).unwrap();
        let start = at(2024, 6, 21, 0, 0);
        for minute in (0..1440).step_by(17) {
            let angles = solar_angles(&(start + Duration::minutes(minute)), &pole);
            assert!(angles.altitude.is_finite() && angles.azimuth.is_finite());
            // Polar day: the sun circles at roughly the declination
            assert!((angles.altitude - 23.44).abs() < 0.1, "alt = {}", angles.altitude);
        }
    }
}
