//! Equatorial to horizontal coordinate transform shared by every algorithm.

use crate::math::{acos_deg, asin_deg, cos_deg, normalize_degrees_0_to_360, sin_deg};
use crate::solar::types::SolarAngles;

/// Below this, `cos(latitude) * cos(altitude)` is treated as zero and the
/// azimuth formula is not evaluated.
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Altitude and azimuth of a body with the given declination and hour angle.
///
/// All angles in degrees. The hour angle is positive west of the meridian
/// (afternoon). Inverse trig arguments are clamped, and at the poles or with
/// the sun at zenith/nadir the azimuth falls back to `180 + hour_angle`, so the
/// result is finite for every finite input.
pub fn horizontal_coordinates(latitude: f64, declination: f64, hour_angle: f64) -> SolarAngles {
    let sin_lat = sin_deg(latitude);
    let cos_lat = cos_deg(latitude);
    let sin_dec = sin_deg(declination);
    let cos_dec = cos_deg(declination);

    let sin_alt = (sin_lat * sin_dec + cos_lat * cos_dec * cos_deg(hour_angle)).clamp(-1.0, 1.0);
    let altitude = asin_deg(sin_alt);

    let denominator = cos_lat * cos_deg(altitude);
    let azimuth = if denominator.abs() < DEGENERATE_EPSILON {
        180.0 + hour_angle
    } else {
        let azimuth = acos_deg((sin_dec - sin_lat * sin_alt) / denominator);
        if hour_angle > 0.0 { 360.0 - azimuth } else { azimuth }
    };

    SolarAngles {
        altitude,
        azimuth: normalize_degrees_0_to_360(azimuth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_equinox_noon_is_zenith() {
        let angles = horizontal_coordinates(0.0, 0.0, 0.0);
        assert!((angles.altitude - 90.0).abs() < 1e-9);
        assert!((0.0..360.0).contains(&angles.azimuth));
    }

    #[test]
    fn test_meridian_transit_faces_south() {
        // Northern mid-latitude, sun south of zenith at transit
        let angles = horizontal_coordinates(45.0, 10.0, 0.0);
        assert!((angles.altitude - 55.0).abs() < 1e-9);
        assert!((angles.azimuth - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_morning_east_afternoon_west() {
        let morning = horizontal_coordinates(45.0, 0.0, -45.0);
        let afternoon = horizontal_coordinates(45.0, 0.0, 45.0);
        assert!(morning.azimuth < 180.0);
        assert!(afternoon.azimuth > 180.0);
        assert!((morning.altitude - afternoon.altitude).abs() < 1e-9);
        assert!((morning.azimuth + afternoon.azimuth - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_pole_is_finite() {
        for hour_angle in [-179.0, -90.0, 0.0, 45.0, 180.0] {
            for declination in [-23.44, 0.0, 23.44] {
                let north = horizontal_coordinates(90.0, declination, hour_angle);
                let south = horizontal_coordinates(-90.0, declination, hour_angle);
                for angles in [north, south] {
                    assert!(angles.altitude.is_finite() && angles.azimuth.is_finite());
                    assert!((0.0..360.0).contains(&angles.azimuth));
                }
                // At the pole the altitude equals +/- declination
                assert!((north.altitude - declination).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_midnight_below_horizon() {
        let angles = horizontal_coordinates(48.8566, -23.44, 180.0);
        assert!((angles.altitude - (48.8566 - 23.44 - 90.0)).abs() < 1e-6);
    }
}
