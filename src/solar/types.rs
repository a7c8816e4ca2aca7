//! Observer position and solar angle value types.

use crate::core::{Error, Result};

/// Observer position on the Earth's surface, in degrees.
///
/// Positive latitude is north, positive longitude is east.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Creates a position, rejecting values outside the valid ranges.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or
    /// non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude { value: longitude });
        }
        Ok(Self { latitude, longitude })
    }

    /// Creates a position, clamping each coordinate into its valid range.
    /// Non-finite coordinates become 0.
    pub fn clamped(latitude: f64, longitude: f64) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            latitude: finite_or_zero(latitude).clamp(-90.0, 90.0),
            longitude: finite_or_zero(longitude).clamp(-180.0, 180.0),
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Apparent direction of the sun for an observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarAngles {
    /// Elevation above the horizon in degrees, `[-90, 90]`.
    pub altitude: f64,
    /// Compass bearing in degrees from north through east, `[0, 360)`.
    pub azimuth: f64,
}

impl SolarAngles {
    /// Whether the sun's center is above the horizon.
    #[inline]
    pub fn is_daylight(&self) -> bool {
        self.altitude > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_bounds() {
        let pos = GeoPosition::new(-90.0, 180.0).unwrap();
        assert_eq!(pos.latitude(), -90.0);
        assert_eq!(pos.longitude(), 180.0);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(
            GeoPosition::new(91.0, 0.0),
            Err(Error::InvalidLatitude { value }) if value == 91.0
        ));
        assert!(matches!(
            GeoPosition::new(0.0, -180.5),
            Err(Error::InvalidLongitude { .. })
        ));
        assert!(GeoPosition::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_clamped() {
        let pos = GeoPosition::clamped(120.0, -200.0);
        assert_eq!(pos.latitude(), 90.0);
        assert_eq!(pos.longitude(), -180.0);

        let pos = GeoPosition::clamped(f64::NAN, f64::INFINITY);
        assert_eq!(pos.latitude(), 0.0);
        assert_eq!(pos.longitude(), 0.0);
    }
}
