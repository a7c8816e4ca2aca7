//! Solar position engine.
//!
//! Maps a civil date-time and an observer position to the sun's altitude and
//! azimuth. Every call is pure: nothing is cached between evaluations, so the
//! angles always reflect exactly the timestamp passed in.
//!
//! Two algorithms are available through [`SolarAlgorithm`]:
//! - [`accurate`]: Julian day series with equation of time (default)
//! - [`simplified`]: day-of-year fit with an optional elevation gain

pub mod accurate;
pub mod horizon;
pub mod julian;
pub mod simplified;
pub mod types;

// Re-exports
pub use accurate::SolarEphemeris;
pub use horizon::horizontal_coordinates;
pub use julian::{julian_century, julian_day};
pub use types::{GeoPosition, SolarAngles};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which solar position formulation to evaluate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolarAlgorithm {
    /// Julian-day series with equation of time. Physically accurate.
    #[default]
    AccurateAstronomical,
    /// Day-of-year approximation. `elevation_gain` scales the altitude for
    /// stylized lighting and has no physical meaning; 1.0 disables it.
    SimplifiedApproximate { elevation_gain: f64 },
}

impl SolarAlgorithm {
    /// Simplified variant with the default elevation gain.
    pub fn simplified() -> Self {
        Self::SimplifiedApproximate {
            elevation_gain: simplified::DEFAULT_ELEVATION_GAIN,
        }
    }

    /// Compute solar angles with this algorithm.
    pub fn solar_angles(&self, date_time: &NaiveDateTime, position: &GeoPosition) -> SolarAngles {
        match *self {
            Self::AccurateAstronomical => accurate::solar_angles(date_time, position),
            Self::SimplifiedApproximate { elevation_gain } => {
                simplified::solar_angles(date_time, position, elevation_gain)
            }
        }
    }
}

/// Compute solar angles with the accurate algorithm.
///
/// The date-time is taken as a naive civil time; any time zone offset must
/// already be applied by the caller.
#[inline]
pub fn compute_solar_angles(date_time: &NaiveDateTime, position: &GeoPosition) -> SolarAngles {
    accurate::solar_angles(date_time, position)
}
