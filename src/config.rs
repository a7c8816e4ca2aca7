//! DaySync configuration.
//!
//! The configuration is owned by whatever settings surface hosts the driver.
//! Out-of-range values are clamped to the nearest bound (with a warning) rather
//! than rejected, so a bad file never stops the sun.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clock::TimeSourceMode;
use crate::core::{Error, Result};
use crate::solar::simplified::DEFAULT_ELEVATION_GAIN;
use crate::solar::{GeoPosition, SolarAlgorithm};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const UTC_OFFSET_RANGE: RangeInclusive<i32> = -12..=12;
pub const LERP_SPEED_RANGE: RangeInclusive<f32> = 0.1..=10.0;
/// Bounds for the simplified algorithm's cosmetic elevation gain.
pub const ELEVATION_GAIN_RANGE: RangeInclusive<f64> = 0.0..=4.0;

/// Full DaySync configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaySyncConfig {
    /// Local wall clock or shared reference clock.
    pub time_source: TimeSourceMode,
    /// Whole hours added to the reference clock. Ignored in local mode.
    ///
    /// The shifted time is what the solar engine sees, so with a nonzero
    /// offset the sun is shifted by that many hours from its UTC position.
    pub utc_offset_hours: i32,
    /// Degrees, positive north.
    pub latitude: f64,
    /// Degrees, positive east.
    pub longitude: f64,
    /// Smoothly interpolate toward the sun instead of snapping.
    pub lerp: bool,
    /// Interpolation rate; fraction of the remaining angle covered per second.
    pub lerp_speed: f32,
    /// Solar position formulation.
    pub algorithm: SolarAlgorithm,
}

impl Default for DaySyncConfig {
    fn default() -> Self {
        Self {
            time_source: TimeSourceMode::Local,
            utc_offset_hours: 0,
            latitude: 48.8566, // Paris
            longitude: 2.3522,
            lerp: true,
            lerp_speed: 2.0,
            algorithm: SolarAlgorithm::AccurateAstronomical,
        }
    }
}

impl DaySyncConfig {
    /// Returns a copy with every field clamped into its valid range.
    ///
    /// Non-finite numbers fall back to the defaults. Each adjusted field is
    /// reported with `log::warn!`.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();

        let algorithm = match self.algorithm {
            SolarAlgorithm::SimplifiedApproximate { elevation_gain } => SolarAlgorithm::SimplifiedApproximate {
                elevation_gain: clamp_float("elevation_gain", elevation_gain, DEFAULT_ELEVATION_GAIN, &ELEVATION_GAIN_RANGE),
            },
            other => other,
        };

        Self {
            time_source: self.time_source,
            utc_offset_hours: clamp_field("utc_offset_hours", self.utc_offset_hours, &UTC_OFFSET_RANGE),
            latitude: clamp_float("latitude", self.latitude, defaults.latitude, &LATITUDE_RANGE),
            longitude: clamp_float("longitude", self.longitude, defaults.longitude, &LONGITUDE_RANGE),
            lerp: self.lerp,
            lerp_speed: clamp_float("lerp_speed", self.lerp_speed, defaults.lerp_speed, &LERP_SPEED_RANGE),
            algorithm,
        }
    }

    /// Checks every field without modifying anything.
    ///
    /// # Errors
    /// Reports the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        GeoPosition::new(self.latitude, self.longitude)?;
        if !UTC_OFFSET_RANGE.contains(&self.utc_offset_hours) {
            return Err(Error::Config(format!(
                "utc_offset_hours {} outside {:?}",
                self.utc_offset_hours, UTC_OFFSET_RANGE
            )));
        }
        if !LERP_SPEED_RANGE.contains(&self.lerp_speed) {
            return Err(Error::Config(format!(
                "lerp_speed {} outside {:?}",
                self.lerp_speed, LERP_SPEED_RANGE
            )));
        }
        if let SolarAlgorithm::SimplifiedApproximate { elevation_gain } = self.algorithm {
            if !ELEVATION_GAIN_RANGE.contains(&elevation_gain) {
                return Err(Error::Config(format!(
                    "elevation_gain {elevation_gain} outside {ELEVATION_GAIN_RANGE:?}"
                )));
            }
        }
        Ok(())
    }

    /// Observer position, clamped into range.
    pub fn geo_position(&self) -> GeoPosition {
        GeoPosition::clamped(self.latitude, self.longitude)
    }

    /// Parse a JSON configuration. Missing fields take their defaults and the
    /// result is sanitized.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Save as pretty-printed JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}

fn clamp_field<T: PartialOrd + Copy + Display>(name: &str, value: T, range: &RangeInclusive<T>) -> T {
    let clamped = if value < *range.start() {
        *range.start()
    } else if value > *range.end() {
        *range.end()
    } else {
        value
    };
    if clamped != value {
        log::warn!("{name} {value} out of range, clamped to {clamped}");
    }
    clamped
}

trait Finite: Copy {
    fn finite(self) -> bool;
}

impl Finite for f32 {
    fn finite(self) -> bool {
        self.is_finite()
    }
}

impl Finite for f64 {
    fn finite(self) -> bool {
        self.is_finite()
    }
}

fn clamp_float<T: PartialOrd + Display + Finite>(name: &str, value: T, fallback: T, range: &RangeInclusive<T>) -> T {
    if !value.finite() {
        log::warn!("{name} is not a finite number, using {fallback}");
        return fallback;
    }
    clamp_field(name, value, range)
}
