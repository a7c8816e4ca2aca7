//! The DaySync driver.
//!
//! [`DaySync`] wires an injected [`Clock`] and an injected [`LightTarget`] to
//! the solar engine and the orientation smoother. The host calls
//! [`tick`](DaySync::tick) at whatever cadence it likes with the wall time
//! elapsed since the previous call.
//!
//! `tick` takes `&mut self`, so all writes to the smoothed orientation go
//! through a single owner. Hosts that tick from several threads must wrap the
//! driver in a lock themselves.

use chrono::NaiveDateTime;

use crate::clock::{self, Clock};
use crate::config::DaySyncConfig;
use crate::core::Error;
use crate::core::types::{Quat, Vec3};
use crate::orientation::{self, OrientationSmoother};
use crate::solar::SolarAngles;

/// Something that can be rotated to follow the sun, such as a directional
/// light's transform.
pub trait LightTarget {
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
}

impl<T: LightTarget + ?Sized> LightTarget for &mut T {
    fn rotation(&self) -> Quat {
        (**self).rotation()
    }

    fn set_rotation(&mut self, rotation: Quat) {
        (**self).set_rotation(rotation);
    }
}

/// Minimal rotation-only transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }
}

impl LightTarget for Transform {
    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}

/// Everything produced by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaySyncState {
    /// Civil time the sun was computed for.
    pub time: NaiveDateTime,
    /// Sun position for `time`.
    pub angles: SolarAngles,
    /// Rotation matching the sun exactly.
    pub target: Quat,
    /// Smoothed rotation written to the light target.
    pub orientation: Quat,
}

impl DaySyncState {
    /// Direction the light travels with the smoothed orientation.
    #[inline]
    pub fn light_direction(&self) -> Vec3 {
        orientation::light_direction(self.orientation)
    }

    #[inline]
    pub fn is_daylight(&self) -> bool {
        self.angles.is_daylight()
    }
}

/// Drives a light target from a clock, once per tick.
pub struct DaySync<C: Clock, T: LightTarget> {
    config: DaySyncConfig,
    clock: C,
    target: Option<T>,
    smoother: OrientationSmoother,
    disabled: Option<Error>,
    state: Option<DaySyncState>,
}

impl<C: Clock, T: LightTarget> DaySync<C, T> {
    /// Create a driver. The configuration is sanitized.
    ///
    /// Without a target the driver disables itself: the condition is logged
    /// once here and every later [`tick`](Self::tick) does nothing.
    pub fn new(config: DaySyncConfig, clock: C, target: Option<T>) -> Self {
        let config = config.sanitized();
        let smoother = OrientationSmoother::new(config.lerp, config.lerp_speed);

        let disabled = if target.is_none() {
            let err = Error::MissingOutputTarget;
            log::error!("[DaySync] {err}");
            Some(err)
        } else {
            log::info!(
                "[DaySync] tracking sun at {:.4}, {:.4} ({:?} clock, {:?})",
                config.latitude,
                config.longitude,
                config.time_source,
                config.algorithm
            );
            None
        };

        Self {
            config,
            clock,
            target,
            smoother,
            disabled,
            state: None,
        }
    }

    /// Recompute the sun for the current time and advance the light target.
    ///
    /// Returns the new state, or `None` when the driver is disabled.
    pub fn tick(&mut self, elapsed_seconds: f32) -> Option<DaySyncState> {
        if self.disabled.is_some() {
            return None;
        }

        let time = self.current_time();
        let angles = self.config.algorithm.solar_angles(&time, &self.config.geo_position());
        let target_rotation = orientation::sun_rotation(&angles);
        let smoothed = self.smoother.advance(target_rotation, elapsed_seconds);

        let target = self.target.as_mut()?;
        target.set_rotation(smoothed);

        log::trace!(
            "[DaySync] {time}: alt {:.2}, az {:.2}",
            angles.altitude,
            angles.azimuth
        );

        let state = DaySyncState {
            time,
            angles,
            target: target_rotation,
            orientation: smoothed,
        };
        self.state = Some(state);
        Some(state)
    }

    /// Civil time for the configured time source.
    pub fn current_time(&self) -> NaiveDateTime {
        clock::current_time(&self.clock, self.config.time_source, self.config.utc_offset_hours)
    }

    /// Operator display of the current time, e.g. `14:05:09 (UTC+2)`.
    pub fn time_label(&self) -> String {
        clock::time_label(&self.current_time(), self.config.utc_offset_hours)
    }

    #[inline]
    pub fn config(&self) -> &DaySyncConfig {
        &self.config
    }

    /// Replace the configuration. It is sanitized, and lerp settings apply
    /// from the next tick without resetting the current orientation.
    pub fn set_config(&mut self, config: DaySyncConfig) {
        self.config = config.sanitized();
        self.smoother.set_lerp(self.config.lerp, self.config.lerp_speed);
    }

    /// State from the most recent tick.
    #[inline]
    pub fn state(&self) -> Option<&DaySyncState> {
        self.state.as_ref()
    }

    #[inline]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.disabled.is_none()
    }

    /// Why the driver disabled itself, if it did.
    #[inline]
    pub fn disabled_reason(&self) -> Option<&Error> {
        self.disabled.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
