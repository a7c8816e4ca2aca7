//! Directional light orientation from solar angles, with time-based smoothing.
//!
//! Convention: +Y is up and a light shines along its local +Z axis. The
//! rotation is a heading about +Y (the azimuth) composed with an elevation
//! about +X (the altitude), so a sun above the horizon tilts the light's
//! forward axis downward.

use crate::core::types::{EulerRot, Quat, Vec3};

use crate::solar::SolarAngles;

/// Rotation that points a directional light along the sun's rays.
pub fn sun_rotation(angles: &SolarAngles) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        (angles.azimuth as f32).to_radians(),
        (angles.altitude as f32).to_radians(),
        0.0,
    )
}

/// Direction the light travels for a given rotation (unit length).
#[inline]
pub fn light_direction(rotation: Quat) -> Vec3 {
    (rotation * Vec3::Z).normalize()
}

/// Unit vector from the scene toward the sun.
#[inline]
pub fn sun_direction(rotation: Quat) -> Vec3 {
    -light_direction(rotation)
}

/// Next orientation on the way from `previous` to `target`.
///
/// Without lerp this snaps straight to `target`. With lerp it slerps by
/// `elapsed_seconds * lerp_speed`, clamped to `[0, 1]`: the step scales with
/// wall time, so the approach is the same at any tick rate and never
/// overshoots.
pub fn advance(previous: Quat, target: Quat, elapsed_seconds: f32, lerp_enabled: bool, lerp_speed: f32) -> Quat {
    if !lerp_enabled {
        return target;
    }

    let t = elapsed_seconds * lerp_speed;
    if t.is_nan() || t <= 0.0 {
        return previous;
    }
    if t >= 1.0 {
        return target;
    }

    previous.slerp(target, t).normalize()
}

/// Owns the current output orientation and advances it once per tick.
#[derive(Clone, Debug)]
pub struct OrientationSmoother {
    current: Quat,
    lerp_enabled: bool,
    lerp_speed: f32,
}

impl OrientationSmoother {
    /// Start from the identity rotation. With lerp enabled the first ticks
    /// settle from identity toward the sun.
    pub fn new(lerp_enabled: bool, lerp_speed: f32) -> Self {
        Self {
            current: Quat::IDENTITY,
            lerp_enabled,
            lerp_speed,
        }
    }

    /// Advance toward `target` and return the new current orientation.
    pub fn advance(&mut self, target: Quat, elapsed_seconds: f32) -> Quat {
        self.current = advance(self.current, target, elapsed_seconds, self.lerp_enabled, self.lerp_speed);
        self.current
    }

    #[inline]
    pub fn current(&self) -> Quat {
        self.current
    }

    /// Replace the current orientation without smoothing.
    pub fn reset(&mut self, orientation: Quat) {
        self.current = orientation.normalize();
    }

    pub fn set_lerp(&mut self, enabled: bool, speed: f32) {
        self.lerp_enabled = enabled;
        self.lerp_speed = speed;
    }

    #[inline]
    pub fn lerp_enabled(&self) -> bool {
        self.lerp_enabled
    }

    #[inline]
    pub fn lerp_speed(&self) -> f32 {
        self.lerp_speed
    }
}

impl Default for OrientationSmoother {
    fn default() -> Self {
        Self::new(true, 2.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
