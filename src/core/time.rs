//! Tick timing for host drivers

use std::time::{Duration, Instant};

/// Measures wall time between driver ticks.
///
/// The smoother is framerate independent only if it is fed the real elapsed
/// time, so hosts call [`tick`](Self::tick) once per update and pass the
/// returned seconds on to [`crate::system::DaySync::tick`].
pub struct TickTimer {
    last_tick: Instant,
    delta: Duration,
    tick_count: u64,
    rate_timer: Instant,
    rate: f32,
    rate_tick_count: u32,
}

impl TickTimer {
    /// Create a new tick timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_tick: now,
            delta: Duration::ZERO,
            tick_count: 0,
            rate_timer: now,
            rate: 0.0,
            rate_tick_count: 0,
        }
    }

    /// Call once per tick; returns the seconds elapsed since the previous call
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now - self.last_tick;
        self.last_tick = now;
        self.tick_count += 1;
        self.rate_tick_count += 1;

        // Update tick rate every second
        let rate_elapsed = now - self.rate_timer;
        if rate_elapsed >= Duration::from_secs(1) {
            self.rate = self.rate_tick_count as f32 / rate_elapsed.as_secs_f32();
            self.rate_tick_count = 0;
            self.rate_timer = now;
        }

        self.delta.as_secs_f32()
    }

    /// Get delta time in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get delta time as Duration
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Ticks per second, refreshed once a second
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Get total tick count
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
