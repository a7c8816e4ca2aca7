//! Time sources feeding the solar engine.
//!
//! The engine only sees naive civil date-times. A [`Clock`] supplies two
//! readings: the process's local wall clock and a shared UTC reference. In
//! [`TimeSourceMode::Reference`] the configured whole-hour offset is added to
//! the UTC reading, so every consumer of the same reference clock observes the
//! same civil time.

use std::sync::Arc;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Which clock drives the sun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSourceMode {
    /// Unsynchronized wall clock of this process.
    #[default]
    Local,
    /// Shared UTC clock plus a fixed offset in hours.
    Reference,
}

/// A source of the current civil date-time.
pub trait Clock {
    /// Local wall-clock time, in whatever zone the host uses.
    fn local_now(&self) -> NaiveDateTime;

    /// Shared reference time in UTC.
    fn utc_now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn local_now(&self) -> NaiveDateTime {
        (**self).local_now()
    }

    fn utc_now(&self) -> NaiveDateTime {
        (**self).utc_now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn local_now(&self) -> NaiveDateTime {
        (**self).local_now()
    }

    fn utc_now(&self) -> NaiveDateTime {
        (**self).utc_now()
    }
}

/// Reads the operating system clock through chrono.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    fn utc_now(&self) -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }
}

/// A clock frozen at fixed readings. Useful for tests and reproducible runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    local: NaiveDateTime,
    utc: NaiveDateTime,
}

impl FixedClock {
    /// Both readings report `utc`.
    pub fn new(utc: NaiveDateTime) -> Self {
        Self { local: utc, utc }
    }

    /// Distinct local and UTC readings.
    pub fn with_local(local: NaiveDateTime, utc: NaiveDateTime) -> Self {
        Self { local, utc }
    }

    /// Move both readings by `delta`. Out-of-range results leave the clock unchanged.
    pub fn advance(&mut self, delta: TimeDelta) {
        if let (Some(local), Some(utc)) = (self.local.checked_add_signed(delta), self.utc.checked_add_signed(delta)) {
            self.local = local;
            self.utc = utc;
        }
    }
}

impl Clock for FixedClock {
    fn local_now(&self) -> NaiveDateTime {
        self.local
    }

    fn utc_now(&self) -> NaiveDateTime {
        self.utc
    }
}

/// Current civil time for the selected mode.
///
/// `utc_offset_hours` only applies in [`TimeSourceMode::Reference`].
pub fn current_time<C: Clock + ?Sized>(clock: &C, mode: TimeSourceMode, utc_offset_hours: i32) -> NaiveDateTime {
    match mode {
        TimeSourceMode::Local => clock.local_now(),
        TimeSourceMode::Reference => {
            let utc = clock.utc_now();
            utc.checked_add_signed(TimeDelta::hours(i64::from(utc_offset_hours)))
                .unwrap_or(utc)
        }
    }
}

/// Operator-facing label such as `14:05:09 (UTC+2)`.
///
/// A zero offset renders as `UTC0`.
pub fn time_label(time: &NaiveDateTime, utc_offset_hours: i32) -> String {
    let offset = match utc_offset_hours {
        0 => "0".to_string(),
        h if h > 0 => format!("+{h}"),
        h => h.to_string(),
    };
    format!("{} (UTC{offset})", time.format("%H:%M:%S"))
}
