//! DaySync - real-world sun position for directional lights
//!
//! Computes the sun's altitude and azimuth from a civil timestamp and an
//! observer position, turns them into a light orientation, and smooths that
//! orientation over wall time.
//!
//! ```no_run
//! use daysync::clock::SystemClock;
//! use daysync::config::DaySyncConfig;
//! use daysync::system::{DaySync, Transform};
//!
//! let mut sync = DaySync::new(DaySyncConfig::default(), SystemClock, Some(Transform::default()));
//! if let Some(state) = sync.tick(1.0 / 60.0) {
//!     println!("{}: altitude {:.1}", sync.time_label(), state.angles.altitude);
//! }
//! ```

pub mod core;
pub mod math;
pub mod solar;
pub mod orientation;
pub mod clock;
pub mod config;
pub mod system;
