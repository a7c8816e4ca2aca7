//! DaySync live driver: follows the real sun with the system clock.
//!
//! Usage: cargo run --bin daysync -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   JSON configuration file (default: built-in defaults)
//!   --lat <DEG>       Override latitude
//!   --lon <DEG>       Override longitude
//!   --reference       Use the UTC reference clock instead of local time
//!   --offset <H>      UTC offset in hours for the reference clock
//!   --hz <RATE>       Ticks per second (default: 1)
//!   --ticks <N>       Stop after N ticks (default: run forever)
//!   --save <PATH>     Write the effective configuration to PATH and exit

use std::path::PathBuf;
use std::time::Duration;

use daysync::clock::{SystemClock, TimeSourceMode};
use daysync::config::DaySyncConfig;
use daysync::core::{logging, time::TickTimer};
use daysync::system::{DaySync, Transform};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => match DaySyncConfig::load(&PathBuf::from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                std::process::exit(1);
            }
        },
        None => DaySyncConfig::default(),
    };

    if let Some(lat) = parse_f64_arg(&args, "--lat") {
        config.latitude = lat;
    }
    if let Some(lon) = parse_f64_arg(&args, "--lon") {
        config.longitude = lon;
    }
    if args.iter().any(|a| a == "--reference") {
        config.time_source = TimeSourceMode::Reference;
    }
    if let Some(offset) = parse_i32_arg(&args, "--offset") {
        config.utc_offset_hours = offset;
    }
    if let Err(e) = config.validate() {
        log::warn!("{e}; out-of-range values will be clamped");
    }

    if let Some(path) = parse_str_arg(&args, "--save") {
        match config.sanitized().save(&PathBuf::from(&path)) {
            Ok(()) => println!("Saved configuration to {path}"),
            Err(e) => {
                log::error!("Failed to save {path}: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let hz = parse_f64_arg(&args, "--hz").filter(|hz| *hz > 0.0).unwrap_or(1.0);
    let max_ticks = parse_u64_arg(&args, "--ticks");
    let interval = Duration::from_secs_f64(1.0 / hz);

    let mut sync = DaySync::new(config, SystemClock, Some(Transform::default()));
    let mut timer = TickTimer::new();

    loop {
        std::thread::sleep(interval);
        let dt = timer.tick();

        let Some(state) = sync.tick(dt) else {
            break;
        };

        let dir = state.light_direction();
        log::info!(
            "{}  alt {:6.2}  az {:6.2}  light [{:+.3}, {:+.3}, {:+.3}]",
            sync.time_label(),
            state.angles.altitude,
            state.angles.azimuth,
            dir.x,
            dir.y,
            dir.z
        );

        if max_ticks.is_some_and(|max| timer.tick_count() >= max) {
            break;
        }
    }
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
