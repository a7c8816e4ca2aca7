//! Prints the sun's path over one day for a location.
//!
//! Usage: cargo run --bin sun_path -- [OPTIONS]
//!
//! Options:
//!   --date <YYYY-MM-DD>  Day to trace (default: today, UTC)
//!   --lat <DEG>          Latitude (default: 48.8566, Paris)
//!   --lon <DEG>          Longitude (default: 2.3522)
//!   --offset <H>         Hours added to UTC for the printed clock (default: 0)
//!   --step <MIN>         Minutes between rows (default: 60)
//!   --simplified         Use the day-of-year approximation
//!   --gain <G>           Elevation gain for the simplified algorithm

use chrono::{NaiveDate, NaiveTime, TimeDelta, Utc};

use daysync::clock::time_label;
use daysync::solar::{GeoPosition, SolarAlgorithm, SolarEphemeris};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();

    let date = match parse_str_arg(&args, "--date") {
        Some(s) => match NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                eprintln!("Invalid --date {s}: {e}");
                std::process::exit(2);
            }
        },
        None => Utc::now().date_naive(),
    };
    let latitude = parse_f64_arg(&args, "--lat").unwrap_or(48.8566);
    let longitude = parse_f64_arg(&args, "--lon").unwrap_or(2.3522);
    let offset = parse_i32_arg(&args, "--offset").unwrap_or(0).clamp(-12, 12);
    let step = parse_i64_arg(&args, "--step").filter(|s| *s > 0).unwrap_or(60);

    let algorithm = if args.iter().any(|a| a == "--simplified") {
        match parse_f64_arg(&args, "--gain") {
            Some(elevation_gain) => SolarAlgorithm::SimplifiedApproximate { elevation_gain },
            None => SolarAlgorithm::simplified(),
        }
    } else {
        SolarAlgorithm::AccurateAstronomical
    };

    let position = match GeoPosition::new(latitude, longitude) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let midnight = date.and_time(NaiveTime::default());
    let ephemeris = SolarEphemeris::from_date_time(&(midnight + TimeDelta::hours(12)));

    println!("=== Sun path ===");
    println!("Date:      {date}");
    println!("Position:  {:.4}, {:.4}", position.latitude(), position.longitude());
    println!("Algorithm: {algorithm:?}");
    println!("Declination at noon UTC: {:.3}°", ephemeris.declination);
    println!("Equation of time:        {:+.2} min", ephemeris.equation_of_time);
    println!();
    println!("{:<20} {:>9} {:>9}", "time", "altitude", "azimuth");

    let mut minutes = 0;
    while minutes < 24 * 60 {
        let utc = midnight + TimeDelta::minutes(minutes);
        let civil = utc + TimeDelta::hours(i64::from(offset));
        let angles = algorithm.solar_angles(&utc, &position);
        let marker = if angles.is_daylight() { "" } else { "  (night)" };
        println!(
            "{:<20} {:>9.2} {:>9.2}{marker}",
            time_label(&civil, offset),
            angles.altitude,
            angles.azimuth
        );
        minutes += step;
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

fn parse_i64_arg(args: &[String], flag: &str) -> Option<i64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
