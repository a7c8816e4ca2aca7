//! Julian day and Julian century time basis.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Hour of day as a fraction, including seconds and sub-second precision.
pub fn decimal_hour(date_time: &NaiveDateTime) -> f64 {
    let seconds = f64::from(date_time.second()) + f64::from(date_time.nanosecond()) * 1e-9;
    f64::from(date_time.hour()) + f64::from(date_time.minute()) / 60.0 + seconds / 3600.0
}

/// Civil calendar date-time to Julian day, with the Gregorian century correction.
///
/// January and February count as months 13 and 14 of the previous year.
pub fn julian_day(date_time: &NaiveDateTime) -> f64 {
    let mut year = date_time.year();
    let mut month = date_time.month() as i32;
    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = year / 100;
    let b = 2 - a + a / 4;

    (365.25 * f64::from(year + 4716)).floor()
        + (30.6001 * f64::from(month + 1)).floor()
        + f64::from(date_time.day())
        + f64::from(b)
        - 1524.5
        + decimal_hour(date_time) / 24.0
}

/// Julian centuries elapsed since J2000.0.
#[inline]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000) / DAYS_PER_CENTURY
}
