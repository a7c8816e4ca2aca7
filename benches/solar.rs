use criterion::{criterion_group, criterion_main, Criterion, black_box};

use chrono::{NaiveDate, NaiveDateTime};
use glam::Quat;

use daysync::clock::FixedClock;
use daysync::config::DaySyncConfig;
use daysync::orientation::{advance, sun_rotation};
use daysync::solar::{GeoPosition, SolarAlgorithm, SolarEphemeris};
use daysync::system::{DaySync, Transform};

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 21)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

fn paris() -> GeoPosition {
    GeoPosition::new(48.8566, 2.3522).unwrap()
}

fn bench_ephemeris(c: &mut Criterion) {
    let time = noon();
    c.bench_function("ephemeris", |b| {
        b.iter(|| SolarEphemeris::from_date_time(black_box(&time)));
    });
}

fn bench_accurate_angles(c: &mut Criterion) {
    let time = noon();
    let position = paris();
    let algorithm = SolarAlgorithm::AccurateAstronomical;
    c.bench_function("solar_angles_accurate", |b| {
        b.iter(|| algorithm.solar_angles(black_box(&time), black_box(&position)));
    });
}

fn bench_simplified_angles(c: &mut Criterion) {
    let time = noon();
    let position = paris();
    let algorithm = SolarAlgorithm::simplified();
    c.bench_function("solar_angles_simplified", |b| {
        b.iter(|| algorithm.solar_angles(black_box(&time), black_box(&position)));
    });
}

fn bench_smoother_step(c: &mut Criterion) {
    let target = sun_rotation(&SolarAlgorithm::AccurateAstronomical.solar_angles(&noon(), &paris()));
    c.bench_function("smoother_advance", |b| {
        b.iter(|| advance(black_box(Quat::IDENTITY), black_box(target), black_box(1.0 / 60.0), true, 2.0));
    });
}

fn bench_full_tick(c: &mut Criterion) {
    let mut sync = DaySync::new(DaySyncConfig::default(), FixedClock::new(noon()), Some(Transform::default()));
    c.bench_function("daysync_tick", |b| {
        b.iter(|| sync.tick(black_box(1.0 / 60.0)));
    });
}

criterion_group!(
    benches,
    bench_ephemeris,
    bench_accurate_angles,
    bench_simplified_angles,
    bench_smoother_step,
    bench_full_tick,
);
criterion_main!(benches);
