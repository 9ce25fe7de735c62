use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skywatch_core::Location;
use skywatch_ephemeris::{Body, Planet};
use skywatch_events::altitude_at;
use skywatch_events::night::{scan_night, NightSchedule};
use skywatch_events::solver::{find_crossing, CrossingSearch, Direction};
use skywatch_time::JulianDate;

fn greenwich() -> Location {
    Location::new(51.4779, 0.0).expect("valid site")
}

fn position_bench(c: &mut Criterion) {
    let jd = JulianDate::from_f64(2460949.5);

    let mut group = c.benchmark_group("ephemeris_position");
    group.bench_function("sun", |b| {
        b.iter(|| Body::Sun.position(black_box(&jd)))
    });
    group.bench_function("moon", |b| {
        b.iter(|| Body::Moon.position(black_box(&jd)))
    });
    group.bench_function("saturn", |b| {
        b.iter(|| Body::Planet(Planet::Saturn).position(black_box(&jd)))
    });
    group.finish();
}

fn crossing_bench(c: &mut Criterion) {
    let observer = greenwich();
    // One day starting 2025-10-21 00:00 UTC: contains a sunrise.
    let search = CrossingSearch::new(2460969.5, 2460970.5, 0.0, Direction::Rising);

    let mut group = c.benchmark_group("crossing_search");
    group.sample_size(20);
    group.bench_function("sunrise", |b| {
        b.iter(|| {
            find_crossing(
                |jd| altitude_at(Body::Sun, jd, &observer),
                black_box(&search),
            )
            .expect("valid search")
            .expect("sunrise exists")
        })
    });
    group.finish();
}

fn night_scan_bench(c: &mut Criterion) {
    let schedule = NightSchedule::new(greenwich(), 0.0, 2025, 10, 21)
        .expect("valid date")
        .with_nights(1);

    let mut group = c.benchmark_group("night_scan");
    group.sample_size(10);
    group.bench_function("one_night", |b| {
        b.iter(|| scan_night(black_box(&schedule), 0))
    });
    group.finish();
}

criterion_group!(benches, position_bench, crossing_bench, night_scan_bench);
criterion_main!(benches);
