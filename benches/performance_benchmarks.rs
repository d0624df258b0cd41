use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ephcalc::{
    compute_eph, compute_required_hours, compute_splits, format_hours_as_hms, parse_pace,
    parse_time_string, plan_laps, CalculatorService, EphRequest, Language, Translations,
};

/// Performance benchmarks for the calculation engine
///
/// Parsing and formatting dominate a single calculation, so they are
/// measured separately from the arithmetic.

fn bench_time_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Time Parsing");

    for input in ["3", "3:30", "3:30:00", "148:05:59"] {
        group.bench_with_input(BenchmarkId::new("parse_time_string", input), &input, |b, input| {
            b.iter(|| parse_time_string(black_box(input)))
        });
    }

    group.bench_function("format_hours_as_hms", |b| {
        b.iter(|| format_hours_as_hms(black_box(148.9 / 4.51)))
    });

    group.finish();
}

fn bench_effort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Effort Calculation");

    group.bench_function("compute_eph", |b| {
        b.iter(|| compute_eph(black_box(9.0), black_box(680.0), black_box(3.5)))
    });
    group.bench_function("compute_required_hours", |b| {
        b.iter(|| compute_required_hours(black_box(100.0), black_box(4890.0), black_box(4.51)))
    });

    let service = CalculatorService::new(Translations::for_language(Language::En));
    let request = EphRequest {
        mode: "eph".to_string(),
        distance: 9.0,
        elevation: 680.0,
        time: Some("3:30:00".to_string()),
        eph: None,
    };
    group.bench_function("handle_eph", |b| b.iter(|| service.handle_eph(black_box(&request))));

    group.finish();
}

fn bench_track(c: &mut Criterion) {
    let mut group = c.benchmark_group("Track Calculation");

    group.bench_function("parse_pace", |b| b.iter(|| parse_pace(black_box("4:30"))));
    group.bench_function("compute_splits", |b| b.iter(|| compute_splits(black_box(270))));

    // Lap plans grow with distance
    for &km in &[1.0, 10.0, 42.195] {
        let laps = (km * 1000.0 / 400.0) as u64;
        group.throughput(Throughput::Elements(laps));
        group.bench_with_input(BenchmarkId::new("plan_laps", km), &km, |b, &km| {
            b.iter(|| {
                let plan = plan_laps(black_box(300), km).unwrap();
                plan.lap_splits().sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_time_parsing, bench_effort, bench_track);
criterion_main!(benches);
