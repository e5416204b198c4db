//! Benchmark for folding, reduction and the period search.
//! Run with: cargo bench -p lightcurve --bench period_search

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lightcurve::synthetic::SyntheticTransit;
use lightcurve::{
    fold, locate_minimum, reduce, search, SearchConfig, SearchMode, Series, DEFAULT_MIN_NEIGHBORS,
};

fn transit(cadence: f64) -> Series {
    SyntheticTransit {
        cadence,
        ..SyntheticTransit::default()
    }
    .generate()
    .expect("valid synthetic parameters")
}

fn benchmark_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    for cadence in [0.002, 0.00035] {
        let series = transit(cadence);
        group.throughput(Throughput::Elements(series.len() as u64));

        group.bench_function(BenchmarkId::new("fold", series.len()), |b| {
            b.iter(|| fold(black_box(&series), black_box(1.001), 0.0).unwrap())
        });

        let folded = fold(&series, 1.001, 0.0).unwrap();
        group.bench_function(BenchmarkId::new("reduce", series.len()), |b| {
            b.iter(|| reduce(black_box(&folded)))
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("period_search");
    group.sample_size(10);

    let series = transit(0.002);
    for mode in [SearchMode::Minimize, SearchMode::Maximize] {
        for parallel in [false, true] {
            let config = SearchConfig {
                parallel,
                ..SearchConfig::new(0.5, 1.5, 0.001, mode)
            };
            let id = format!("{mode:?}/{}", if parallel { "parallel" } else { "sequential" });
            group.throughput(Throughput::Elements(config.grid().unwrap().len() as u64));

            group.bench_function(BenchmarkId::new(id, series.len()), |b| {
                b.iter(|| search(black_box(&series), black_box(&config)).unwrap())
            });
        }
    }

    group.finish();
}

fn benchmark_minimum(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum");

    let series = transit(0.00035);
    let folded = fold(&series, 1.0, 0.0).unwrap();
    let radius = folded.neighborhood_radius();

    group.bench_function(BenchmarkId::new("locate", folded.len()), |b| {
        b.iter(|| locate_minimum(black_box(&folded), radius, DEFAULT_MIN_NEIGHBORS).unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_fold, benchmark_search, benchmark_minimum);
criterion_main!(benches);
