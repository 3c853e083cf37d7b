// crates/callparser-core/benches/benchmarks.rs
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use callparser_core::loader::load_default_index;
use callparser_core::{lookup_many_with, lookup_one, BatchConfig, CancelToken, CallStructure};

const SAMPLE_CALLS: [&str; 10] = [
    "W6OP", "K1ABC", "DL1XYZ", "KG4AA", "KG4AAB", "W6OP/4", "V31/W6OP", "VP2E/W6OP", "W6OP/P", "3B7A",
];

fn bench_index_build(c: &mut Criterion) {
    c.bench_function("load_default_index", |b| {
        b.iter(|| load_default_index().expect("bundled dataset"));
    });
}

fn bench_single_lookup(c: &mut Criterion) {
    let index = load_default_index().expect("bundled dataset");
    let mut group = c.benchmark_group("lookup_one");
    for call in SAMPLE_CALLS {
        group.bench_with_input(BenchmarkId::from_parameter(call), call, |b, call| {
            b.iter(|| lookup_one(black_box(call), &index));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let index = load_default_index().expect("bundled dataset");
    c.bench_function("analyze_mixed", |b| {
        b.iter(|| {
            for call in SAMPLE_CALLS {
                black_box(CallStructure::analyze(call, &index));
            }
        });
    });
}

fn bench_batch(c: &mut Criterion) {
    let index = load_default_index().expect("bundled dataset");
    let calls: Vec<String> = (0..20_000)
        .map(|i| SAMPLE_CALLS[i % SAMPLE_CALLS.len()].to_string())
        .collect();

    let mut group = c.benchmark_group("lookup_many");
    group.throughput(Throughput::Elements(calls.len() as u64));
    for workers in [1usize, 2, 4, 8] {
        let config = BatchConfig::default().with_workers(workers);
        group.bench_with_input(BenchmarkId::from_parameter(workers), &config, |b, config| {
            b.iter(|| lookup_many_with(&calls, &index, config, &CancelToken::new()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_single_lookup, bench_analyze, bench_batch);
criterion_main!(benches);
