// ============================================================================
// Constant Derivation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Single Derivation - One multiplier/shift pair per period count
// 2. Full Schedule - All four reference periods plus header rendering
// ============================================================================

use apr_constgen::prelude::*;
use apr_constgen::domain::{BLOCKS_PER_YEAR, DAYS_PER_YEAR, HOURS_PER_YEAR, ROUNDS_PER_YEAR};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_single_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_derivation");
    let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());

    for (label, periods) in [
        ("DAY", DAYS_PER_YEAR),
        ("HOUR", HOURS_PER_YEAR),
        ("ROUND", ROUNDS_PER_YEAR),
        ("BLOCK", BLOCKS_PER_YEAR),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &periods, |b, &periods| {
            b.iter(|| black_box(deriver.derive(black_box(periods)).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_full_schedule(c: &mut Criterion) {
    c.bench_function("full_schedule_emission", |b| {
        let deriver = ConstantDeriver::new(RateConfig::muse_mainnet());
        let schedule = PeriodSchedule::muse_default();
        let emitter = HeaderEmitter::new();

        b.iter(|| {
            let mut out = Vec::with_capacity(512);
            emitter
                .emit_schedule(&mut out, &deriver, &schedule)
                .unwrap();
            black_box(out)
        });
    });
}

criterion_group!(benches, benchmark_single_derivation, benchmark_full_schedule);
criterion_main!(benches);
