//! Criterion benchmark comparing the two conversion strategies.
//!
//! Complements the sweep binary with criterion's repeated sampling. Input is generated once per
//! error rate outside of the measured closure.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use parse_strategy_bench::{
    Convert, ErrorRate, PRIMITIVE_FALLBACK, RECORD_FALLBACK, StatusChecked, UnwindGuarded,
    from_record, generate, materialize,
};

const SEED: u64 = 1;
const COUNT: usize = 10_000;

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Elements(COUNT as u64));

    for rate in [0.0, 0.1, 0.5, 0.9] {
        let error_rate = ErrorRate::new(rate).expect("constant rate is in range");
        let records = generate(SEED, COUNT, error_rate);
        let pct = error_rate.percent().round() as u32;

        let exception = UnwindGuarded::new(PRIMITIVE_FALLBACK);
        group.bench_with_input(BenchmarkId::new("exception", pct), &records, |b, records| {
            b.iter(|| {
                for r in records {
                    criterion::black_box(exception.convert(r.payload()));
                }
            });
        });

        let status = StatusChecked::new(PRIMITIVE_FALLBACK);
        group.bench_with_input(BenchmarkId::new("status", pct), &records, |b, records| {
            b.iter(|| {
                for r in records {
                    criterion::black_box(status.convert(r.payload()));
                }
            });
        });
    }

    group.finish();
}

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("records");
    group.throughput(Throughput::Elements(COUNT as u64));

    for rate in [0.0, 0.5] {
        let error_rate = ErrorRate::new(rate).expect("constant rate is in range");
        let bags = materialize(&generate(SEED, COUNT, error_rate))
            .expect("generated document is well-formed");
        let pct = error_rate.percent().round() as u32;

        let exception = UnwindGuarded::new(RECORD_FALLBACK);
        group.bench_with_input(BenchmarkId::new("exception", pct), &bags, |b, bags| {
            b.iter(|| {
                for bag in bags {
                    criterion::black_box(from_record(bag, &exception));
                }
            });
        });

        let status = StatusChecked::new(RECORD_FALLBACK);
        group.bench_with_input(BenchmarkId::new("status", pct), &bags, |b, bags| {
            b.iter(|| {
                for bag in bags {
                    criterion::black_box(from_record(bag, &status));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert, bench_records);
criterion_main!(benches);
