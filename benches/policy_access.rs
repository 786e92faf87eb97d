//! Per-access cost of each policy as capacity grows.
//!
//! With indexed ordering the time per access should stay flat across
//! capacities; a linear victim scan would grow with capacity.

use cachesim::{Algorithm, Key, WorkloadGenerator, WorkloadPattern};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const ACCESSES: usize = 10_000;

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_access");
    group.throughput(Throughput::Elements(ACCESSES as u64));

    for capacity in [16usize, 256, 4096] {
        // Key space four times the capacity keeps the miss path (and eviction) hot
        let trace: Vec<Key> = WorkloadGenerator::with_seed(42)
            .generate(WorkloadPattern::Random, ACCESSES)
            .into_iter()
            .enumerate()
            .map(|(i, k)| Key((k.0 * 7919 + i as u64 * 31) % (capacity as u64 * 4)))
            .collect();

        for algorithm in Algorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), capacity),
                &trace,
                |b, trace| {
                    b.iter(|| {
                        let mut policy = algorithm.build(capacity);
                        for (i, &key) in trace.iter().enumerate() {
                            black_box(policy.access(key, i as u64 + 1));
                        }
                        policy.len()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_run(c: &mut Criterion) {
    c.bench_function("run_zipfian_100", |b| {
        b.iter(|| {
            cachesim::compare(8, WorkloadPattern::Zipfian, 100, Some(1))
                .map(|results| results.len())
                .unwrap_or(0)
        })
    });
}

criterion_group!(benches, bench_access, bench_run);
criterion_main!(benches);
