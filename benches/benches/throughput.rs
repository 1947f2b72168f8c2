//! BLAKE2b Criterion Benchmark
//!
//! Latency, bulk throughput, keyed hashing and batch scaling.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (tokens, IDs, short MAC payloads).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (127, "127B"),
        (128, "128B"),
        (129, "129B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| blake2b::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Sustained throughput once the key/message buffer no longer fits in cache.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(30);

    let sizes = [
        (64 * KB, "64KB"),
        (512 * KB, "512KB"),
        (MB, "1MB"),
        (4 * MB, "4MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| blake2b::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: KEYED VS UNKEYED
// =============================================================================

/// The key costs one extra compression; visible only for short messages.
fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Keyed");

    let key = [0x42u8; blake2b::MAX_KEY_SIZE];

    for (size, name) in [(64, "64B"), (KB, "1KB"), (64 * KB, "64KB")] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("unkeyed-{name}"), |b| {
            b.iter(|| blake2b::hash(black_box(&input)))
        });

        group.bench_function(format!("keyed-{name}"), |b| {
            b.iter(|| blake2b::hash_keyed(black_box(&input), black_box(&key), 64))
        });

        let mac = blake2b::hash_keyed(&input, &key, 32).unwrap();
        group.bench_function(format!("verify-mac-{name}"), |b| {
            b.iter(|| blake2b::verify_mac(black_box(&input), black_box(&key), black_box(mac.as_bytes())))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: DIGEST LENGTH
// =============================================================================

/// Output length only changes the parameter word and the final copy.
fn bench_digest_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Digest-Length");

    let input = random_input(KB);
    group.throughput(Throughput::Bytes(KB as u64));

    for hash_len in [1usize, 20, 32, 48, 64] {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{hash_len}B-out")),
            &hash_len,
            |b, &len| b.iter(|| blake2b::hash_with_len(black_box(&input), len)),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: BATCH SCALING
// =============================================================================

/// Many independent messages hashed through `hash_many` (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Batch-Scaling");
    group.sample_size(30);

    let count = 4096;
    let size = 4 * KB;
    let inputs: Vec<Vec<u8>> = (0..count).map(|_| random_input(size)).collect();
    let params = blake2b::Params::default();
    group.throughput(Throughput::Bytes((count * size) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| blake2b::hash_many(black_box(&inputs), &params)));
            },
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_keyed,
    bench_digest_length,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling,);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
