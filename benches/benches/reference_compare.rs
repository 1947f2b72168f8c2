//! Reference Comparison Benchmark
//!
//! Compares the one-shot API against the RustCrypto `blake2` crate and
//! against the bare compression function, to separate buffer assembly
//! cost from the rounds themselves.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use blake2::digest::{FixedOutput, KeyInit, Update};
use blake2::{Blake2b512, Blake2bMac512, Digest as _};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use blake2b::kernels::{constants, portable};

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_unkeyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLAKE2b Unkeyed");

    // Scenarios:
    // - 7B: fixed setup cost dominates
    // - 1KB: L1 hot path
    // - 256KB: bulk rounds
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("blake2b (this crate) - {size} bytes"), |b| {
            b.iter(|| blake2b::hash(black_box(&input)));
        });

        group.bench_function(format!("blake2 (RustCrypto) - {size} bytes"), |b| {
            b.iter(|| Blake2b512::digest(black_box(&input)));
        });
    }
    group.finish();
}

fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLAKE2b Keyed");
    let key = [7u8; 64];

    for size in [7, 1024, 256 * 1024] {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("blake2b (this crate) - {size} bytes"), |b| {
            b.iter(|| blake2b::hash_keyed(black_box(&input), &key, 64));
        });

        group.bench_function(format!("blake2 (RustCrypto) - {size} bytes"), |b| {
            b.iter(|| {
                let mut mac = Blake2bMac512::new_from_slice(&key).unwrap();
                mac.update(black_box(&input));
                mac.finalize_fixed()
            });
        });
    }
    group.finish();
}

/// Raw compression of one block, without assembly or output handling.
fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLAKE2b Compress");
    group.throughput(Throughput::Bytes(constants::BLOCK_SIZE as u64));

    let block = [0xA5u8; constants::BLOCK_SIZE];
    group.bench_function("portable", |b| {
        b.iter(|| {
            let mut h = constants::IV;
            h[0] ^= constants::PARAM_BLOCK ^ 64;
            portable::compress(&mut h, black_box(&block), 128, true);
            h
        });
    });
    group.finish();
}

criterion_group!(benches, bench_unkeyed, bench_keyed, bench_compress);
criterion_main!(benches);
