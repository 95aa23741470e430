//! Criterion micro-benchmarks for arena allocation, field access, and
//! pointer codec operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use karst_arena::codec::PointerCodec;
use karst_arena::Pointer;
use karst_bench::{list_profile, wide_profile};
use karst_core::{BlockId, Slot};

/// Benchmark: allocate 10K entries across ~40 blocks of 256.
fn bench_alloc_10k(c: &mut Criterion) {
    c.bench_function("arena_alloc_10k", |b| {
        b.iter(|| {
            let mut arena = list_profile();
            for i in 0..10_000u64 {
                black_box(arena.alloc(i).unwrap());
            }
            black_box(arena.block_count());
        });
    });
}

/// Benchmark: steady-state churn — free and re-allocate one entry.
fn bench_alloc_free_churn(c: &mut Criterion) {
    let mut arena = list_profile();
    let mut p = Pointer::NULL;
    for i in 0..10_000u64 {
        p = arena.alloc(i).unwrap();
    }

    c.bench_function("arena_alloc_free_churn", |b| {
        b.iter(|| {
            arena.free(black_box(p)).unwrap();
            p = arena.alloc(0).unwrap();
            black_box(p);
        });
    });
}

/// Benchmark: walk a 10K-entry linked list by `next` pointers.
fn bench_link_walk_10k(c: &mut Criterion) {
    let mut arena = wide_profile();
    let mut head = Pointer::NULL;
    for i in 0..10_000u64 {
        head = arena.alloc_with(i, &[("next", head)], &[]).unwrap();
    }

    c.bench_function("arena_link_walk_10k", |b| {
        b.iter(|| {
            let mut cursor = head;
            let mut sum = 0u64;
            while !cursor.is_null() {
                sum += arena.value(cursor).copied().unwrap();
                cursor = arena.link(cursor, "next").unwrap();
            }
            black_box(sum);
        });
    });
}

/// Benchmark: raw-field write + read through the word accessor.
fn bench_raw_field_access(c: &mut Criterion) {
    let mut arena = list_profile();
    let p = arena.alloc(0).unwrap();

    c.bench_function("arena_raw_field_access", |b| {
        let mut i = 0u32;
        b.iter(|| {
            arena.set_raw(p, "weight", i).unwrap();
            black_box(arena.raw(p, "weight").unwrap());
            i = i.wrapping_add(1);
        });
    });
}

/// Benchmark: encode/decode round trip for both bit splits.
fn bench_codec_round_trip(c: &mut Criterion) {
    let narrow = PointerCodec::new(256);
    let wide = PointerCodec::new(65_536);

    c.bench_function("codec_round_trip_narrow", |b| {
        b.iter(|| {
            let p = narrow.encode(black_box(BlockId(123_456)), black_box(Slot(200)));
            black_box(narrow.decode(p));
        });
    });

    c.bench_function("codec_round_trip_wide", |b| {
        b.iter(|| {
            let p = wide.encode(black_box(BlockId(60_000)), black_box(Slot(40_000)));
            black_box(wide.decode(p));
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_10k,
    bench_alloc_free_churn,
    bench_link_walk_10k,
    bench_raw_field_access,
    bench_codec_round_trip,
);
criterion_main!(benches);
