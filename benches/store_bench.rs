//! TagSet benchmarks.
//!
//! The set does exact-match scans for uniqueness; these benches keep an eye
//! on how that scales with tag count so a future indexed lookup has a
//! baseline to beat.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `add` | Building a set from n unique names |
//! | `contains` | Hit and miss lookup cost at 1k tags |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench store_bench
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tagdeck_core::TagSet;

fn corpus(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let letter = (b'a' + (i % 26) as u8) as char;
            format!("{letter}tag{i:05}")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

fn add_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [100usize, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let tags = corpus(size);
        group.bench_with_input(BenchmarkId::new("unique", size), &tags, |b, tags| {
            b.iter(|| {
                let mut set = TagSet::new();
                for tag in tags {
                    set.add(tag);
                }
                black_box(set.len())
            })
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

fn contains_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    let set = TagSet::from_names(corpus(1_000));

    group.bench_function("hit_1k", |b| {
        b.iter(|| black_box(set.contains(black_box("ztag00025"))))
    });

    group.bench_function("miss_1k", |b| {
        b.iter(|| black_box(set.contains(black_box("missing"))))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(store_benches, add_bench, contains_bench);
criterion_main!(store_benches);
