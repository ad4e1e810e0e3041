use bonsai_tree::BTree;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;

const N: usize = 10_000;
const ORDER: usize = 16;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Insert benchmarks ──────────────────────────────────────────────────────

fn bench_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_ordered");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new(ORDER);
            for i in 0..N as i64 {
                tree.insert(i);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for i in 0..N as i64 {
                set.insert(i);
            }
            set
        });
    });

    group.finish();
}

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new(ORDER);
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for &k in &keys {
                set.insert(k);
            }
            set
        });
    });

    group.finish();
}

// ─── Search benchmarks ──────────────────────────────────────────────────────

fn bench_search_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut tree = BTree::new(ORDER);
    let mut set = BTreeSet::new();
    for &k in &keys {
        tree.insert(k);
        set.insert(k);
    }

    let mut group = c.benchmark_group("search_random");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if tree.contains(k) {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if set.contains(k) {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

// ─── Construction benchmarks ────────────────────────────────────────────────

fn bench_bulkload(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let mut group = c.benchmark_group("bulkload");

    group.bench_function(BenchmarkId::new("bulkload", N), |b| {
        b.iter(|| BTree::bulkload(ORDER, keys.iter().copied()));
    });

    group.bench_function(BenchmarkId::new("incremental", N), |b| {
        b.iter(|| {
            let mut tree = BTree::new(ORDER);
            for &k in &keys {
                tree.insert(k);
            }
            tree
        });
    });

    group.finish();
}

// ─── Iteration benchmarks ───────────────────────────────────────────────────

fn bench_iterate(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut tree = BTree::new(ORDER);
    let mut set = BTreeSet::new();
    for &k in &keys {
        tree.insert(k);
        set.insert(k);
    }

    let mut group = c.benchmark_group("iterate");

    group.bench_function(BenchmarkId::new("BTree", N), |b| {
        b.iter(|| tree.cursor().copied().sum::<i64>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| set.iter().copied().sum::<i64>());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert_ordered,
    bench_insert_random,
    bench_search_random,
    bench_bulkload,
    bench_iterate
);
criterion_main!(benches);
