use chained_hashtable::{most_frequent, most_frequent_with_capacity};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashbrown::HashMap;
use std::time::Duration;

fn lcg(mut s: u64, distinct: u64) -> impl Iterator<Item = i64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(((s >> 33) % distinct) as i64)
    })
}

// Baseline on hashbrown. Ties are broken arbitrarily.
fn hashbrown_most_frequent(nums: &[i64]) -> Option<i64> {
    let mut counts: HashMap<i64, u64> = HashMap::new();
    for &n in nums {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts.into_iter().max_by_key(|&(_, c)| c).map(|(k, _)| k)
}

fn bench_most_frequent(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_frequent_10k");
    for distinct in [16u64, 256, 4096] {
        let nums: Vec<i64> = lcg(42, distinct).take(10_000).collect();
        group.bench_with_input(BenchmarkId::new("chained_257", distinct), &nums, |b, nums| {
            b.iter(|| black_box(most_frequent(nums)))
        });
        group.bench_with_input(
            BenchmarkId::new("chained_sized", distinct),
            &nums,
            |b, nums| {
                b.iter(|| black_box(most_frequent_with_capacity(nums, distinct as usize * 2 + 1)))
            },
        );
        group.bench_with_input(BenchmarkId::new("hashbrown", distinct), &nums, |b, nums| {
            b.iter(|| black_box(hashbrown_most_frequent(nums)))
        });
    }
    group.finish();
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_most_frequent
}
criterion_main!(benches);
