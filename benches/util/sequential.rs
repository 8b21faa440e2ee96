use std::{
    collections::BTreeMap,
    time::{Duration, Instant},
};

use criterion::{black_box, Criterion};
use rand::{prelude::SliceRandom, thread_rng, Rng};
use sdict::map::SortedDictionary;

fn shuffled(already_inserted: u64) -> Vec<u64> {
    let mut range: Vec<u64> = (0..already_inserted).collect();
    range.shuffle(&mut thread_rng());
    range
}

pub fn bench_btreemap(already_inserted: u64, c: &mut Criterion) {
    c.bench_function(
        &format!("Inserted {:+e} std::BTreeMap Insert", already_inserted),
        |b| {
            b.iter_custom(|iters| {
                let mut rng = thread_rng();
                let mut duration = Duration::ZERO;

                for _ in 0..iters {
                    let mut map = BTreeMap::new();

                    for i in shuffled(already_inserted) {
                        let _ = map.insert(i, i);
                    }

                    let key: u64 = rng.gen_range(already_inserted..u64::MAX);

                    let start = Instant::now();
                    let _ = black_box(map.insert(key, key));
                    duration += start.elapsed();
                }

                duration
            });
        },
    );

    c.bench_function(
        &format!("Inserted {:+e} std::BTreeMap Lookup", already_inserted),
        |b| {
            b.iter_custom(|iters| {
                let mut map = BTreeMap::new();
                let mut rng = thread_rng();

                for i in shuffled(already_inserted) {
                    let _ = map.insert(i, i);
                }

                let mut duration = Duration::ZERO;
                for _ in 0..iters {
                    let key: u64 = rng.gen_range(0..already_inserted);

                    let start = Instant::now();
                    let _ = black_box(map.get(&key));
                    duration += start.elapsed();
                }
                duration
            });
        },
    );
}

pub fn bench_sorted_dictionary<M>(name: &str, already_inserted: u64, c: &mut Criterion)
where
    M: SortedDictionary<u64, u64>,
{
    c.bench_function(
        &format!("Inserted {:+e} {} Add", already_inserted, name),
        |b| {
            b.iter_custom(|iters| {
                let mut rng = thread_rng();
                let mut duration = Duration::ZERO;

                for _ in 0..iters {
                    let mut map = M::new();

                    for i in shuffled(already_inserted) {
                        let _ = map.add(i, i);
                    }

                    let key: u64 = rng.gen_range(already_inserted..u64::MAX);

                    let start = Instant::now();
                    let _ = black_box(map.add(key, key));
                    duration += start.elapsed();
                }

                duration
            });
        },
    );

    c.bench_function(
        &format!("Inserted {:+e} {} TryGet", already_inserted, name),
        |b| {
            b.iter_custom(|iters| {
                let mut map = M::new();
                let mut rng = thread_rng();

                for i in shuffled(already_inserted) {
                    let _ = map.add(i, i);
                }

                let mut duration = Duration::ZERO;
                for _ in 0..iters {
                    let key: u64 = rng.gen_range(0..already_inserted);

                    let start = Instant::now();
                    let _ = black_box(map.try_get(&key));
                    duration += start.elapsed();
                }
                duration
            });
        },
    );
}
