//! IAI-Callgrind benchmark for RedBlackTreeMap insertion and removal.
//!
//! Measures instruction counts for building a map from ascending and scattered
//! keys, and for emptying it again.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use rbmap::RedBlackTreeMap;
use std::hint::black_box;

fn setup_ascending_1000() -> Vec<i32> {
    (0..1000).collect()
}

fn setup_scattered_1000() -> Vec<i32> {
    (0..1000).map(|index| (index * 7919) % 1000).collect()
}

fn setup_map_1000() -> (RedBlackTreeMap<i32, i32>, Vec<i32>) {
    let keys = setup_scattered_1000();
    let map = keys.iter().map(|key| (*key, *key)).collect();
    (map, keys)
}

#[library_benchmark]
#[bench::ascending(setup_ascending_1000())]
#[bench::scattered(setup_scattered_1000())]
fn insert_1000(keys: Vec<i32>) -> RedBlackTreeMap<i32, i32> {
    let mut map = RedBlackTreeMap::new();
    for key in black_box(keys) {
        map.insert(black_box(key), key);
    }
    black_box(map)
}

#[library_benchmark]
#[bench::scattered(setup_map_1000())]
fn remove_all_1000(input: (RedBlackTreeMap<i32, i32>, Vec<i32>)) -> RedBlackTreeMap<i32, i32> {
    let (mut map, keys) = input;
    for key in &keys {
        black_box(map.remove(black_box(key)));
    }
    black_box(map)
}

#[library_benchmark]
#[bench::scattered(setup_map_1000())]
fn clone_1000(input: (RedBlackTreeMap<i32, i32>, Vec<i32>)) -> RedBlackTreeMap<i32, i32> {
    black_box(black_box(&input.0).clone())
}

library_benchmark_group!(
    name = treemap_group;
    benchmarks = insert_1000, remove_all_1000, clone_1000
);

main!(library_benchmark_groups = treemap_group);
