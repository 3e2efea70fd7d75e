use criterion::{criterion_group, criterion_main, Criterion};
use carvemaze::{
    generators::{self, DisconnectedRegions},
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_65(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    c.bench_function("recursive_backtracker_maze_65", move |b| {
        b.iter(|| generators::generate(Width(65), Height(65), &mut rng, DisconnectedRegions::Stop))
    });
}

fn bench_recursive_backtracker_maze_401(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    c.bench_function("recursive_backtracker_maze_401", move |b| {
        b.iter(|| {
            generators::generate(Width(401), Height(401), &mut rng, DisconnectedRegions::Stop)
        })
    });
}

fn bench_teleport_maze_401(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    c.bench_function("teleport_maze_401", move |b| {
        b.iter(|| {
            generators::generate(Width(401), Height(401), &mut rng, DisconnectedRegions::Teleport)
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_65,
    bench_recursive_backtracker_maze_401,
    bench_teleport_maze_401
);
criterion_main!(benches);
