use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use carvemaze::generators::{self, DisconnectedRegions};
use carvemaze::maze::Maze;
use carvemaze::pathing;
use carvemaze::persistence;
use carvemaze::units::{Height, Width};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn large_maze() -> Maze {
    let mut rng = XorShiftRng::seed_from_u64(7);
    generators::generate(Width(351), Height(351), &mut rng, DisconnectedRegions::Stop).unwrap()
}

fn bench_depth_first_path(c: &mut Criterion) {
    c.bench_function("depth_first_path", |b| {
        let mut maze = large_maze();
        let mut rng = XorShiftRng::seed_from_u64(3);
        b.iter(|| pathing::depth_first_path(&mut maze, &mut rng))
    });
}

fn bench_write_maze(c: &mut Criterion) {
    c.bench_function("write_maze", |b| {
        let maze = large_maze();
        let mut bytes = Vec::new();
        b.iter(|| {
            bytes.clear();
            persistence::write_maze(&maze, &mut bytes)
        })
    });
}

fn bench_read_maze(c: &mut Criterion) {
    c.bench_function("read_maze", |b| {
        let mut bytes = Vec::new();
        persistence::write_maze(&large_maze(), &mut bytes).unwrap();
        b.iter(|| persistence::read_maze(&mut &bytes[..]))
    });
}

criterion_group!(benches,
    bench_depth_first_path,
    bench_write_maze,
    bench_read_maze
);
criterion_main!(benches);
