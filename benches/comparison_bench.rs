use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::{
    AstarSolver, BfsSolver, Coordinate, DijkstraSolver, GridSolver, NullObserver, TerrainModel,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: i32 = 64;
const N_SCENARIOS: usize = 32;

fn random_terrain(rng: &mut StdRng) -> TerrainModel {
    let mut terrain = TerrainModel::new(N, N).unwrap();
    for x in 0..N {
        for y in 0..N {
            let c = Coordinate::new(x, y);
            match rng.gen_range(0..10) {
                0..=1 => {
                    terrain.mark_barrier(c);
                }
                2 => {
                    terrain.mark_forest(c);
                }
                3 => {
                    terrain.mark_desert(c);
                }
                _ => {}
            }
        }
    }
    terrain.update();
    terrain
}

fn random_scenarios(terrain: &TerrainModel, rng: &mut StdRng) -> Vec<(Coordinate, Coordinate)> {
    let mut scenarios = Vec::new();
    while scenarios.len() < N_SCENARIOS {
        let start = Coordinate::new(rng.gen_range(0..N), rng.gen_range(0..N));
        let end = Coordinate::new(rng.gen_range(0..N), rng.gen_range(0..N));
        if terrain.reachable(&start, &end) {
            scenarios.push((start, end));
        }
    }
    scenarios
}

fn bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    let terrain = random_terrain(&mut rng);
    let scenarios = random_scenarios(&terrain, &mut rng);
    c.bench_function(format!("{N}x{N} terrain, {solver_name}").as_str(), |b| {
        b.iter(|| {
            for (start, end) in &scenarios {
                black_box(
                    solver
                        .get_path(&terrain, *start, *end, &mut NullObserver)
                        .ok(),
                );
            }
        })
    });
}

fn terrain_bench(c: &mut Criterion) {
    bench_solver(c, "BFS", BfsSolver);
    bench_solver(c, "Dijkstra", DijkstraSolver);
    bench_solver(c, "Astar", AstarSolver::new());
}

criterion_group!(benches, terrain_bench);
criterion_main!(benches);
