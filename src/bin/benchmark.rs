//! Step throughput benchmark: allocating step vs. ping-pong simulator

use std::time::Instant;

use collatz_life::{GridSimulator, domain::Grid};
use rand::Rng;

/// Grid with every cell set to a random value
fn random_grid(size: usize) -> Grid {
    let mut rng = rand::rng();
    let cells = (0..size * size).map(|_| rng.random::<i32>()).collect();
    Grid::from_cells(size, cells).expect("cell count matches size")
}

fn benchmark_pure_step(grid: Grid, iterations: u32) -> f64 {
    let mut grid = grid;
    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.step().0;
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn benchmark_simulator(grid: Grid, iterations: u32) -> f64 {
    let mut sim = GridSimulator::from_grid(grid);
    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Collatz Life Step Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000, 4000];
    let iterations = 20;

    println!("{:>10} {:>8} {:>12} {:>12} {:>14}", "Size", "Input", "Step", "PingPong", "Cells/s");
    println!("{:-<62}", "");

    for size in sizes {
        let inputs = [
            ("seeded", Grid::seeded(size, 1_000_000).expect("non-empty size")),
            ("random", random_grid(size)),
        ];

        for (label, grid) in inputs {
            let pure_ms = benchmark_pure_step(grid.clone(), iterations);
            let sim_ms = benchmark_simulator(grid, iterations);
            let cells_per_sec = (size * size) as f64 / (sim_ms / 1000.0);

            println!(
                "{:>10} {:>8} {:>10.2}ms {:>10.2}ms {:>13.1}M",
                format!("{}x{}", size, size),
                label,
                pure_ms,
                sim_ms,
                cells_per_sec / 1_000_000.0
            );
        }
    }
}
