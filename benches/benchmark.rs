use criterion::{criterion_group, criterion_main, Criterion};

use colorgrid::Board;
use colorgrid::constraint::DefaultConstraint;
use colorgrid::engine::{self, GridSize};
use colorgrid::generator::{Difficulty, Generator};
use colorgrid::solver::{BacktrackingSolver, Solution, Solver};

// Explanation of benchmark classes:
//
// solve: The plain BacktrackingSolver on a fixed 9x9 puzzle with a known
//        unique solution.
// generate: Filling an empty 9x9 grid with a random valid solution.
// carve: The full generate-and-carve pipeline at medium difficulty.

const PUZZLE: &str = "3x3;\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

fn benchmark_solve(c: &mut Criterion) {
    let board = Board::parse(PUZZLE, DefaultConstraint).unwrap();

    c.bench_function("solve 9x9", |b| b.iter(|| {
        let solution = BacktrackingSolver.solve(&board);

        if let Solution::Unique(_) = solution { }
        else {
            panic!("Benchmark puzzle not uniquely solvable.");
        }
    }));
}

fn benchmark_generate(c: &mut Criterion) {
    c.bench_function("generate 9x9 solution", |b| b.iter(|| {
        let mut generator = Generator::new_default();
        generator.generate(3, 3, DefaultConstraint).unwrap()
    }));
}

fn benchmark_carve(c: &mut Criterion) {
    let mut group = c.benchmark_group("carve");
    group.sample_size(10);
    group.bench_function("generate and carve 9x9 medium", |b| b.iter(|| {
        engine::generate_puzzle(GridSize::Nine, Difficulty::Medium)
    }));
    group.finish();
}

criterion_group!(all,
    benchmark_solve,
    benchmark_generate,
    benchmark_carve
);

criterion_main!(all);
