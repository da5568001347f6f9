//! Randomized whole-engine tests which exercise the generation pipeline
//! many times and assert the statistical properties of its output.

use crate::Board;
use crate::constraint::DefaultConstraint;
use crate::engine::{self, GridSize};
use crate::generator::{Carver, Difficulty, Generator};
use crate::solver::{BacktrackingSolver, Solution, Solver};

const SOLUTION_ITERATIONS: usize = 100;
const PUZZLE_ITERATIONS: usize = 20;
const DIFFICULTY_ITERATIONS: usize = 8;

fn assert_valid_solutions(region_width: usize, region_height: usize) {
    let mut generator = Generator::new_default();

    for _ in 0..SOLUTION_ITERATIONS {
        let board = generator
            .generate(region_width, region_height, DefaultConstraint)
            .unwrap();

        assert!(board.grid().is_full(), "Generated grid is not full.");
        assert!(engine::check_win_condition(board.grid()),
            "Generated grid violates the placement invariant.");
    }
}

#[test]
fn solutions_valid_4x4() {
    assert_valid_solutions(2, 2);
}

#[test]
fn solutions_valid_9x9() {
    assert_valid_solutions(3, 3);
}

#[test]
fn puzzles_consistent_with_solutions() {
    for _ in 0..PUZZLE_ITERATIONS {
        let generated =
            engine::generate_puzzle(GridSize::Four, Difficulty::Medium);

        // Every clue matches the solution and blanking never introduced a
        // foreign color.
        assert!(generated.puzzle.is_subset(&generated.solution).unwrap());
        assert!(engine::check_win_condition(&generated.solution));

        // The fixed mask marks exactly the clues.
        assert_eq!(generated.puzzle.count_clues(),
            generated.fixed.count_fixed());
    }
}

#[test]
fn carved_puzzles_uniquely_solvable() {
    let mut generator = Generator::new_default();
    let mut carver = Carver::new_default();

    for _ in 0..PUZZLE_ITERATIONS {
        let mut board =
            generator.generate(2, 2, DefaultConstraint).unwrap();
        let solution = board.grid().clone();
        carver.carve(&mut board, Difficulty::Hard);

        assert_eq!(Solution::Unique(solution),
            BacktrackingSolver.solve(&board));
    }
}

#[test]
fn win_checker_rejects_any_blanked_cell() {
    let mut generator = Generator::new_default();
    let board = generator.generate(2, 2, DefaultConstraint).unwrap();
    let solution = board.grid().clone();
    let size = solution.size();

    assert!(engine::check_win_condition(&solution));

    for row in 0..size {
        for column in 0..size {
            let mut blanked = solution.clone();
            blanked.clear_cell(column, row).unwrap();
            assert!(!engine::check_win_condition(&blanked));
        }
    }
}

fn mean_blanks(difficulty: Difficulty) -> f64 {
    let mut total = 0usize;

    for _ in 0..DIFFICULTY_ITERATIONS {
        let generated = engine::generate_puzzle(GridSize::Nine, difficulty);
        total += generated.puzzle.count_blanks();
    }

    total as f64 / DIFFICULTY_ITERATIONS as f64
}

#[test]
fn difficulty_ordering() {
    let easy = mean_blanks(Difficulty::Easy);
    let medium = mean_blanks(Difficulty::Medium);
    let hard = mean_blanks(Difficulty::Hard);

    assert!(easy <= medium,
        "Easy puzzles have more blanks than medium ones on average.");
    assert!(medium <= hard,
        "Medium puzzles have more blanks than hard ones on average.");
}

#[test]
fn fallback_safety_with_zero_budget() {
    let mut generator = Generator::new_default();
    let mut carver = Carver::new_default();
    let mut board = generator.generate(2, 2, DefaultConstraint).unwrap();
    let solution = board.grid().clone();
    let removed = carver.carve_cells(&mut board, 6, 0);

    assert_eq!(0, removed);
    assert!(engine::check_win_condition(&solution));
    assert!(board.grid().is_subset(&solution).unwrap());
}

#[test]
fn generated_9x9_puzzles_playable() {
    let generated = engine::generate_puzzle(GridSize::Nine, Difficulty::Easy);
    let board =
        Board::new_with_grid(generated.puzzle.clone(), DefaultConstraint);

    assert!(board.is_valid());
    assert_eq!(Solution::Unique(generated.solution.clone()),
        BacktrackingSolver.solve(&board));
}
