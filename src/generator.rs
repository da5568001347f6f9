//! This module contains logic for generating random puzzles.
//!
//! Generation of puzzles is done by first generating a full grid with a
//! [Generator] and then blanking some cells using a [Carver]. The carver
//! only keeps a removal if the puzzle remains uniquely solvable, so every
//! carved puzzle has exactly one completion.

use crate::Board;
use crate::constraint::Constraint;
use crate::error::{EngineError, EngineResult};
use crate::solver::{BacktrackingSolver, Solution, Solver};

use log::debug;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The difficulty of a carved puzzle. Each difficulty maps to the fraction
/// of cells the [Carver] aims to remove from a full solution. The fractions
/// are policy constants; the actual number of removed cells may be lower if
/// the carver's attempt budget runs out first.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// Roughly 40 % of cells are removed.
    Easy,

    /// Roughly 55 % of cells are removed.
    Medium,

    /// Roughly 70 % of cells are removed.
    Hard
}

const EASY_REMOVAL_FRACTION: f64 = 0.40;
const MEDIUM_REMOVAL_FRACTION: f64 = 0.55;
const HARD_REMOVAL_FRACTION: f64 = 0.70;

/// Attempt budget factor: the carver gives up after this many times the
/// total cell count of unsuccessful or successful removal attempts.
const ATTEMPT_BUDGET_FACTOR: usize = 2;

impl Difficulty {

    /// Gets the fraction of cells the carver aims to remove for this
    /// difficulty.
    pub fn removal_fraction(self) -> f64 {
        match self {
            Difficulty::Easy => EASY_REMOVAL_FRACTION,
            Difficulty::Medium => MEDIUM_REMOVAL_FRACTION,
            Difficulty::Hard => HARD_REMOVAL_FRACTION
        }
    }
}

/// A generator randomly generates a full [Board], that is, a board with no
/// missing colors. It uses a random number generator to decide the content.
/// For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random colors.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random colors. Providing a seeded generator makes the
    /// output reproducible, which is used for daily puzzles.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec<C: Constraint + Clone>(&mut self, board: &mut Board<C>,
            column: usize, row: usize) -> bool {
        let size = board.grid().size();

        if row == size {
            return true;
        }

        let next_column = (column + 1) % size;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if board.grid().get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(board, next_column, next_row);
        }

        for color in shuffle(&mut self.rng, 1..=size) {
            if board.is_valid_color(column, row, color).unwrap() {
                board.grid_mut().set_cell(column, row, color).unwrap();

                if self.fill_rec(board, next_column, next_row) {
                    return true;
                }

                board.grid_mut().clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [Board] with random colors that satisfy its
    /// constraint and match all already present colors. If it is not
    /// possible, an error will be returned.
    ///
    /// If no error is returned, it is guaranteed that [Board::is_valid] on
    /// `board` returns `true` after this operation. Otherwise, it remains
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `board`: The board to fill with random colors.
    ///
    /// # Errors
    ///
    /// * `EngineError::UnsatisfiableConstraint` If there are no sets of
    /// colors that can be entered into the board that match its constraint
    /// without changing colors already present.
    pub fn fill<C>(&mut self, board: &mut Board<C>) -> EngineResult<()>
    where
        C: Constraint + Clone
    {
        if self.fill_rec(board, 0, 0) {
            Ok(())
        }
        else {
            Err(EngineError::UnsatisfiableConstraint)
        }
    }

    /// Generates a new random [Board] with all colors that matches the given
    /// parameters. If it is not possible, an error will be returned.
    ///
    /// It is guaranteed that [Board::is_valid] on the result returns `true`.
    ///
    /// # Arguments
    ///
    /// * `region_width`: The horizontal dimension of one region of the grid.
    /// Must be greater than 0.
    /// * `region_height`: The vertical dimension of one region of the grid.
    /// Must be greater than 0.
    /// * `constraint`: The constraint which will be matched by the generated
    /// board, which will also be contained and checked by the output board.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidDimensions` If `region_width` or
    /// `region_height` is invalid (zero).
    /// * `EngineError::UnsatisfiableConstraint` If there are no grids with
    /// the given dimensions that match the provided `constraint`.
    pub fn generate<C>(&mut self, region_width: usize, region_height: usize,
        constraint: C) -> EngineResult<Board<C>>
    where
        C: Constraint + Clone
    {
        let mut board =
            Board::new_empty(region_width, region_height, constraint)?;
        self.fill(&mut board)?;
        Ok(board)
    }
}

/// The maximum number of blank cells up to which a partial grid is even
/// considered for a uniqueness check. Beyond this threshold the carver
/// assumes multiple completions and rejects the removal without searching.
/// The value is an empirical policy constant (60 blanks for a 9x9 grid).
fn max_safe_blanks(size: usize) -> usize {
    size * size * 3 / 4
}

fn admits_unique_solution<C, S>(board: &Board<C>, solver: &S) -> bool
where
    C: Constraint + Clone,
    S: Solver
{
    if board.grid().count_blanks() > max_safe_blanks(board.grid().size()) {
        return false;
    }

    matches!(solver.solve(board), Solution::Unique(_))
}

/// A carver can be applied to the output of a [Generator] to blank cells of
/// the grid as long as the puzzle remains uniquely solvable according to the
/// provided [Solver]. A random number generator decides which cells are
/// attempted.
///
/// The carver aims for the removal fraction of a requested [Difficulty] but
/// works within a bounded attempt budget: if the budget is exhausted before
/// the target is reached, the result is a valid, possibly easier puzzle
/// rather than an error.
///
/// [Carver::new_default] will yield a carver with a perfect backtracking
/// solver and a [ThreadRng].
pub struct Carver<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Carver<BacktrackingSolver, ThreadRng> {

    /// Creates a new carver with a [BacktrackingSolver] to check unique
    /// solvability and a [ThreadRng] to decide which cells are attempted.
    pub fn new_default() -> Carver<BacktrackingSolver, ThreadRng> {
        Carver::new(BacktrackingSolver, rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Carver<S, R> {

    /// Creates a new carver with the given solver and random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `solver`: A [Solver] to be used to check whether a carved board is
    /// still uniquely solvable.
    /// * `rng`: A random number generator that decides which cells are
    /// attempted.
    pub fn new(solver: S, rng: R) -> Carver<S, R> {
        Carver {
            solver,
            rng
        }
    }

    /// Carves the given board to the removal target of the given
    /// [Difficulty]. That is, repeatedly picks a random filled cell, blanks
    /// it, and keeps the removal if the board remains uniquely solvable,
    /// until the target number of cells is removed or the attempt budget is
    /// exhausted. Returns the number of cells actually removed.
    ///
    /// It is expected that the given `board` is full, i.e. contains no empty
    /// cells; its grid is the solution of the resulting puzzle.
    pub fn carve<C>(&mut self, board: &mut Board<C>, difficulty: Difficulty)
        -> usize
    where
        C: Constraint + Clone
    {
        let size = board.grid().size();
        let cells = size * size;
        let target = (cells as f64 * difficulty.removal_fraction()) as usize;
        self.carve_cells(board, target, ATTEMPT_BUDGET_FACTOR * cells)
    }

    /// Carves the given board with an explicit removal target and attempt
    /// budget. Each attempt picks a uniformly random cell; attempts on
    /// already-blank cells and removals that would break unique solvability
    /// are counted against the budget but not against the target. Returns
    /// the number of cells actually removed.
    pub fn carve_cells<C>(&mut self, board: &mut Board<C>, target: usize,
        attempt_budget: usize) -> usize
    where
        C: Constraint + Clone
    {
        let size = board.grid().size();
        let mut removed = 0;

        for _ in 0..attempt_budget {
            if removed >= target {
                break;
            }

            let column = self.rng.gen_range(0..size);
            let row = self.rng.gen_range(0..size);
            let color = match board.grid().get_cell(column, row).unwrap() {
                Some(color) => color,
                None => continue
            };

            board.grid_mut().clear_cell(column, row).unwrap();

            if admits_unique_solution(board, &self.solver) {
                removed += 1;
            }
            else {
                board.grid_mut().set_cell(column, row, color).unwrap();
            }
        }

        debug!("carved {} of {} targeted cells", removed, target);
        removed
    }
}
