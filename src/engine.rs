//! This module contains the top-level puzzle generation API consumed by UI
//! and session code.
//!
//! The central entry point is [generate_puzzle], which wraps the
//! [Generator](crate::generator::Generator) and
//! [Carver](crate::generator::Carver) pipeline behind a call that always
//! yields a playable puzzle: any failure inside generation is caught at this
//! boundary and converted into a known-safe fallback puzzle. The module also
//! provides the pure helper functions [is_valid_placement] and
//! [check_win_condition] for validating player moves and completed grids.

use crate::{ColorGrid, FixedMask};
use crate::constraint::{Constraint, DefaultConstraint};
use crate::error::{EngineError, EngineResult};
use crate::generator::{Carver, Difficulty, Generator};
use crate::solver::BacktrackingSolver;
use crate::util::ColorSet;

use log::warn;

use rand::Rng;

use serde::{Deserialize, Serialize};

/// The publicly supported grid sizes. The core engine accepts any region
/// dimensions, but the game exposes these two.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GridSize {

    /// A 4x4 grid with 2x2 regions.
    Four,

    /// A 9x9 grid with 3x3 regions.
    Nine
}

impl GridSize {

    /// Gets the width of one region of a grid of this size.
    pub fn region_width(self) -> usize {
        match self {
            GridSize::Four => 2,
            GridSize::Nine => 3
        }
    }

    /// Gets the height of one region of a grid of this size.
    pub fn region_height(self) -> usize {
        match self {
            GridSize::Four => 2,
            GridSize::Nine => 3
        }
    }

    /// Gets the side length of a grid of this size.
    pub fn size(self) -> usize {
        self.region_width() * self.region_height()
    }
}

/// A generated puzzle together with its solution and fixed mask. The puzzle
/// and solution are immutable once generated; the caller derives the mutable
/// player grid from the puzzle and hands snapshots back to the engine for
/// validation. All contained data is serializable so the caller can persist
/// the current puzzle state.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratedPuzzle {

    /// The carved puzzle grid. Blank cells are to be filled by the player.
    pub puzzle: ColorGrid,

    /// The full solution the puzzle was carved from. Every filled cell of
    /// the puzzle matches this grid.
    pub solution: ColorGrid,

    /// The mask marking the pre-filled cells of the puzzle.
    pub fixed: FixedMask,

    /// The difficulty the puzzle was carved at. Note that if the carver's
    /// attempt budget ran out, the puzzle may be easier than this.
    pub difficulty: Difficulty
}

// The fallback puzzle handed out when generation fails. One cell per row is
// blanked and each is the only color missing from its row, so the solution
// is forced.
const FALLBACK_SOLUTION: &str = "2x2;\
    1,2,3,4,\
    3,4,1,2,\
    2,3,4,1,\
    4,1,2,3";
const FALLBACK_PUZZLE: &str = "2x2;\
     ,2,3,4,\
    3,4, ,2,\
    2, ,4,1,\
    4,1,2, ";

pub(crate) fn fallback_puzzle() -> GeneratedPuzzle {
    let puzzle = ColorGrid::parse(FALLBACK_PUZZLE).unwrap();
    let solution = ColorGrid::parse(FALLBACK_SOLUTION).unwrap();
    let fixed = FixedMask::of(&puzzle);

    GeneratedPuzzle {
        puzzle,
        solution,
        fixed,
        difficulty: Difficulty::Easy
    }
}

pub(crate) fn generate_with_rng<R: Rng>(grid_size: GridSize,
    difficulty: Difficulty, mut rng: R) -> EngineResult<GeneratedPuzzle>
{
    let mut generator = Generator::new(&mut rng);
    let mut board = generator.generate(grid_size.region_width(),
        grid_size.region_height(), DefaultConstraint)?;
    let solution = board.grid().clone();

    let mut carver = Carver::new(BacktrackingSolver, &mut rng);
    carver.carve(&mut board, difficulty);

    let puzzle = board.grid().clone();
    let fixed = FixedMask::of(&puzzle);

    Ok(GeneratedPuzzle {
        puzzle,
        solution,
        fixed,
        difficulty
    })
}

pub(crate) fn generate_or_fallback<R: Rng>(grid_size: GridSize,
    difficulty: Difficulty, rng: R) -> GeneratedPuzzle
{
    match generate_with_rng(grid_size, difficulty, rng) {
        Ok(generated) => generated,
        Err(error) => {
            warn!("puzzle generation failed ({}), using fallback", error);
            fallback_puzzle()
        }
    }
}

/// Generates a new puzzle of the given size and difficulty, together with
/// its solution and fixed mask. This function never fails: if generation
/// runs into an error, a known-safe 4x4 fallback puzzle is returned instead,
/// so the caller always has a playable grid.
///
/// ```
/// use colorgrid::engine::{self, GridSize};
/// use colorgrid::generator::Difficulty;
///
/// let generated = engine::generate_puzzle(GridSize::Four, Difficulty::Easy);
///
/// assert!(engine::check_win_condition(&generated.solution));
/// assert!(generated.puzzle.is_subset(&generated.solution).unwrap());
/// ```
pub fn generate_puzzle(grid_size: GridSize, difficulty: Difficulty)
        -> GeneratedPuzzle {
    generate_or_fallback(grid_size, difficulty, rand::thread_rng())
}

/// Indicates whether the given color would be a legal entry for the cell at
/// the given position under the standard rules, that is, no other cell in
/// the same row, column, or region currently holds the color. The cell's own
/// current content does not block the check.
///
/// # Arguments
///
/// * `grid`: The grid to check against, typically a snapshot of the player
/// grid.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, size[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, size[`.
/// * `color`: The color index to check. Must be in the range `[1, size]`.
///
/// # Errors
///
/// * `EngineError::OutOfBounds` If either `column` or `row` are not in the
/// specified range.
/// * `EngineError::InvalidColor` If `color` is not in the specified range.
pub fn is_valid_placement(grid: &ColorGrid, column: usize, row: usize,
        color: usize) -> EngineResult<bool> {
    let size = grid.size();

    if column >= size || row >= size {
        Err(EngineError::OutOfBounds)
    }
    else if color == 0 || color > size {
        Err(EngineError::InvalidColor)
    }
    else {
        Ok(DefaultConstraint.check_color(grid, column, row, color))
    }
}

/// Indicates whether the given grid is a winning configuration, that is, it
/// is full and every row, column, and region contains each color exactly
/// once. This is the check to run on a snapshot of the player grid after
/// each move that fills the last blank cell.
pub fn check_win_condition(grid: &ColorGrid) -> bool {
    if !grid.is_full() {
        return false;
    }

    let size = grid.size();
    let mut set = ColorSet::new(size).unwrap();

    for group in DefaultConstraint.get_groups(grid) {
        set.clear();

        for (column, row) in group {
            let color = grid.get_cell(column, row).unwrap().unwrap();

            if !set.insert(color).unwrap() {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::Board;
    use crate::solver::{Solution, Solver};

    #[test]
    fn generated_puzzle_is_playable() {
        let generated =
            generate_puzzle(GridSize::Four, Difficulty::Medium);

        assert!(check_win_condition(&generated.solution));
        assert!(generated.puzzle.is_subset(&generated.solution).unwrap());
        assert_eq!(Solution::Unique(generated.solution.clone()),
            BacktrackingSolver.solve(&Board::new_with_grid(
                generated.puzzle.clone(), DefaultConstraint)));
    }

    #[test]
    fn fixed_mask_matches_puzzle_clues() {
        let generated = generate_puzzle(GridSize::Four, Difficulty::Easy);
        let size = generated.puzzle.size();

        assert_eq!(generated.puzzle.count_clues(),
            generated.fixed.count_fixed());

        for row in 0..size {
            for column in 0..size {
                let filled =
                    generated.puzzle.get_cell(column, row).unwrap().is_some();
                assert_eq!(filled,
                    generated.fixed.is_fixed(column, row).unwrap());
            }
        }
    }

    #[test]
    fn fallback_puzzle_is_safe() {
        let fallback = fallback_puzzle();

        assert!(check_win_condition(&fallback.solution));
        assert!(fallback.puzzle.is_subset(&fallback.solution).unwrap());
        assert_eq!(Solution::Unique(fallback.solution.clone()),
            BacktrackingSolver.solve(&Board::new_with_grid(
                fallback.puzzle.clone(), DefaultConstraint)));
    }

    #[test]
    fn placement_duplicate_in_row_rejected() {
        let mut grid = ColorGrid::new(2, 2).unwrap();
        grid.set_cell(0, 0, 1).unwrap();

        assert!(!is_valid_placement(&grid, 2, 0, 1).unwrap());
    }

    #[test]
    fn placement_on_empty_grid_accepted() {
        let grid = ColorGrid::new(2, 2).unwrap();

        assert!(is_valid_placement(&grid, 0, 0, 1).unwrap());
    }

    #[test]
    fn placement_duplicate_in_column_and_region_rejected() {
        let mut grid = ColorGrid::new(2, 2).unwrap();
        grid.set_cell(0, 0, 2).unwrap();

        // same column
        assert!(!is_valid_placement(&grid, 0, 3, 2).unwrap());

        // same region, different row and column
        assert!(!is_valid_placement(&grid, 1, 1, 2).unwrap());

        // unrelated cell
        assert!(is_valid_placement(&grid, 2, 2, 2).unwrap());
    }

    #[test]
    fn placement_input_validation() {
        let grid = ColorGrid::new(2, 2).unwrap();

        assert_eq!(Err(EngineError::OutOfBounds),
            is_valid_placement(&grid, 4, 0, 1));
        assert_eq!(Err(EngineError::InvalidColor),
            is_valid_placement(&grid, 0, 0, 0));
        assert_eq!(Err(EngineError::InvalidColor),
            is_valid_placement(&grid, 0, 0, 5));
    }

    #[test]
    fn win_condition_rejects_blanks() {
        let mut grid = ColorGrid::parse(FALLBACK_SOLUTION).unwrap();

        assert!(check_win_condition(&grid));

        grid.clear_cell(1, 1).unwrap();
        assert!(!check_win_condition(&grid));
    }

    #[test]
    fn win_condition_rejects_duplicates() {
        let mut grid = ColorGrid::parse(FALLBACK_SOLUTION).unwrap();

        // Introduce a duplicate without leaving a blank.
        grid.set_cell(0, 0, 2).unwrap();
        assert!(!check_win_condition(&grid));
    }

    #[test]
    fn grid_size_dimensions() {
        assert_eq!(4, GridSize::Four.size());
        assert_eq!(9, GridSize::Nine.size());
        assert_eq!(2, GridSize::Four.region_width());
        assert_eq!(3, GridSize::Nine.region_height());
    }
}
