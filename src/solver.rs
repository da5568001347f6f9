//! This module contains the logic for solving boards.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation. Besides solving, the backtracking solver doubles
//! as the uniqueness check used during carving: its search terminates as
//! soon as a second distinct completion is found.

use crate::{Board, ColorGrid};
use crate::constraint::Constraint;

/// An enumeration of the different ways a board can be solvable. Note that
/// this may be relative to the solver, since an imperfect solver may be
/// unable to continue at some point, yielding `Solution::Ambiguous`, where
/// the board is actually uniquely solvable or impossible.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the board is not solvable at all.
    Impossible,

    /// Indicates that the board has a unique solution, which is wrapped in
    /// this instance.
    Unique(ColorGrid),

    /// Indicates that the board has multiple solutions or, at least, that
    /// the solver was unable to find a unique one or prove it is impossible.
    Ambiguous
}

impl Solution {

    /// Computes the union of two solutions. This is defined as follows:
    ///
    /// * If one solution is `Solution::Impossible`, the other one is
    /// returned.
    /// * If one solution is `Solution::Ambiguous` then the result is also
    /// ambiguous.
    /// * If both solutions are `Solution::Unique` with solution grids `g1`
    /// and `g2`, then the result is `Solution::Unique(g1)` if `g1 == g2` and
    /// `Solution::Ambiguous` otherwise.
    pub fn union(self, other: Solution) -> Solution {
        match self {
            Solution::Impossible => other,
            Solution::Unique(g) =>
                match other {
                    Solution::Impossible => Solution::Unique(g),
                    Solution::Unique(other_g) =>
                        if g == other_g {
                            Solution::Unique(g)
                        }
                        else {
                            Solution::Ambiguous
                        }
                    Solution::Ambiguous => Solution::Ambiguous
                }
            Solution::Ambiguous => Solution::Ambiguous
        }
    }
}

/// A trait for structs which have the ability to solve boards. Not all
/// implementers must be able to find a unique solution to every uniquely
/// solvable board, some solvers may be less powerful, similar to a less
/// experienced human solver. This may make sense to check whether some board
/// is solvable using some strategy.
pub trait Solver {

    /// Solves, or attempts to solve, the provided board. If the solver
    /// cannot prove that a board is impossible or uniquely solvable (either
    /// because it isn't or the solver is not powerful enough), it shall
    /// return `Solution::Ambiguous`.
    fn solve(&self, board: &Board<impl Constraint + Clone>) -> Solution;
}

/// A perfect [Solver](trait.Solver.html) which solves boards by recursively
/// testing all valid colors for each cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// board has many missing colors.
/// * It can provide the correct [Solution](enum.Solution.html) for any board
/// with any constraint.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(board: &mut Board<impl Constraint + Clone>, column: usize,
            row: usize) -> Solution {
        let size = board.grid().size();
        let last_cell = row == size;

        if last_cell {
            return Solution::Unique(board.grid().clone());
        }

        let next_column = (column + 1) % size;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if board.grid().get_cell(column, row).unwrap().is_some() {
            BacktrackingSolver::solve_rec(board, next_column, next_row)
        }
        else {
            let mut solution = Solution::Impossible;

            for color in 1..=size {
                if board.is_valid_color(column, row, color).unwrap() {
                    board.grid_mut().set_cell(column, row, color).unwrap();
                    let next_solution =
                        BacktrackingSolver::solve_rec(board, next_column,
                            next_row);
                    board.grid_mut().clear_cell(column, row).unwrap();
                    solution = solution.union(next_solution);

                    if solution == Solution::Ambiguous {
                        break;
                    }
                }
            }

            solution
        }
    }

    fn solve(board: &mut Board<impl Constraint + Clone>) -> Solution {
        BacktrackingSolver::solve_rec(board, 0, 0)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, board: &Board<impl Constraint + Clone>) -> Solution {
        let mut clone = board.clone();
        BacktrackingSolver::solve(&mut clone)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::DefaultConstraint;

    fn test_solves_correctly(puzzle: &str, solution: &str) {
        let board = Board::parse(puzzle, DefaultConstraint).unwrap();
        let solver = BacktrackingSolver;
        let found_solution = solver.solve(&board);

        if let Solution::Unique(grid) = found_solution {
            let expected_grid = ColorGrid::parse(solution).unwrap();
            assert_eq!(expected_grid, grid, "Solver gave wrong grid.");
        }
        else {
            panic!("Solvable board marked as impossible or ambiguous.");
        }
    }

    #[test]
    fn backtracking_solves_4x4() {
        let puzzle = "2x2;\
             , , ,4,\
             ,4,3, ,\
             ,3, , ,\
             , ,1, ";
        let solution = "2x2;\
            3,1,2,4,\
            2,4,3,1,\
            1,3,4,2,\
            4,2,1,3";
        test_solves_correctly(puzzle, solution);
    }

    #[test]
    fn backtracking_solves_9x9() {
        let puzzle = "3x3;\
             , , , ,8,1, , , ,\
             , ,2, , ,7,8, , ,\
             ,5,3, , , ,1,7, ,\
            3,7, , , , , , , ,\
            6, , , , , , , ,3,\
             , , , , , , ,2,4,\
             ,6,9, , , ,2,3, ,\
             , ,5,9, , ,4, , ,\
             , , ,6,5, , , , ";
        let solution = "3x3;\
            7,4,6,2,8,1,3,5,9,\
            9,1,2,5,3,7,8,4,6,\
            8,5,3,4,9,6,1,7,2,\
            3,7,4,1,2,5,6,9,8,\
            6,2,8,7,4,9,5,1,3,\
            5,9,1,3,6,8,7,2,4,\
            1,6,9,8,7,4,2,3,5,\
            2,8,5,9,1,3,4,6,7,\
            4,3,7,6,5,2,9,8,1";
        test_solves_correctly(puzzle, solution);
    }

    #[test]
    fn backtracking_detects_impossible() {
        // The top-left cell has no legal color: 1 and 2 are in its row, 3 in
        // its column, and 4 in its region.
        let puzzle = "2x2;\
             ,1, ,2,\
             ,4, , ,\
            3, , , ,\
             , , , ";
        let board = Board::parse(puzzle, DefaultConstraint).unwrap();
        let solver = BacktrackingSolver;

        assert_eq!(Solution::Impossible, solver.solve(&board));
    }

    #[test]
    fn backtracking_detects_ambiguous() {
        let board = Board::new_empty(2, 2, DefaultConstraint).unwrap();
        let solver = BacktrackingSolver;

        assert_eq!(Solution::Ambiguous, solver.solve(&board));
    }

    #[test]
    fn full_board_is_its_own_solution() {
        let code = "2x2;\
            1,2,3,4,\
            3,4,1,2,\
            2,3,4,1,\
            4,1,2,3";
        let board = Board::parse(code, DefaultConstraint).unwrap();
        let solver = BacktrackingSolver;

        assert_eq!(Solution::Unique(board.grid().clone()),
            solver.solve(&board));
    }

    #[test]
    fn union_combines_solutions() {
        let grid = ColorGrid::parse("2x2;\
            1,2,3,4,\
            3,4,1,2,\
            2,3,4,1,\
            4,1,2,3").unwrap();
        let other = ColorGrid::parse("2x2;\
            2,1,4,3,\
            4,3,2,1,\
            1,2,3,4,\
            3,4,1,2").unwrap();

        assert_eq!(Solution::Unique(grid.clone()),
            Solution::Impossible.union(Solution::Unique(grid.clone())));
        assert_eq!(Solution::Unique(grid.clone()),
            Solution::Unique(grid.clone()).union(Solution::Impossible));
        assert_eq!(Solution::Ambiguous,
            Solution::Unique(grid.clone())
                .union(Solution::Unique(other)));
        assert_eq!(Solution::Ambiguous,
            Solution::Ambiguous.union(Solution::Unique(grid)));
        assert_eq!(Solution::Impossible,
            Solution::Impossible.union(Solution::Impossible));
    }
}
