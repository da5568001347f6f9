//! This module defines constraints which can be applied to color grids, thus
//! specifying the rules of the puzzle.
//!
//! Besides the definition of the [Constraint] trait, this module contains
//! the predefined constraints for the standard rules: no duplicate colors in
//! any row ([RowConstraint]), column ([ColumnConstraint]), or region
//! ([RegionConstraint]). Their conjunction is available as
//! [DefaultConstraint], which encodes the full placement invariant of the
//! game. Two constraints can be combined with a [CompositeConstraint].
//!
//! # Custom constraints
//!
//! When implementing a constraint, it is usually sufficient to implement
//! [Constraint::check_color] and [Constraint::get_groups]. All other methods
//! are default-implemented. However, the performance of [Constraint::check]
//! can be improved by a specialized implementation, since by default it
//! calls `check_color` for every cell.
//!
//! As an example, the source code of a main-diagonal constraint, which
//! requires the diagonal from the top-left to the bottom-right corner to
//! contain no repeated colors:
//!
//! ```
//! use colorgrid::ColorGrid;
//! use colorgrid::constraint::{Constraint, Group};
//!
//! #[derive(Clone)]
//! struct MainDiagonalConstraint;
//!
//! impl Constraint for MainDiagonalConstraint {
//!     fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
//!             color: usize) -> bool {
//!         // For all cells on the diagonal, the column index is equal to
//!         // the row index. All other cells don't interact with this
//!         // constraint, so we return true, indicating that they don't
//!         // violate it.
//!         if column == row {
//!             let size = grid.size();
//!
//!             for i in 0..size {
//!                 // Since column == row, if i == column we are looking at
//!                 // the checked cell itself, which may contain the color.
//!                 if i != column &&
//!                         grid.has_color(i, i, color).unwrap() {
//!                     return false;
//!                 }
//!             }
//!         }
//!
//!         true
//!     }
//!
//!     fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
//!         // There is one group in this case: the main diagonal.
//!         let size = grid.size();
//!         let mut group = Group::new();
//!
//!         for i in 0..size {
//!             group.push((i, i));
//!         }
//!
//!         vec![ group ]
//!     }
//! }
//! ```
//!
//! Deriving `Clone` is important, since occasionally boards need to be
//! cloned. [Board](crate::Board) therefore implements `Clone`, which
//! requires its constraint to be cloneable as well.

use crate::ColorGrid;
use crate::util::ColorSet;

use serde::{Deserialize, Serialize};

/// A group of cells, represented by a vector of their coordinates in the
/// form `(column, row)`. Within a group, no color may repeat.
pub type Group = Vec<(usize, usize)>;

#[inline]
fn default_check<C>(this: &C, grid: &ColorGrid) -> bool
where
    C: Constraint + ?Sized
{
    let size = grid.size();

    for row in 0..size {
        for column in 0..size {
            if !this.check_cell(grid, column, row) {
                return false;
            }
        }
    }

    true
}

#[inline]
fn default_check_cell<C>(this: &C, grid: &ColorGrid, column: usize,
    row: usize) -> bool
where
    C: Constraint + ?Sized
{
    if let Some(color) = grid.get_cell(column, row).unwrap() {
        this.check_color(grid, column, row, color)
    }
    else {
        true
    }
}

/// A constraint defines some property on a color grid. These are essentially
/// the rules of the puzzle. In the standard game these are "no duplicates in
/// a row" ([RowConstraint]), "no duplicates in a column"
/// ([ColumnConstraint]), and "no duplicates in a region"
/// ([RegionConstraint]). Here, however, the design is more flexible to allow
/// for custom constraints.
///
/// By default, implementors of this trait only need to implement the
/// `check_color` associated function, which verifies a proposed color for a
/// specified cell, and `get_groups`. `check_cell` and `check` are
/// implemented by default based on it, however `check` in particular may be
/// very inefficient compared to a specialized implementation (it checks
/// every cell using `check_color`).
pub trait Constraint {

    /// Checks whether the given [ColorGrid] matches this constraint, that
    /// is, every cell matches this constraint. By default, this runs
    /// `check_cell` on every cell of the grid, which may be inefficient, so
    /// custom implementations may be advantageous.
    fn check(&self, grid: &ColorGrid) -> bool {
        default_check(self, grid)
    }

    /// Checks whether the cell at the given position in the [ColorGrid]
    /// fulfills the constraint. This is the same as calling `check_color`
    /// with the same coordinates and the color which is actually filled in
    /// that cell. If the cell is empty, this function always returns `true`.
    fn check_cell(&self, grid: &ColorGrid, column: usize, row: usize)
            -> bool {
        default_check_cell(self, grid, column, row)
    }

    /// Checks whether the given `color` would fit into the cell specified by
    /// `column` and `row` into the `grid` without violating this constraint.
    /// The cell under test is excluded from the comparison, i.e. its own
    /// current content does not block the candidate. This function does
    /// *not* have to check whether `color` is actually a valid color index
    /// for this grid (i.e. in the interval `[1, size]`). If you require this
    /// guarantee, use [Board::is_valid_color](crate::Board::is_valid_color)
    /// instead.
    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
        color: usize) -> bool;

    /// Gets a vector of all groups that are defined by this constraint. A
    /// group is a set of cells which may not contain repeated colors. As an
    /// example, the [RegionConstraint] defines each region as a group.
    /// Groups are used by the win checker and can be used by a UI layer to
    /// highlight the cells affected by a conflict.
    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group>;
}

/// A [Constraint] that there are no duplicate colors in each row.
#[derive(Clone, Deserialize, Serialize)]
pub struct RowConstraint;

impl Constraint for RowConstraint {
    fn check(&self, grid: &ColorGrid) -> bool {
        let size = grid.size();
        let mut set = ColorSet::new(size).unwrap();

        for row in 0..size {
            set.clear();

            for column in 0..size {
                if let Some(color) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(color).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        let size = grid.size();

        for other_column in 0..size {
            if other_column != column &&
                    grid.has_color(other_column, row, color).unwrap() {
                return false;
            }
        }

        true
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        let size = grid.size();
        let mut groups = Vec::new();

        for row in 0..size {
            let mut group = Group::new();

            for column in 0..size {
                group.push((column, row));
            }

            groups.push(group);
        }

        groups
    }
}

/// A [Constraint] that there are no duplicate colors in each column.
#[derive(Clone, Deserialize, Serialize)]
pub struct ColumnConstraint;

impl Constraint for ColumnConstraint {
    fn check(&self, grid: &ColorGrid) -> bool {
        let size = grid.size();
        let mut set = ColorSet::new(size).unwrap();

        for column in 0..size {
            set.clear();

            for row in 0..size {
                if let Some(color) = grid.get_cell(column, row).unwrap() {
                    if !set.insert(color).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        let size = grid.size();

        for other_row in 0..size {
            if other_row != row &&
                    grid.has_color(column, other_row, color).unwrap() {
                return false;
            }
        }

        true
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        let size = grid.size();
        let mut groups = Vec::new();

        for column in 0..size {
            let mut group = Group::new();

            for row in 0..size {
                group.push((column, row));
            }

            groups.push(group);
        }

        groups
    }
}

fn check_color_region(grid: &ColorGrid, column: usize, row: usize,
        color: usize, bop: impl Fn(bool, bool) -> bool) -> bool {
    let region_width = grid.region_width();
    let region_height = grid.region_height();
    let region_column = (column / region_width) * region_width;
    let region_row = (row / region_height) * region_height;

    for other_row in region_row..(region_row + region_height) {
        for other_column in region_column..(region_column + region_width) {
            if bop(other_row != row, other_column != column) &&
                    grid.has_color(other_column, other_row, color).unwrap() {
                return false;
            }
        }
    }

    true
}

fn get_groups_region(grid: &ColorGrid) -> Vec<Group> {
    let region_width = grid.region_width();
    let region_height = grid.region_height();
    let mut groups = Vec::new();

    for region_row in 0..region_width {
        let base_row = region_row * region_height;

        for region_column in 0..region_height {
            let base_column = region_column * region_width;
            let mut group = Group::new();

            for sub_row in 0..region_height {
                let row = base_row + sub_row;

                for sub_column in 0..region_width {
                    let column = base_column + sub_column;
                    group.push((column, row));
                }
            }

            groups.push(group);
        }
    }

    groups
}

fn check_region(grid: &ColorGrid) -> bool {
    let region_width = grid.region_width();
    let region_height = grid.region_height();
    let size = grid.size();
    let mut set = ColorSet::new(size).unwrap();

    for region_row in 0..region_width {
        for region_column in 0..region_height {
            set.clear();

            let start_column = region_column * region_width;
            let start_row = region_row * region_height;

            for row in start_row..(start_row + region_height) {
                for column in start_column..(start_column + region_width) {
                    if let Some(color) =
                            grid.get_cell(column, row).unwrap() {
                        if !set.insert(color).unwrap() {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// A [Constraint] that there are no duplicate colors in each region.
#[derive(Clone, Deserialize, Serialize)]
pub struct RegionConstraint;

impl Constraint for RegionConstraint {
    fn check(&self, grid: &ColorGrid) -> bool {
        check_region(grid)
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        check_color_region(grid, column, row, color, |a, b| a || b)
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        get_groups_region(grid)
    }
}

/// Similar to [RegionConstraint], but does not check cells in the same row
/// and column to save some time. For use in the [DefaultConstraint], where
/// those cells are already covered by the row and column constraints.
#[derive(Clone, Deserialize, Serialize)]
struct RegionConstraintNoLineColumn;

impl Constraint for RegionConstraintNoLineColumn {
    fn check(&self, grid: &ColorGrid) -> bool {
        check_region(grid)
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        check_color_region(grid, column, row, color, |a, b| a && b)
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        get_groups_region(grid)
    }
}

/// The default [Constraint] which is a logical conjunction of
/// [RowConstraint], [ColumnConstraint], and [RegionConstraint]. This is the
/// placement invariant of the standard game: every row, column, and region
/// contains each color at most once, and exactly once in a full grid.
#[derive(Clone, Deserialize, Serialize)]
pub struct DefaultConstraint;

impl Constraint for DefaultConstraint {
    fn check(&self, grid: &ColorGrid) -> bool {
        RowConstraint.check(grid) &&
        ColumnConstraint.check(grid) &&
        RegionConstraintNoLineColumn.check(grid)
    }

    fn check_cell(&self, grid: &ColorGrid, column: usize, row: usize)
            -> bool {
        RowConstraint.check_cell(grid, column, row) &&
        ColumnConstraint.check_cell(grid, column, row) &&
        RegionConstraintNoLineColumn.check_cell(grid, column, row)
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        RowConstraint.check_color(grid, column, row, color) &&
        ColumnConstraint.check_color(grid, column, row, color) &&
        RegionConstraintNoLineColumn.check_color(grid, column, row, color)
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        let mut groups = RowConstraint.get_groups(grid);
        groups.append(&mut ColumnConstraint.get_groups(grid));
        groups.append(&mut RegionConstraint.get_groups(grid));
        groups
    }
}

/// A [Constraint] which simultaneously enforces two other constraints. This
/// allows the construction of complex constraints by nesting composite
/// constraints.
///
/// As an example, a constraint with [RowConstraint] and [ColumnConstraint]
/// but without region checking would be constructed as follows:
///
/// ```
/// use colorgrid::constraint::{
///     ColumnConstraint,
///     CompositeConstraint,
///     RowConstraint
/// };
///
/// let constraint = CompositeConstraint::new(RowConstraint, ColumnConstraint);
/// ```
#[derive(Clone, Deserialize, Serialize)]
pub struct CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    c1: C1,
    c2: C2
}

impl<C1, C2> CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    /// Creates a new composite constraint from the two child constraints
    /// which will be enforced.
    pub fn new(c1: C1, c2: C2) -> CompositeConstraint<C1, C2> {
        CompositeConstraint {
            c1,
            c2
        }
    }

    /// Gets a reference to the first child constraint.
    pub fn first(&self) -> &C1 {
        &self.c1
    }

    /// Gets a reference to the second child constraint.
    pub fn second(&self) -> &C2 {
        &self.c2
    }
}

impl<C1, C2> Constraint for CompositeConstraint<C1, C2>
where
    C1: Constraint + Clone + 'static,
    C2: Constraint + Clone + 'static
{
    fn check(&self, grid: &ColorGrid) -> bool {
        self.c1.check(grid) && self.c2.check(grid)
    }

    fn check_cell(&self, grid: &ColorGrid, column: usize, row: usize)
            -> bool {
        self.c1.check_cell(grid, column, row) &&
            self.c2.check_cell(grid, column, row)
    }

    fn check_color(&self, grid: &ColorGrid, column: usize, row: usize,
            color: usize) -> bool {
        self.c1.check_color(grid, column, row, color) &&
            self.c2.check_color(grid, column, row, color)
    }

    fn get_groups(&self, grid: &ColorGrid) -> Vec<Group> {
        let mut groups = self.c1.get_groups(grid);
        groups.append(&mut self.c2.get_groups(grid));
        groups
    }
}
