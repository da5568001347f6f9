// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand and flexible engine for color
//! grid logic puzzles - Sudoku-style puzzles played with colors instead of
//! numbers. It supports the following key features:
//!
//! * Parsing and printing grids
//! * Checking validity of boards and solutions according to the standard
//! row/column/region rules as well as custom rules
//! * Solving boards using a perfect backtracking algorithm
//! * Generating full solutions and carving playable puzzles out of them at a
//! requested difficulty
//! * Deterministic daily puzzles seeded from a calendar date
//!
//! Note in this introduction we will mostly be using 4x4 grids due to their
//! simpler nature. These are divided in 4 2x2 regions, each containing every
//! color exactly once, just like each row and column. Colors are stored as
//! indices 1 to 4; the [Palette](palette::Palette) maps indices to display
//! colors.
//!
//! # Parsing and printing grids
//!
//! See [ColorGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use colorgrid::ColorGrid;
//!
//! let grid =
//!     ColorGrid::parse("2x2;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity of boards
//!
//! To check validity, an instance of [Board] not only contains the colors
//! (stored in a [ColorGrid]), but also some constraint which specifies the
//! rules. For standard rules,
//! [DefaultConstraint](constraint::DefaultConstraint) can be used.
//!
//! It is possible to check an entire board, individual cells, or potential
//! changes to individual cells that do not require changing the board's
//! state. An example of the former is provided below.
//!
//! ```
//! use colorgrid::Board;
//! use colorgrid::constraint::DefaultConstraint;
//!
//! // Some board for which it is totally unclear whether it is valid.
//! let board = Board::parse("2x2;1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1",
//!     DefaultConstraint).unwrap();
//! assert!(!board.is_valid());
//! ```
//!
//! If you are developing an app that gives feedback to the player, it may be
//! desirable to specify where they made an error. Also, sometimes checking
//! the entire board is redundant, since only one cell has changed. To do
//! this, it is possible to check the validity of just one cell in the grid.
//!
//! ```
//! use colorgrid::Board;
//! use colorgrid::constraint::DefaultConstraint;
//!
//! // A puzzle posed by our app, with colors 1-4:
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │   ║ 1 │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let mut board = Board::parse("2x2; , , ,4, ,4,3, , ,3, , , , ,1, ",
//!     DefaultConstraint).unwrap();
//!
//! // Some (unfortunately wrong) player input to the top-left cell
//! board.grid_mut().set_cell(0, 0, 4).unwrap();
//! assert!(!board.is_valid_cell(0, 0).unwrap());
//! ```
//!
//! Similarly, it is also possible to check a singular cell with a potential
//! new entry, before changing the board, using [Board::is_valid_color].
//!
//! # Solving boards
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! totally or partially solve boards. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which can
//! solve every uniquely solvable board and detect boards with zero or more
//! than one completion.
//!
//! ```
//! use colorgrid::{Board, ColorGrid};
//! use colorgrid::constraint::DefaultConstraint;
//! use colorgrid::solver::{BacktrackingSolver, Solution, Solver};
//!
//! // The same puzzle as in our previous example.
//! let board = Board::parse("2x2; , , ,4, ,4,3, , ,3, , , , ,1, ",
//!     DefaultConstraint).unwrap();
//! let solution = BacktrackingSolver.solve(&board);
//!
//! let expected_solution_grid =
//!     ColorGrid::parse("2x2;3,1,2,4,2,4,3,1,1,3,4,2,4,2,1,3").unwrap();
//!
//! assert_eq!(Solution::Unique(expected_solution_grid), solution);
//! ```
//!
//! # Generating puzzles
//!
//! Puzzle generation is done in two steps: generating a full grid using a
//! [Generator](generator::Generator) and then carving cells out of it using
//! a [Carver](generator::Carver), which only removes a cell if the puzzle
//! remains uniquely solvable. The top-level [engine] module wraps both steps
//! behind a single call that always yields a playable puzzle.
//!
//! ```
//! use colorgrid::engine::{self, GridSize};
//! use colorgrid::generator::Difficulty;
//!
//! let generated = engine::generate_puzzle(GridSize::Four, Difficulty::Easy);
//!
//! assert!(engine::check_win_condition(&generated.solution));
//! assert!(generated.puzzle.is_subset(&generated.solution).unwrap());
//! ```
//!
//! # Note regarding performance
//!
//! Carving relies on repeated uniqueness checks by a backtracking solver,
//! which may be slow in unoptimized builds for 9x9 grids. It is strongly
//! recommended to use at least `opt-level = 2`, even in tests that use
//! puzzle generation.

pub mod constraint;
pub mod daily;
pub mod engine;
pub mod error;
pub mod generator;
pub mod palette;
pub mod solver;
pub mod util;

#[cfg(test)]
mod random_tests;

use constraint::Constraint;
use error::{
    EngineError,
    EngineResult,
    GridParseError,
    GridParseResult
};
use palette::Palette;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// A color grid is composed of cells that are organized into regions of a
/// given width and height in a way that makes the entire grid a square.
/// Consequently, the number of regions in a row is equal to the region
/// height and vice versa. Each cell may or may not be occupied by a color,
/// identified by its 1-based index into the [Palette](palette::Palette).
///
/// In an ordinary 9x9 grid, the region width and height are both 3. Sizes
/// without an integer square root are supported through non-square regions,
/// for example 3x2 regions for a size-6 grid.
///
/// `ColorGrid` implements `Display`, but only grids whose size is covered by
/// the standard palette (at most [MAX_COLORS](palette::MAX_COLORS) colors)
/// can be displayed. Grids of all other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct ColorGrid {
    region_width: usize,
    region_height: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>, palette: &Palette) -> char {
    if let Some(color) = cell {
        palette.code(color).unwrap_or(' ')
    }
    else {
        ' '
    }
}

fn line(grid: &ColorGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.region_width == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &ColorGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &ColorGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &ColorGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &ColorGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &ColorGrid, y: usize, palette: &Palette) -> String {
    line(grid, '║', '║', '│',
        |x| to_char(grid.get_cell(x, y).unwrap(), palette), ' ', '║', true)
}

impl Display for ColorGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let palette = Palette::new(size).map_err(|_| Error::default())?;

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.region_height == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y, &palette).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(color) = cell {
        color.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn parse_dimensions(code: &str) -> Result<(usize, usize), GridParseError> {
    let parts: Vec<&str> = code.split('x').collect();

    if parts.len() != 2 {
        return Err(GridParseError::MalformedDimensions);
    }

    Ok((parts[0].parse()?, parts[1].parse()?))
}

impl ColorGrid {

    /// Creates a new, empty color grid where the regions have the given
    /// dimensions. The total width and height of the grid will be equal to
    /// the product of `region_width` and `region_height`.
    ///
    /// # Arguments
    ///
    /// * `region_width`: The horizontal dimension of one region of the grid.
    /// To ensure a square grid, this is also the number of regions that
    /// compose the grid vertically. For an ordinary 9x9 grid, this is 3.
    /// Must be greater than 0.
    /// * `region_height`: The vertical dimension of one region of the grid.
    /// To ensure a square grid, this is also the number of regions that
    /// compose the grid horizontally. For an ordinary 9x9 grid, this is 3.
    /// Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `region_width` or `region_height` is invalid (zero).
    pub fn new(region_width: usize, region_height: usize)
            -> EngineResult<ColorGrid> {
        if region_width == 0 || region_height == 0 {
            return Err(EngineError::InvalidDimensions);
        }

        let size = region_width * region_height;
        let cells = vec![None; size * size];

        Ok(ColorGrid {
            region_width,
            region_height,
            size,
            cells
        })
    }

    /// Parses a code encoding a color grid. The code has to be of the format
    /// `<region_width>x<region_height>;<cells>` where `<cells>` is a
    /// comma-separated list of entries, which are either empty or a color
    /// index. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting. The
    /// number of entries must match the amount of cells in a grid with the
    /// given dimensions, i.e. it must be `(region_width · region_height)²`.
    ///
    /// As an example, the code `2x2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will
    /// parse to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<ColorGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let (region_width, region_height) = parse_dimensions(parts[0])?;

        if let Ok(mut grid) = ColorGrid::new(region_width, region_height) {
            let size = grid.size();
            let colors: Vec<&str> = parts[1].split(',').collect();

            if colors.len() != size * size {
                return Err(GridParseError::WrongNumberOfCells);
            }

            for (i, color_str) in colors.iter().enumerate() {
                let color_str = color_str.trim();

                if color_str.is_empty() {
                    continue;
                }

                let color = color_str.parse::<usize>()?;

                if color == 0 || color > size {
                    return Err(GridParseError::InvalidColor);
                }

                grid.cells[i] = Some(color);
            }

            Ok(grid)
        }
        else {
            Err(GridParseError::InvalidDimensions)
        }
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [ColorGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated
    /// below.
    ///
    /// ```
    /// use colorgrid::ColorGrid;
    ///
    /// let mut grid = ColorGrid::new(3, 2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = ColorGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{}x{};", self.region_width, self.region_height);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the width (number of columns) of one region of the grid. To
    /// ensure a square grid, this is also the number of regions that compose
    /// the grid vertically.
    pub fn region_width(&self) -> usize {
        self.region_width
    }

    /// Gets the height (number of rows) of one region of the grid. To ensure
    /// a square grid, this is also the number of regions that compose the
    /// grid horizontally.
    pub fn region_height(&self) -> usize {
        self.region_height
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `EngineError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> EngineResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(EngineError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// color. This will return `false` if there is a different color in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `color`: The color index to check for in the specified cell. If it
    /// is *not* in the range `[1, size]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `EngineError::OutOfBounds` is returned.
    pub fn has_color(&self, column: usize, row: usize, color: usize)
            -> EngineResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(color == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// color. If the cell was not empty, the old color will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `color`: The color index to assign to the specified cell. Must be
    /// in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `EngineError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `EngineError::InvalidColor` If `color` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, color: usize)
            -> EngineResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(EngineError::OutOfBounds);
        }

        if color == 0 || color > size {
            return Err(EngineError::InvalidColor);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(color);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a color, that color is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `EngineError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> EngineResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(EngineError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &ColorGrid) -> EngineResult<()> {
        if self.region_width != other.region_width ||
                self.region_height != other.region_height {
            Err(EngineError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`. The other grid must have
    /// the same dimensions as this one.
    ///
    /// # Errors
    ///
    /// If the dimensions are not the same. In that case,
    /// `EngineError::InvalidDimensions` is returned.
    pub fn assign(&mut self, other: &ColorGrid) -> EngineResult<()> {
        self.verify_dimensions(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Counts the number of empty cells in this grid. This is the complement
    /// of [ColorGrid::count_clues].
    pub fn count_blanks(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// color. In this case, [ColorGrid::count_clues] returns the square of
    /// [ColorGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// color. In this case, [ColorGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some color must be filled
    /// in `other` with the same color. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `EngineError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &ColorGrid) -> EngineResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_color) =>
                        match other_cell {
                            Some(other_color) => self_color == other_color,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some color
    /// must be filled in this one with the same color. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `EngineError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &ColorGrid) -> EngineResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }

    /// Gets a mutable reference to the vector which holds the cells. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells_mut(&mut self) -> &mut Vec<Option<usize>> {
        &mut self.cells
    }
}

impl From<ColorGrid> for String {
    fn from(grid: ColorGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for ColorGrid {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<ColorGrid> {
        ColorGrid::parse(code.as_str())
    }
}

/// A parallel boolean matrix marking which cells of a carved puzzle are
/// pre-filled and therefore not editable by the player. It is created at
/// puzzle generation time from the puzzle grid and immutable for the
/// lifetime of a single puzzle instance.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FixedMask {
    size: usize,
    fixed: Vec<bool>
}

impl FixedMask {

    /// Creates the mask belonging to the given puzzle grid. A cell is marked
    /// as fixed exactly if it is filled in the puzzle.
    pub fn of(puzzle: &ColorGrid) -> FixedMask {
        let fixed = puzzle.cells().iter()
            .map(|cell| cell.is_some())
            .collect();

        FixedMask {
            size: puzzle.size(),
            fixed
        }
    }

    /// Gets the size of the grid this mask belongs to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Indicates whether the cell at the specified position is fixed, i.e.
    /// was pre-filled at generation time.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the queried cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the queried cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `EngineError::OutOfBounds` is returned.
    pub fn is_fixed(&self, column: usize, row: usize) -> EngineResult<bool> {
        if column >= self.size || row >= self.size {
            Err(EngineError::OutOfBounds)
        }
        else {
            Ok(self.fixed[index(column, row, self.size)])
        }
    }

    /// Counts the cells marked as fixed by this mask.
    pub fn count_fixed(&self) -> usize {
        self.fixed.iter()
            .filter(|&&fixed| fixed)
            .count()
    }
}

/// A board represents a grid of colors with an associated constraint. The
/// colors may or may not fulfill the constraint, but there is a method to
/// check it.
///
/// There is no guarantee that the board is uniquely solvable or even
/// solvable at all, however there are ways to check that (see the [solver]
/// module).
#[derive(Clone)]
pub struct Board<C: Constraint + Clone> {
    grid: ColorGrid,
    constraint: C
}

impl<C: Constraint + Clone> Board<C> {

    /// Creates a new board with the provided constraint and an empty grid of
    /// the given dimensions. The total width and height of the grid will be
    /// equal to the product of `region_width` and `region_height`.
    ///
    /// # Arguments
    ///
    /// * `region_width`: The horizontal dimension of one region of the grid.
    /// Must be greater than 0.
    /// * `region_height`: The vertical dimension of one region of the grid.
    /// Must be greater than 0.
    /// * `constraint`: The constraint which is checked by this board. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Board::is_valid].
    ///
    /// # Errors
    ///
    /// If `region_width` or `region_height` is invalid (zero).
    pub fn new_empty(region_width: usize, region_height: usize,
            constraint: C) -> EngineResult<Board<C>> {
        Ok(Board {
            grid: ColorGrid::new(region_width, region_height)?,
            constraint
        })
    }

    /// Creates a new board with the provided constraint and a given grid,
    /// which may already contain some colors. Note that it is *not* checked
    /// whether the given grid fulfills the constraint - it is perfectly
    /// legal to create an invalid board here.
    ///
    /// # Arguments
    ///
    /// * `grid`: The initial [ColorGrid] which contains the colors with
    /// which the board is filled.
    /// * `constraint`: The constraint which is checked by this board. Grid
    /// configurations which violate this constraint will be seen as invalid
    /// by [Board::is_valid].
    pub fn new_with_grid(grid: ColorGrid, constraint: C) -> Board<C> {
        Board {
            grid,
            constraint
        }
    }

    /// Parses the code into a [ColorGrid] using [ColorGrid::parse] and wraps
    /// the result in a board with the given constraint. Note that it is not
    /// required that the code matches the constraint. It is perfectly legal
    /// to parse an invalid board.
    ///
    /// # Arguments
    ///
    /// * `code`: The code that specifies the grid. See [ColorGrid::parse]
    /// for a language specification.
    /// * `constraint`: The constraint which is checked by this board.
    ///
    /// # Errors
    ///
    /// If the parsing fails. See [ColorGrid::parse] for further information.
    pub fn parse(code: &str, constraint: C) -> GridParseResult<Board<C>> {
        Ok(Board::new_with_grid(ColorGrid::parse(code)?, constraint))
    }

    /// Gets a reference to the `ColorGrid` of this board.
    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    /// Gets a mutable reference to the `ColorGrid` of this board.
    pub fn grid_mut(&mut self) -> &mut ColorGrid {
        &mut self.grid
    }

    /// Gets a reference to the `Constraint` of this board.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Indicates whether the entire grid matches the constraint.
    pub fn is_valid(&self) -> bool {
        self.constraint.check(&self.grid)
    }

    /// Indicates whether the cell at the given location matches the
    /// constraint. That is, if the specified cell violates the constraint,
    /// `false` is returned, and `true` otherwise.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `EngineError::OutOfBounds` is returned.
    pub fn is_valid_cell(&self, column: usize, row: usize)
            -> EngineResult<bool> {
        let size = self.grid.size();

        if column >= size || row >= size {
            Err(EngineError::OutOfBounds)
        }
        else {
            Ok(self.constraint.check_cell(&self.grid, column, row))
        }
    }

    /// Indicates whether the given color would be valid in the cell at the
    /// given location. That is, if the color violated the constraint,
    /// `false` is returned, and `true` otherwise. The cell's own current
    /// content, if any, does not block the check.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `color`: The color index to check whether it is valid in the given
    /// cell.
    ///
    /// # Errors
    ///
    /// * `EngineError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `EngineError::InvalidColor` If `color` is not in the specified
    /// range.
    pub fn is_valid_color(&self, column: usize, row: usize, color: usize)
            -> EngineResult<bool> {
        let size = self.grid.size();

        if column >= size || row >= size {
            Err(EngineError::OutOfBounds)
        }
        else if color == 0 || color > size {
            Err(EngineError::InvalidColor)
        }
        else {
            Ok(self.constraint.check_color(&self.grid, column, row, color))
        }
    }

    /// Indicates whether the given [ColorGrid] is a valid solution to this
    /// puzzle. That is the case if all colors from this board can be found
    /// in the `solution`, it matches the constraint of this board, and it is
    /// full.
    ///
    /// # Errors
    ///
    /// If the dimensions of this board's grid and the `solution` grid are
    /// not the same. In that case, `EngineError::InvalidDimensions` is
    /// returned.
    pub fn is_valid_solution(&self, solution: &ColorGrid)
            -> EngineResult<bool> {
        Ok(self.grid.is_subset(solution)? &&
            self.constraint.check(solution) &&
            solution.is_full())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::constraint::DefaultConstraint;

    #[test]
    fn parse_ok() {
        let grid_res = ColorGrid::parse("2x2; 1,,,2, ,3,,4, ,2,,, 3,,,");

        if let Ok(grid) = grid_res {
            assert_eq!(2, grid.region_width());
            assert_eq!(2, grid.region_height());
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(None, grid.get_cell(2, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
            assert_eq!(None, grid.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), grid.get_cell(1, 1).unwrap());
            assert_eq!(None, grid.get_cell(2, 1).unwrap());
            assert_eq!(Some(4), grid.get_cell(3, 1).unwrap());
            assert_eq!(None, grid.get_cell(0, 2).unwrap());
            assert_eq!(Some(2), grid.get_cell(1, 2).unwrap());
            assert_eq!(None, grid.get_cell(2, 2).unwrap());
            assert_eq!(None, grid.get_cell(3, 2).unwrap());
            assert_eq!(Some(3), grid.get_cell(0, 3).unwrap());
            assert_eq!(None, grid.get_cell(1, 3).unwrap());
            assert_eq!(None, grid.get_cell(2, 3).unwrap());
            assert_eq!(None, grid.get_cell(3, 3).unwrap());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_malformed_dimensions() {
        assert_eq!(Err(GridParseError::MalformedDimensions),
            ColorGrid::parse("2x2x2;,,,,,,,,,,,,,,,"));
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(GridParseError::InvalidDimensions),
            ColorGrid::parse("2x0;,"));
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(GridParseError::WrongNumberOfParts),
            ColorGrid::parse("2x2;,,,,,,,,,,,,,,,;whatever"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(GridParseError::NumberFormatError),
            ColorGrid::parse("2x#;,"));
    }

    #[test]
    fn parse_invalid_color() {
        assert_eq!(Err(GridParseError::InvalidColor),
            ColorGrid::parse("2x2;,,,4,,,5,,,,,,,,,"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            ColorGrid::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3"));
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            ColorGrid::parse("2x2;1,2,3,4,1,2,3,4,1,2,3,4,1,2,3,4,1"));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = ColorGrid::new(2, 2).unwrap();

        assert_eq!("2x2;,,,,,,,,,,,,,,,", grid.to_parseable_string().as_str());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 1, 2).unwrap();
        grid.set_cell(2, 2, 3).unwrap();
        grid.set_cell(3, 3, 4).unwrap();

        assert_eq!("2x2;1,,,,,2,,,,,3,,,,,4",
            grid.to_parseable_string().as_str());

        let grid = ColorGrid::new(4, 1).unwrap();

        assert_eq!("4x1;,,,,,,,,,,,,,,,", grid.to_parseable_string().as_str());
    }

    #[test]
    fn serde_string_round_trip() {
        let grid = ColorGrid::parse("2x2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let json = serde_json::to_string(&grid).unwrap();

        assert_eq!("\"2x2;1,,3,2,4,,,,,,,,,,1,\"", json.as_str());

        let deserialized: ColorGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, deserialized);
    }

    #[test]
    fn size() {
        let grid1x1 = ColorGrid::new(1, 1).unwrap();
        let grid3x2 = ColorGrid::new(3, 2).unwrap();
        let grid3x4 = ColorGrid::new(3, 4).unwrap();
        assert_eq!(1, grid1x1.size());
        assert_eq!(6, grid3x2.size());
        assert_eq!(12, grid3x4.size());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = ColorGrid::parse("2x2;,,,,,,,,,,,,,,,").unwrap();
        let partial = ColorGrid::parse("2x2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let full = ColorGrid::parse("2x2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4")
            .unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert_eq!(16, empty.count_blanks());
        assert_eq!(11, partial.count_blanks());
        assert_eq!(0, full.count_blanks());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &ColorGrid, b: &ColorGrid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b).unwrap() == a_subset_b);
        assert!(a.is_superset(b).unwrap() == b_subset_a);
        assert!(b.is_subset(a).unwrap() == b_subset_a);
        assert!(b.is_superset(a).unwrap() == a_subset_b);
    }

    fn assert_true_subset(a: &ColorGrid, b: &ColorGrid) {
        assert_subset_relation(a, b, true, false)
    }

    fn assert_equal_set(a: &ColorGrid, b: &ColorGrid) {
        assert_subset_relation(a, b, true, true)
    }

    fn assert_unrelated_set(a: &ColorGrid, b: &ColorGrid) {
        assert_subset_relation(a, b, false, false)
    }

    #[test]
    fn empty_is_subset() {
        let empty = ColorGrid::new(2, 2).unwrap();
        let non_empty = ColorGrid::parse("2x2;1,,,,,,,,,,,,,,,").unwrap();
        let full = ColorGrid::parse("2x2;1,2,3,4,3,4,1,2,2,3,1,4,4,1,3,2")
            .unwrap();

        assert_equal_set(&empty, &empty);
        assert_true_subset(&empty, &non_empty);
        assert_true_subset(&empty, &full);
    }

    #[test]
    fn equal_grids_subsets() {
        let g = ColorGrid::parse("2x2;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        assert_equal_set(&g, &g);
    }

    #[test]
    fn true_subset() {
        let g1 = ColorGrid::parse("2x2;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let g2 = ColorGrid::parse("2x2;1,2,3,,2,,3,,4,,4,3,,,1,2").unwrap();
        assert_true_subset(&g1, &g2);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        // g1 and g2 differ in the third entry (3 in g1, 4 in g2)
        let g1 = ColorGrid::parse("2x2;1,,3,,2,,,,4,,4,3,,,,2").unwrap();
        let g2 = ColorGrid::parse("2x2;1,2,4,,2,,3,,4,,4,3,,,1,2").unwrap();
        assert_unrelated_set(&g1, &g2);
    }

    #[test]
    fn fixed_mask_marks_clues() {
        let puzzle = ColorGrid::parse("2x2;1,,3,2,4,,,,,,,,,,1,").unwrap();
        let mask = FixedMask::of(&puzzle);

        assert_eq!(4, mask.size());
        assert_eq!(5, mask.count_fixed());
        assert!(mask.is_fixed(0, 0).unwrap());
        assert!(!mask.is_fixed(1, 0).unwrap());
        assert!(!mask.is_fixed(3, 1).unwrap());
        assert!(mask.is_fixed(0, 1).unwrap());
        assert!(!mask.is_fixed(3, 3).unwrap());
        assert_eq!(Err(EngineError::OutOfBounds), mask.is_fixed(4, 0));
    }

    fn solution_example_board() -> Board<DefaultConstraint> {
        Board::parse("2x2;\
            2, , , ,\
             , ,3, ,\
             , , ,4,\
             ,2, , ", DefaultConstraint).unwrap()
    }

    #[test]
    fn solution_not_full() {
        let board = solution_example_board();
        let solution = ColorGrid::parse("2x2;\
            2,3,4,1,\
            1,4,3, ,\
            3,1,2,4,\
            4,2,1,3").unwrap();
        assert!(!board.is_valid_solution(&solution).unwrap());
    }

    #[test]
    fn solution_not_superset() {
        let board = solution_example_board();
        let solution = ColorGrid::parse("2x2;\
            2,3,4,1,\
            1,4,3,2,\
            3,2,1,4,\
            4,1,2,3").unwrap();
        assert!(!board.is_valid_solution(&solution).unwrap());
    }

    #[test]
    fn solution_violates_constraint() {
        let board = solution_example_board();
        let solution = ColorGrid::parse("2x2;\
            2,3,4,1,\
            1,3,3,2,\
            3,1,2,4,\
            4,2,1,3").unwrap();
        assert!(!board.is_valid_solution(&solution).unwrap());
    }

    #[test]
    fn solution_correct() {
        let board = solution_example_board();
        let solution = ColorGrid::parse("2x2;\
            2,3,4,1,\
            1,4,3,2,\
            3,1,2,4,\
            4,2,1,3").unwrap();
        assert!(board.is_valid_solution(&solution).unwrap());
    }
}
