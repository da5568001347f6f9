//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [GridParseError](enum.GridParseError.html) for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineError {

    /// Indicates that the dimensions specified for a created grid are
    /// invalid. This is the case if they are less than 1 or, for operations
    /// involving the [Palette](crate::palette::Palette), if the resulting
    /// size exceeds the number of available colors.
    InvalidDimensions,

    /// Indicates that some color index is invalid for the size of the grid
    /// in question. This is the case if it is less than 1 or greater than
    /// the size.
    InvalidColor,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to generate a grid
    /// with a constraint that is not satisfied by any grid with the given
    /// parameters.
    UnsatisfiableConstraint
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDimensions =>
                write!(f, "invalid grid dimensions"),
            EngineError::InvalidColor =>
                write!(f, "color index out of range for grid size"),
            EngineError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid"),
            EngineError::UnsatisfiableConstraint =>
                write!(f, "no grid satisfies the constraint")
        }
    }
}

impl Error for EngineError { }

/// Syntactic sugar for `Result<V, EngineError>`.
pub type EngineResult<V> = Result<V, EngineError>;

/// An enumeration of the errors that may occur when parsing a `ColorGrid` or
/// `Board`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: dimensions
    /// and cells (separated by ';'), so if the code does not contain exactly
    /// one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the dimensions.
    WrongNumberOfCells,

    /// Indicates that the dimensions have the wrong format. They should be
    /// of the form `<region_width>x<region_height>`, so if the amount of 'x's
    /// in the dimension string is not exactly one, this error will be
    /// raised.
    MalformedDimensions,

    /// Indicates that the provided dimensions are invalid (i.e. at least one
    /// is zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (dimension or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid color index (0 or
    /// more than the grid size).
    InvalidColor
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfParts =>
                write!(f, "grid code must have exactly two parts"),
            GridParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells for the given dimensions"),
            GridParseError::MalformedDimensions =>
                write!(f, "dimensions must have the form <width>x<height>"),
            GridParseError::InvalidDimensions =>
                write!(f, "dimensions must be greater than zero"),
            GridParseError::NumberFormatError =>
                write!(f, "could not parse number in grid code"),
            GridParseError::InvalidColor =>
                write!(f, "color index out of range for grid size")
        }
    }
}

impl Error for GridParseError { }

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}
