use crate::error::ParseError;
use core::fmt;
use std::str::FromStr;

/// A cell on the grid, addressed by column and row.
///
/// Ordering is lexicographic on (column, row). Priority queues rely on it to pop entries of equal
/// priority in a reproducible order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    column: i32,
    row: i32,
}

impl Coordinate {
    pub const fn new(column: i32, row: i32) -> Coordinate {
        Coordinate { column, row }
    }
    pub const fn column(&self) -> i32 {
        self.column
    }
    pub const fn row(&self) -> i32 {
        self.row
    }
    /// The [L1 distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells.
    pub fn manhattan_distance(&self, other: &Coordinate) -> i32 {
        (self.column - other.column).abs() + (self.row - other.row).abs()
    }
    /// [None] if the shifted cell does not fit in an `i32` coordinate.
    pub(crate) fn offset(&self, column: i32, row: i32) -> Option<Coordinate> {
        Some(Coordinate::new(
            self.column.checked_add(column)?,
            self.row.checked_add(row)?,
        ))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((column, row): (i32, i32)) -> Coordinate {
        Coordinate::new(column, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Parses the `"column, row"` form typed into the parameters dialog.
impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Coordinate, ParseError> {
        let invalid = || ParseError::Coordinate(s.to_owned());
        let (column, row) = s.trim().split_once(',').ok_or_else(invalid)?;
        let column = column.trim().parse::<i32>().map_err(|_| invalid())?;
        let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Coordinate::new(column, row))
    }
}
