use crate::coordinate::Coordinate;
use crate::error::SearchError;
use core::fmt;
use itertools::Itertools;

/// Outcome of a search: the [Path] found or why there is none.
pub type PathResult = Result<Path, SearchError>;

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops, including repeated pops of cells pushed more than once.
    pub expanded: usize,
    /// Frontier pushes, the start included.
    pub discovered: usize,
    /// Largest number of frontier entries at once. A cell pushed twice counts twice until both
    /// entries are popped.
    pub peak_frontier: usize,
}

/// A path found by a search. The cells between `start` and `end` are stored as the interior; the
/// endpoints themselves are only included by [cells](Self::cells).
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub start: Coordinate,
    pub end: Coordinate,
    pub interior: Vec<Coordinate>,
    pub stats: SearchStats,
}

impl Path {
    pub fn interior(&self) -> &[Coordinate] {
        &self.interior
    }
    pub fn into_interior(self) -> Vec<Coordinate> {
        self.interior
    }
    /// Number of steps from start to end.
    pub fn edge_count(&self) -> usize {
        if self.start == self.end {
            0
        } else {
            self.interior.len() + 1
        }
    }
    /// Every cell from start to end. When start equals end it is listed once.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let end = (self.start != self.end).then_some(self.end);
        std::iter::once(self.start)
            .chain(self.interior.iter().copied())
            .chain(end)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cells().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(start: (i32, i32), end: (i32, i32), interior: &[(i32, i32)]) -> Path {
        Path {
            start: start.into(),
            end: end.into(),
            interior: interior.iter().map(|&c| c.into()).collect(),
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn cells_include_endpoints() {
        let p = path((0, 0), (2, 0), &[(1, 0)]);
        assert_eq!(p.edge_count(), 2);
        assert_eq!(
            p.cells().collect::<Vec<_>>(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0)
            ]
        );
        assert_eq!(p.to_string(), "(0, 0) -> (1, 0) -> (2, 0)");
    }

    #[test]
    fn adjacent_and_identical_endpoints() {
        let adjacent = path((0, 0), (0, 1), &[]);
        assert_eq!(adjacent.edge_count(), 1);
        assert_eq!(adjacent.cells().count(), 2);
        let same = path((3, 3), (3, 3), &[]);
        assert_eq!(same.edge_count(), 0);
        assert_eq!(same.cells().collect::<Vec<_>>(), vec![Coordinate::new(3, 3)]);
    }
}
