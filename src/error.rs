use crate::coordinate::Coordinate;
use crate::terrain::Tile;
use core::fmt;
use thiserror::Error;

/// Rejected edits to a [TerrainModel](crate::TerrainModel). The model is left unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TerrainError {
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimensions { columns: i32, rows: i32 },
    #[error(
        "grid of {columns}x{rows} cells exceeds the limit of {} cells",
        crate::terrain::MAX_CELLS
    )]
    TooLarge { columns: i32, rows: i32 },
    #[error("{terrain:?} weight must be positive and finite, got {weight}")]
    InvalidWeight { terrain: Tile, weight: f64 },
    #[error("unknown tile {tile:?} at line {line}, column {column}")]
    UnknownTile {
        line: usize,
        column: usize,
        tile: char,
    },
    #[error("line {line} has {found} tiles, expected {expected}")]
    RaggedLayout {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout contains no tiles")]
    EmptyLayout,
}

/// Why an endpoint was refused before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    Barrier,
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointIssue::OutOfBounds => write!(f, "out of bounds"),
            EndpointIssue::Barrier => write!(f, "on a barrier"),
        }
    }
}

/// The failure half of a [PathResult](crate::PathResult).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("end is not reachable from start")]
    Unreachable,
    #[error("endpoint {endpoint} is {reason}")]
    InvalidEndpoint {
        endpoint: Coordinate,
        reason: EndpointIssue,
    },
    #[error("search cancelled by frontier observer")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected \"column, row\", got {0:?}")]
    Coordinate(String),
    #[error("unknown search algorithm {0:?}")]
    SearchKind(String),
}
