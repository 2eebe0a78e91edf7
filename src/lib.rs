//! # grid_search
//!
//! Path search on a rectangular terrain grid. Cells are open, impassable barriers, or one of two
//! kinds of slow terrain (forest and desert) that cost more to enter. Paths are found with one
//! of three classic algorithms:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) or
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan distance heuristic.
//!
//! Every change to the search frontier is reported to a [FrontierObserver] as it happens, so a
//! renderer can animate the search or cancel it. Movement is restricted to the four cardinal
//! directions and the cost of a step is the weight of the cell stepped onto.
//!
//! ```
//! use grid_search::{search, Coordinate, FrontierRecorder, SearchKind, TerrainModel};
//!
//! let mut terrain = TerrainModel::new(3, 3).unwrap();
//! terrain.mark_barrier(Coordinate::new(1, 1));
//! let mut recorder = FrontierRecorder::new();
//! let path = search(
//!     &terrain,
//!     SearchKind::Heuristic,
//!     Coordinate::new(0, 0),
//!     Coordinate::new(2, 2),
//!     &mut recorder,
//! )
//! .unwrap();
//! assert_eq!(path.interior().len(), 3);
//! ```
pub mod config;
pub mod coordinate;
pub mod error;
pub mod frontier;
pub mod neighbors;
pub mod observer;
pub mod path;
mod search_context;
pub mod solver;
pub mod terrain;

pub use crate::config::SearchParameters;
pub use crate::coordinate::Coordinate;
pub use crate::error::{EndpointIssue, ParseError, SearchError, TerrainError};
pub use crate::observer::{
    FrontierEvent, FrontierObserver, FrontierRecorder, NullObserver, ObserverSignal,
};
pub use crate::path::{Path, PathResult, SearchStats};
pub use crate::solver::{
    astar::AstarSolver, bfs::BfsSolver, dijkstra::DijkstraSolver, GridSolver, SearchKind,
};
pub use crate::terrain::{TerrainModel, Tile};

/// Searches `terrain` from `start` to `end` with the algorithm selected by `kind`.
///
/// The returned path excludes both endpoints. Fails with [SearchError::InvalidEndpoint] before
/// searching if an endpoint is out of bounds or on a barrier, with [SearchError::Unreachable]
/// once the frontier is exhausted and with [SearchError::Cancelled] as soon as the observer
/// asks for it.
pub fn search<O>(
    terrain: &TerrainModel,
    kind: SearchKind,
    start: Coordinate,
    end: Coordinate,
    observer: &mut O,
) -> PathResult
where
    O: FrontierObserver + ?Sized,
{
    match kind {
        SearchKind::Unweighted => BfsSolver.get_path(terrain, start, end, observer),
        SearchKind::UniformCost => DijkstraSolver.get_path(terrain, start, end, observer),
        SearchKind::Heuristic => AstarSolver::new().get_path(terrain, start, end, observer),
    }
}
