use crate::coordinate::Coordinate;
use crate::error::{ParseError, SearchError};
use crate::frontier::Frontier;
use crate::observer::FrontierObserver;
use crate::path::{Path, PathResult};
use crate::search_context::SearchContext;
use crate::terrain::TerrainModel;
use core::fmt;
use log::{debug, info, warn};
use num_traits::Zero;
use std::ops::Add;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

/// The three supported algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchKind {
    /// Breadth-first search, every step costs 1.
    Unweighted,
    /// Dijkstra's algorithm over terrain weights.
    UniformCost,
    /// A* over terrain weights, guided by the Manhattan distance to the end.
    Heuristic,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [
        SearchKind::Unweighted,
        SearchKind::UniformCost,
        SearchKind::Heuristic,
    ];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SearchKind::Unweighted => "bfs",
            SearchKind::UniformCost => "dijkstra",
            SearchKind::Heuristic => "astar",
        };
        write!(f, "{}", name)
    }
}

/// Accepts the canonical names, the single letter options `b`, `d` and `a`, and descriptive
/// aliases, ignoring case.
impl FromStr for SearchKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<SearchKind, ParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "b" | "unweighted" | "breadth-first" => Ok(SearchKind::Unweighted),
            "dijkstra" | "d" | "uniform-cost" => Ok(SearchKind::UniformCost),
            "astar" | "a*" | "a" | "heuristic" => Ok(SearchKind::Heuristic),
            _ => Err(ParseError::SearchKind(s.to_owned())),
        }
    }
}

/// A search strategy over a [TerrainModel]: what a step costs, how far the end is estimated to
/// be, and in which order discovered cells are expanded. The expansion loop itself is shared.
pub trait GridSolver {
    type Cost: Zero + Copy + PartialOrd + Add<Output = Self::Cost>;
    type Frontier: Frontier<Self::Cost>;

    fn kind(&self) -> SearchKind;

    /// Cost of stepping onto `to`.
    fn cost(&self, terrain: &TerrainModel, to: &Coordinate) -> Self::Cost;

    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> Self::Cost;

    /// Searches from `start` to `end`, reporting every frontier change to `observer`. Both
    /// endpoints must be in bounds and passable. The returned path excludes them.
    fn get_path<O>(
        &self,
        terrain: &TerrainModel,
        start: Coordinate,
        end: Coordinate,
        observer: &mut O,
    ) -> PathResult
    where
        O: FrontierObserver + ?Sized,
    {
        terrain.validate_endpoint(&start)?;
        terrain.validate_endpoint(&end)?;
        info!("Searching from {} to {} using {}", start, end, self.kind());
        let mut ct: SearchContext<Self::Cost, Self::Frontier> = SearchContext::new();
        let outcome = ct.run(
            terrain,
            start,
            end,
            |c| self.cost(terrain, c),
            |c| self.heuristic(c, &end),
            observer,
        );
        let stats = ct.stats();
        match outcome {
            Ok(()) => {}
            Err(SearchError::Unreachable) => {
                warn!(
                    "{} is not reachable from {}, expanded {} cells",
                    end, start, stats.expanded
                );
                return Err(SearchError::Unreachable);
            }
            Err(e) => {
                info!("Search from {} to {} stopped: {}", start, end, e);
                return Err(e);
            }
        }
        let interior = ct
            .interior_path(&start, &end)
            .ok_or(SearchError::Unreachable)?;
        debug!(
            "Found path of {} cells, expanded {}, discovered {}, peak frontier {}",
            interior.len(),
            stats.expanded,
            stats.discovered,
            stats.peak_frontier
        );
        Ok(Path {
            start,
            end,
            interior,
            stats,
        })
    }
}
