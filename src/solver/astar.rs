use crate::coordinate::Coordinate;
use crate::frontier::PriorityQueue;
use crate::solver::{GridSolver, SearchKind};
use crate::terrain::TerrainModel;

/// A* search guided by the Manhattan distance to the end.
///
/// The heuristic is admissible as long as no terrain weight is below 1, which is not enforced.
/// A `heuristic_factor` above 1 also gives up optimality in exchange for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    heuristic_factor: f64,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
    /// [None] unless `heuristic_factor` is finite and not negative. A factor of 0 searches like
    /// [DijkstraSolver](crate::DijkstraSolver).
    pub fn with_heuristic_factor(heuristic_factor: f64) -> Option<AstarSolver> {
        (heuristic_factor.is_finite() && heuristic_factor >= 0.0)
            .then_some(AstarSolver { heuristic_factor })
    }
    pub fn heuristic_factor(&self) -> f64 {
        self.heuristic_factor
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Cost = f64;
    type Frontier = PriorityQueue<f64>;

    fn kind(&self) -> SearchKind {
        SearchKind::Heuristic
    }
    fn cost(&self, terrain: &TerrainModel, to: &Coordinate) -> f64 {
        terrain.cost(to)
    }
    /// The Manhattan distance times the heuristic factor.
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> f64 {
        p1.manhattan_distance(p2) as f64 * self.heuristic_factor
    }
}
