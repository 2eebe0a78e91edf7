use crate::coordinate::Coordinate;
use crate::frontier::PriorityQueue;
use crate::solver::{GridSolver, SearchKind};
use crate::terrain::TerrainModel;

/// Uniform-cost search, finds a path of minimal total terrain weight.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Cost = f64;
    type Frontier = PriorityQueue<f64>;

    fn kind(&self) -> SearchKind {
        SearchKind::UniformCost
    }
    fn cost(&self, terrain: &TerrainModel, to: &Coordinate) -> f64 {
        terrain.cost(to)
    }
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::observer::{FrontierEvent, FrontierRecorder, NullObserver};
    use crate::solver::bfs::BfsSolver;

    const DESERT_BAND: &str = "
        .....
        DDDD.
        .....
        ";

    /// A band of expensive desert is walked around instead of crossed.
    #[test]
    fn avoids_expensive_terrain() {
        let mut terrain = TerrainModel::from_ascii(DESERT_BAND).unwrap();
        terrain.set_desert_weight(20.0).unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(0, 2);
        let path = DijkstraSolver
            .get_path(&terrain, start, end, &mut NullObserver)
            .unwrap();
        // 4 right, 2 down, 4 left
        assert_eq!(path.edge_count(), 10);
        assert_eq!(terrain.path_cost(&path), 10.0);

        // Breadth-first goes straight through the band
        let bfs = BfsSolver
            .get_path(&terrain, start, end, &mut NullObserver)
            .unwrap();
        assert_eq!(bfs.interior(), &[Coordinate::new(0, 1)]);
        assert_eq!(terrain.path_cost(&bfs), 21.0);
    }

    #[test]
    fn crosses_cheap_terrain() {
        let terrain = TerrainModel::from_ascii(DESERT_BAND).unwrap();
        let path = DijkstraSolver
            .get_path(
                &terrain,
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                &mut NullObserver,
            )
            .unwrap();
        assert_eq!(path.interior(), &[Coordinate::new(0, 1)]);
        assert_eq!(terrain.path_cost(&path), 4.0);
    }

    /// Ties pop in coordinate order, and a cell found again at the same cost is not pushed again.
    #[test]
    fn reports_frontier_in_order() {
        let terrain = TerrainModel::new(2, 2).unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(1, 1);
        let mut recorder = FrontierRecorder::new();
        let path = DijkstraSolver
            .get_path(&terrain, start, end, &mut recorder)
            .unwrap();
        assert_eq!(path.interior(), &[Coordinate::new(0, 1)]);
        assert_eq!(
            recorder.events(),
            &[
                FrontierEvent::Added(start),
                FrontierEvent::Removed(start),
                FrontierEvent::Added(Coordinate::new(0, 1)),
                FrontierEvent::Added(Coordinate::new(1, 0)),
                FrontierEvent::Removed(Coordinate::new(0, 1)),
                FrontierEvent::Added(end),
                FrontierEvent::Removed(Coordinate::new(1, 0)),
                FrontierEvent::Removed(end),
            ]
        );
        assert_eq!(path.stats.discovered, 4);
        assert_eq!(path.stats.expanded, 4);
        assert_eq!(path.stats.peak_frontier, 2);
    }

    #[test]
    fn walled_off_goal() {
        let terrain = TerrainModel::from_ascii(
            "
            ..#..
            ..#..
            ..#..
            ",
        )
        .unwrap();
        let result = DijkstraSolver.get_path(
            &terrain,
            Coordinate::new(0, 1),
            Coordinate::new(4, 1),
            &mut NullObserver,
        );
        assert_eq!(result, Err(SearchError::Unreachable));
    }
}
