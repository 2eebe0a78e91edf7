use crate::coordinate::Coordinate;
use crate::frontier::FifoQueue;
use crate::solver::{GridSolver, SearchKind};
use crate::terrain::TerrainModel;

/// Breadth-first search. Ignores terrain weights and finds a path with the fewest steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    type Cost = usize;
    type Frontier = FifoQueue;

    fn kind(&self) -> SearchKind {
        SearchKind::Unweighted
    }
    fn cost(&self, _: &TerrainModel, _: &Coordinate) -> usize {
        1
    }
    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EndpointIssue, SearchError};
    use crate::observer::{FrontierEvent, FrontierRecorder, NullObserver, ObserverSignal};

    /// On an open 3x3 grid the corner to corner path takes four steps.
    #[test]
    fn solve_simple_problem() {
        let terrain = TerrainModel::new(3, 3).unwrap();
        let start = Coordinate::new(0, 0);
        let end = Coordinate::new(2, 2);
        let path = BfsSolver
            .get_path(&terrain, start, end, &mut NullObserver)
            .unwrap();
        assert_eq!(path.edge_count(), 4);
        assert_eq!(
            path.interior(),
            &[
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
                Coordinate::new(1, 2)
            ]
        );
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let terrain = TerrainModel::new(1, 1).unwrap();
        let start = Coordinate::new(0, 0);
        let path = BfsSolver
            .get_path(&terrain, start, start, &mut NullObserver)
            .unwrap();
        assert!(path.interior().is_empty());
        assert_eq!(path.edge_count(), 0);
    }

    #[test]
    fn barrier_on_only_path() {
        let mut terrain = TerrainModel::new(5, 1).unwrap();
        terrain.mark_barrier(Coordinate::new(2, 0));
        let result = BfsSolver.get_path(
            &terrain,
            Coordinate::new(0, 0),
            Coordinate::new(4, 0),
            &mut NullObserver,
        );
        assert_eq!(result, Err(SearchError::Unreachable));
    }

    #[test]
    fn rejects_invalid_endpoints() {
        let mut terrain = TerrainModel::new(2, 2).unwrap();
        terrain.mark_barrier(Coordinate::new(1, 1));
        let mut recorder = FrontierRecorder::new();
        let result = BfsSolver.get_path(
            &terrain,
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
            &mut recorder,
        );
        assert_eq!(
            result,
            Err(SearchError::InvalidEndpoint {
                endpoint: Coordinate::new(1, 1),
                reason: EndpointIssue::Barrier
            })
        );
        let result = BfsSolver.get_path(
            &terrain,
            Coordinate::new(-1, 0),
            Coordinate::new(0, 0),
            &mut recorder,
        );
        assert_eq!(
            result,
            Err(SearchError::InvalidEndpoint {
                endpoint: Coordinate::new(-1, 0),
                reason: EndpointIssue::OutOfBounds
            })
        );
        // Nothing was searched
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn reports_frontier_in_order() {
        let terrain = TerrainModel::new(3, 1).unwrap();
        let mut recorder = FrontierRecorder::new();
        BfsSolver
            .get_path(
                &terrain,
                Coordinate::new(0, 0),
                Coordinate::new(2, 0),
                &mut recorder,
            )
            .unwrap();
        let c = Coordinate::new;
        assert_eq!(
            recorder.events(),
            &[
                FrontierEvent::Added(c(0, 0)),
                FrontierEvent::Removed(c(0, 0)),
                FrontierEvent::Added(c(1, 0)),
                FrontierEvent::Removed(c(1, 0)),
                FrontierEvent::Added(c(2, 0)),
                FrontierEvent::Removed(c(2, 0)),
            ]
        );
        assert_eq!(recorder.frontier().count(), 0);
    }

    #[test]
    fn observer_cancels() {
        let terrain = TerrainModel::new(10, 10).unwrap();
        let mut events = 0;
        let mut observer = |_: FrontierEvent| {
            events += 1;
            if events == 5 {
                ObserverSignal::Cancel
            } else {
                ObserverSignal::Continue
            }
        };
        let result = BfsSolver.get_path(
            &terrain,
            Coordinate::new(0, 0),
            Coordinate::new(9, 9),
            &mut observer,
        );
        assert_eq!(result, Err(SearchError::Cancelled));
        assert_eq!(events, 5);
    }
}
