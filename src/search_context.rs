//! This module implements the expansion loop shared by every solver, a variant of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which reports every frontier change to an observer and lets the solver pick the frontier.
use crate::coordinate::Coordinate;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::neighbors::neighbors;
use crate::observer::{FrontierObserver, ObserverSignal};
use crate::path::SearchStats;
use crate::terrain::TerrainModel;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use std::ops::Add;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the start cell.
const NO_PARENT: usize = usize::MAX;

fn proceed(signal: ObserverSignal) -> Result<(), SearchError> {
    match signal {
        ObserverSignal::Continue => Ok(()),
        ObserverSignal::Cancel => Err(SearchError::Cancelled),
    }
}

/// Working state of one search. Maps every discovered cell to the index of the cell it was
/// reached from and the cost of reaching it.
pub(crate) struct SearchContext<C, F> {
    frontier: F,
    parents: FxIndexMap<Coordinate, (usize, C)>,
    stats: SearchStats,
}

impl<C, F> SearchContext<C, F>
where
    C: Zero + Copy + PartialOrd + Add<Output = C>,
    F: Frontier<C>,
{
    pub fn new() -> SearchContext<C, F> {
        SearchContext {
            frontier: F::default(),
            parents: FxIndexMap::default(),
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn push<O>(
        &mut self,
        coordinate: Coordinate,
        priority: C,
        observer: &mut O,
    ) -> Result<(), SearchError>
    where
        O: FrontierObserver + ?Sized,
    {
        self.frontier.push(coordinate, priority);
        self.stats.discovered += 1;
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        proceed(observer.on_frontier_add(coordinate))
    }

    /// Expands cells until `goal` is popped or the frontier runs dry. Entering a cell costs
    /// `step_cost` of that cell; cells are prioritised by cost so far plus `heuristic`.
    ///
    /// Cells pushed more than once are also popped and expanded more than once, every pop being
    /// reported to the observer.
    pub fn run<FC, FH, O>(
        &mut self,
        terrain: &TerrainModel,
        start: Coordinate,
        goal: Coordinate,
        mut step_cost: FC,
        mut heuristic: FH,
        observer: &mut O,
    ) -> Result<(), SearchError>
    where
        FC: FnMut(&Coordinate) -> C,
        FH: FnMut(&Coordinate) -> C,
        O: FrontierObserver + ?Sized,
    {
        self.parents.insert(start, (NO_PARENT, Zero::zero()));
        self.push(start, Zero::zero(), observer)?;
        while let Some(current) = self.frontier.pop() {
            self.stats.expanded += 1;
            proceed(observer.on_frontier_remove(current))?;
            if current == goal {
                return Ok(());
            }
            let Some((index, _, &(_, cost))) = self.parents.get_full(&current) else {
                continue;
            };
            for successor in neighbors(terrain, current) {
                let new_cost = cost + step_cost(&successor);
                match self.parents.entry(successor) {
                    Vacant(e) => {
                        e.insert((index, new_cost));
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            e.insert((index, new_cost));
                        } else {
                            continue;
                        }
                    }
                }
                let priority = new_cost + heuristic(&successor);
                self.push(successor, priority, observer)?;
            }
        }
        Err(SearchError::Unreachable)
    }

    /// The cells strictly between `start` and `goal`, following parents back from `goal`.
    /// [None] if `goal` was never discovered.
    pub fn interior_path(&self, start: &Coordinate, goal: &Coordinate) -> Option<Vec<Coordinate>> {
        let (goal_index, _, _) = self.parents.get_full(goal)?;
        let mut path: Vec<Coordinate> = std::iter::successors(Some(goal_index), |&i| {
            self.parents
                .get_index(i)
                .map(|(_, &(parent, _))| parent)
                .filter(|&parent| parent != NO_PARENT)
        })
        .filter_map(|i| self.parents.get_index(i).map(|(node, _)| *node))
        .take_while(|node| node != start)
        .collect();
        path.reverse();
        path.pop();
        Some(path)
    }
}
