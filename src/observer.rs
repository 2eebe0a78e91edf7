use crate::coordinate::Coordinate;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A change to the frontier, reported in the order the search performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrontierEvent {
    Added(Coordinate),
    Removed(Coordinate),
}

impl FrontierEvent {
    pub fn coordinate(&self) -> Coordinate {
        match self {
            FrontierEvent::Added(c) | FrontierEvent::Removed(c) => *c,
        }
    }
}

/// Returned by an observer after every event. [ObserverSignal::Cancel] aborts the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverSignal {
    Continue,
    Cancel,
}

/// Notified synchronously of every frontier insertion and removal, e.g. by a renderer animating
/// the search. The search never renders or sleeps itself.
pub trait FrontierObserver {
    fn on_frontier_add(&mut self, coordinate: Coordinate) -> ObserverSignal;
    fn on_frontier_remove(&mut self, coordinate: Coordinate) -> ObserverSignal;
}

impl<F> FrontierObserver for F
where
    F: FnMut(FrontierEvent) -> ObserverSignal,
{
    fn on_frontier_add(&mut self, coordinate: Coordinate) -> ObserverSignal {
        self(FrontierEvent::Added(coordinate))
    }
    fn on_frontier_remove(&mut self, coordinate: Coordinate) -> ObserverSignal {
        self(FrontierEvent::Removed(coordinate))
    }
}

/// Ignores all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl FrontierObserver for NullObserver {
    fn on_frontier_add(&mut self, _: Coordinate) -> ObserverSignal {
        ObserverSignal::Continue
    }
    fn on_frontier_remove(&mut self, _: Coordinate) -> ObserverSignal {
        ObserverSignal::Continue
    }
}

/// Keeps the full event trace for replay along with the cells currently on the frontier, in
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct FrontierRecorder {
    events: Vec<FrontierEvent>,
    frontier: FxIndexSet<Coordinate>,
}

impl FrontierRecorder {
    pub fn new() -> FrontierRecorder {
        FrontierRecorder::default()
    }
    pub fn events(&self) -> &[FrontierEvent] {
        &self.events
    }
    pub fn frontier(&self) -> impl Iterator<Item = &Coordinate> {
        self.frontier.iter()
    }
    pub fn on_frontier(&self, coordinate: &Coordinate) -> bool {
        self.frontier.contains(coordinate)
    }
    /// Forgets the trace and the live frontier, ready for the next search.
    pub fn clear(&mut self) {
        self.events.clear();
        self.frontier.clear();
    }
}

impl FrontierObserver for FrontierRecorder {
    fn on_frontier_add(&mut self, coordinate: Coordinate) -> ObserverSignal {
        self.events.push(FrontierEvent::Added(coordinate));
        self.frontier.insert(coordinate);
        ObserverSignal::Continue
    }
    fn on_frontier_remove(&mut self, coordinate: Coordinate) -> ObserverSignal {
        self.events.push(FrontierEvent::Removed(coordinate));
        // A cell pushed twice is popped twice, the second removal finds nothing
        self.frontier.shift_remove(&coordinate);
        ObserverSignal::Continue
    }
}
