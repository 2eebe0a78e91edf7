use crate::coordinate::Coordinate;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// The open list of a search: cells that have been discovered but not yet expanded.
pub trait Frontier<P>: Default {
    fn push(&mut self, coordinate: Coordinate, priority: P);
    fn pop(&mut self) -> Option<Coordinate>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Priorities are ignored.
#[derive(Clone, Debug, Default)]
pub struct FifoQueue {
    queue: VecDeque<Coordinate>,
}

impl<P> Frontier<P> for FifoQueue {
    fn push(&mut self, coordinate: Coordinate, _: P) {
        self.queue.push_back(coordinate);
    }
    fn pop(&mut self) -> Option<Coordinate> {
        self.queue.pop_front()
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

struct SmallestPriorityHolder<P> {
    priority: P,
    coordinate: Coordinate,
}

impl<P: PartialOrd> Eq for SmallestPriorityHolder<P> {}

impl<P: PartialOrd> PartialEq for SmallestPriorityHolder<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: PartialOrd> PartialOrd for SmallestPriorityHolder<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: PartialOrd> Ord for SmallestPriorityHolder<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest priority, then the smallest coordinate.
        // Priorities are never NaN as terrain weights and heuristic factors are validated.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.coordinate.cmp(&self.coordinate))
    }
}

/// Binary min-heap keyed on priority, ties broken by [Coordinate] order. Entries are never
/// updated in place; a cell found again at a better priority is pushed a second time.
pub struct PriorityQueue<P> {
    heap: BinaryHeap<SmallestPriorityHolder<P>>,
}

impl<P: PartialOrd> Default for PriorityQueue<P> {
    fn default() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }
}

impl<P: PartialOrd> Frontier<P> for PriorityQueue<P> {
    fn push(&mut self, coordinate: Coordinate, priority: P) {
        self.heap.push(SmallestPriorityHolder {
            priority,
            coordinate,
        });
    }
    fn pop(&mut self) -> Option<Coordinate> {
        self.heap.pop().map(|holder| holder.coordinate)
    }
    fn len(&self) -> usize {
        self.heap.len()
    }
}
