//! The working set of discovered cells awaiting expansion.
//!
//! The fringe is a multiset: a cell is pushed again every time its distance
//! improves and older entries are left behind. Both variants select the entry
//! with the lowest `distance + estimate` and break ties in favour of the cell
//! that entered the fringe first, so they expand cells in exactly the same
//! order.
use grid_util::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selection policy of the fringe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FringeKind {
    /// Unordered list scanned in full on every pop. Quadratic in the worst case.
    #[default]
    LinearScan,
    /// Priority queue with lazy deletion of stale entries.
    BinaryHeap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FringeEntry {
    pub cell: Point,
    pub ix: usize,
    /// Heuristic part of the priority; constant for a cell during one run.
    pub estimate: f64,
}

pub(crate) struct SmallestCostHolder {
    estimated_cost: f64,
    order: usize,
    entry: FringeEntry,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

pub(crate) enum Fringe {
    LinearScan(Vec<FringeEntry>),
    BinaryHeap {
        heap: BinaryHeap<SmallestCostHolder>,
        first_seen: Vec<Option<usize>>,
        inserted: usize,
    },
}

impl Fringe {
    pub fn new(kind: FringeKind, cells: usize) -> Fringe {
        match kind {
            FringeKind::LinearScan => Fringe::LinearScan(Vec::new()),
            FringeKind::BinaryHeap => Fringe::BinaryHeap {
                heap: BinaryHeap::new(),
                first_seen: vec![None; cells],
                inserted: 0,
            },
        }
    }

    /// Adds `entry`, whose cell currently has best known distance `distance`.
    pub fn push(&mut self, entry: FringeEntry, distance: f64) {
        match self {
            Fringe::LinearScan(entries) => entries.push(entry),
            Fringe::BinaryHeap {
                heap,
                first_seen,
                inserted,
            } => {
                let order = *first_seen[entry.ix].get_or_insert(*inserted);
                *inserted += 1;
                heap.push(SmallestCostHolder {
                    estimated_cost: distance + entry.estimate,
                    order,
                    entry,
                });
            }
        }
    }

    /// Removes the entry with the lowest priority. `distances` is the distance
    /// map indexed like [FringeEntry::ix].
    pub fn pop(&mut self, distances: &[f64]) -> Option<FringeEntry> {
        match self {
            Fringe::LinearScan(entries) => {
                let mut best: Option<(usize, f64)> = None;
                for (i, entry) in entries.iter().enumerate() {
                    let priority = distances[entry.ix] + entry.estimate;
                    if best.map_or(true, |(_, min)| priority < min) {
                        best = Some((i, priority));
                    }
                }
                best.map(|(i, _)| entries.remove(i))
            }
            Fringe::BinaryHeap { heap, .. } => heap.pop().map(|holder| holder.entry),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Fringe::LinearScan(entries) => entries.len(),
            Fringe::BinaryHeap { heap, .. } => heap.len(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
