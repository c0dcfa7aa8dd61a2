use crate::error::{PathError, Result};
use crate::fringe::{Fringe, FringeEntry, FringeKind};
use crate::graph::TerrainGraph;
use crate::solver::SearchResult;
use grid_util::Point;
use log::{debug, info};

/// Dense per-cell storage, row-major like the grid it mirrors.
#[derive(Clone, Debug)]
pub(crate) struct CellMap<T> {
    width: usize,
    values: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    pub fn new(width: usize, height: usize, default_value: T) -> CellMap<T> {
        CellMap {
            width,
            values: vec![default_value; width * height],
        }
    }
    /// Caller guarantees `point` is in bounds.
    pub fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }
    pub fn get(&self, point: &Point) -> &T {
        &self.values[self.ix(point)]
    }
    pub fn set(&mut self, point: &Point, value: T) {
        let ix = self.ix(point);
        self.values[ix] = value;
    }
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

/// Working state of one search: distance map, visited set, predecessor map and
/// fringe. Allocated per run and dropped once the path has been extracted.
pub(crate) struct SearchContext {
    pub distance: CellMap<f64>,
    pub visited: CellMap<bool>,
    pub parents: CellMap<Option<Point>>,
    pub fringe: Fringe,
    pub expanded: usize,
}

impl SearchContext {
    pub fn new(width: usize, height: usize, kind: FringeKind) -> SearchContext {
        SearchContext {
            distance: CellMap::new(width, height, f64::INFINITY),
            visited: CellMap::new(width, height, false),
            parents: CellMap::new(width, height, None),
            fringe: Fringe::new(kind, width * height),
            expanded: 0,
        }
    }

    /// Runs a best-first search from the grid's start to its goal. Cells are
    /// expanded in order of `distance + heuristic(cell)`; the heuristic never
    /// enters the distance map.
    pub fn best_first_search<G, FH>(
        &mut self,
        grid: &G,
        mut heuristic: FH,
    ) -> Result<(Vec<Point>, f64)>
    where
        G: TerrainGraph,
        FH: FnMut(&Point) -> f64,
    {
        let start = grid.start();
        let goal = grid.goal();

        self.distance.set(&start, 0.0);
        let start_entry = FringeEntry {
            cell: start,
            ix: self.distance.ix(&start),
            estimate: heuristic(&start),
        };
        self.fringe.push(start_entry, 0.0);

        while let Some(FringeEntry { cell, ix, .. }) = self.fringe.pop(self.distance.as_slice()) {
            // Older duplicates of a finalized cell
            if self.visited.as_slice()[ix] {
                continue;
            }
            self.visited.set(&cell, true);
            self.expanded += 1;
            if cell == goal {
                break;
            }
            let current_distance = *self.distance.get(&cell);
            for neighbor in grid.neighbors(&cell) {
                if !grid.in_bounds(&neighbor) {
                    return Err(PathError::NeighborOutOfBounds { cell, neighbor });
                }
                if *self.visited.get(&neighbor) {
                    continue;
                }
                let cost = grid.edge_cost(&cell, &neighbor);
                if !cost.is_finite() || cost < 0.0 {
                    return Err(PathError::InvalidEdgeCost {
                        from: cell,
                        to: neighbor,
                        cost,
                    });
                }
                let candidate = cost + current_distance;
                if candidate < *self.distance.get(&neighbor) {
                    self.distance.set(&neighbor, candidate);
                    self.parents.set(&neighbor, Some(cell));
                    let entry = FringeEntry {
                        cell: neighbor,
                        ix: self.distance.ix(&neighbor),
                        estimate: heuristic(&neighbor),
                    };
                    self.fringe.push(entry, candidate);
                }
            }
        }

        let cost = *self.distance.get(&goal);
        if !*self.visited.get(&goal) {
            info!("Fringe exhausted, {} is not reachable from {}", goal, start);
        }
        Ok((self.reconstruct_path(goal), cost))
    }

    /// Walks the predecessor chain back from `goal`. A goal that was never
    /// reached has no predecessor and yields `[goal]`.
    pub fn reconstruct_path(&self, goal: Point) -> Vec<Point> {
        let mut path: Vec<Point> =
            std::iter::successors(Some(goal), |p| *self.parents.get(p)).collect();
        path.reverse();
        path
    }
}

/// Checks the preconditions of a search and runs it with a fresh context.
pub(crate) fn run_search<G, FH>(
    grid: &G,
    kind: FringeKind,
    strategy: &str,
    heuristic: FH,
) -> Result<SearchResult>
where
    G: TerrainGraph,
    FH: FnMut(&Point) -> f64,
{
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(PathError::EmptyGrid { width, height });
    }
    let start = grid.start();
    let goal = grid.goal();
    if !grid.in_bounds(&start) {
        return Err(PathError::StartOutOfBounds(start));
    }
    if !grid.in_bounds(&goal) {
        return Err(PathError::GoalOutOfBounds(goal));
    }
    debug!(
        "{} search from {} to {} on {}x{} grid ({:?} fringe)",
        strategy, start, goal, width, height, kind
    );
    let mut ct = SearchContext::new(width, height, kind);
    let (path, cost) = ct.best_first_search(grid, heuristic)?;
    debug!(
        "{} search finished: cost {}, {} cells expanded, {} fringe entries left",
        strategy,
        cost,
        ct.expanded,
        ct.fringe.len()
    );
    Ok(SearchResult {
        path,
        cost,
        expanded: ct.expanded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_map_is_row_major() {
        let mut map = CellMap::new(3, 2, 0);
        map.set(&Point::new(2, 1), 7);
        assert_eq!(map.ix(&Point::new(2, 1)), 5);
        assert_eq!(map.as_slice()[5], 7);
        assert_eq!(*map.get(&Point::new(0, 1)), 0);
    }

    #[test]
    fn reconstruct_follows_parents_to_start() {
        let mut ct = SearchContext::new(3, 1, FringeKind::LinearScan);
        ct.parents.set(&Point::new(1, 0), Some(Point::new(0, 0)));
        ct.parents.set(&Point::new(2, 0), Some(Point::new(1, 0)));
        assert_eq!(
            ct.reconstruct_path(Point::new(2, 0)),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn reconstruct_unreached_goal_is_singleton() {
        let ct = SearchContext::new(3, 3, FringeKind::BinaryHeap);
        assert_eq!(ct.reconstruct_path(Point::new(2, 2)), vec![Point::new(2, 2)]);
    }
}
