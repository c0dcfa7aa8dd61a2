//! Search strategies over a [TerrainGraph].
use crate::error::Result;
use crate::fringe::FringeKind;
use crate::graph::TerrainGraph;
use grid_util::Point;
use itertools::Itertools;

pub mod astar;
pub mod dijkstra;

/// Outcome of a single search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Cells from start to goal inclusive. Only `[goal]` if the goal was not reached.
    pub path: Vec<Point>,
    /// Accumulated cost to the goal, [f64::INFINITY] if it was not reached.
    pub cost: f64,
    /// Number of cells finalized before the search stopped.
    pub expanded: usize,
}

impl SearchResult {
    /// Whether the goal was reached. Equivalent to the path starting at the
    /// grid's start, except when start and goal coincide.
    pub fn reached(&self) -> bool {
        self.cost.is_finite()
    }
}

pub trait GridSolver {
    fn fringe(&self) -> FringeKind;

    /// Human readable name used in log output.
    fn name(&self) -> &'static str;

    /// Estimated remaining cost from `p1` to `p2`.
    fn heuristic<G: TerrainGraph>(&self, grid: &G, p1: &Point, p2: &Point) -> f64;

    /// Computes a least-cost path from the grid's start to its goal.
    ///
    /// Fails only on malformed input (out of bounds endpoints or neighbors,
    /// invalid edge costs). An unreachable goal is reported through
    /// [SearchResult::reached].
    fn find_path<G: TerrainGraph>(&self, grid: &G) -> Result<SearchResult> {
        let goal = grid.goal();
        crate::search_context::run_search(grid, self.fringe(), self.name(), |point| {
            self.heuristic(grid, point, &goal)
        })
    }

    /// Sums the grid's edge costs along `path`.
    fn get_path_cost<G: TerrainGraph>(&self, path: &[Point], grid: &G) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| grid.edge_cost(a, b))
            .sum()
    }
}
