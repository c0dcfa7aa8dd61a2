use grid_util::Point;

use crate::{fringe::FringeKind, graph::TerrainGraph, solver::GridSolver};

/// Uniform-cost search: expands the cheapest fringe cell by accumulated cost alone.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver {
    pub fringe: FringeKind,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver::default()
    }
    pub fn with_fringe(fringe: FringeKind) -> DijkstraSolver {
        DijkstraSolver { fringe }
    }
}

impl GridSolver for DijkstraSolver {
    fn fringe(&self) -> FringeKind {
        self.fringe
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn heuristic<G: TerrainGraph>(&self, _: &G, _: &Point, _: &Point) -> f64 {
        0.0
    }
}
