use grid_util::Point;

use crate::{fringe::FringeKind, graph::TerrainGraph, solver::GridSolver};

/// Heuristic-guided search ordering the fringe by accumulated cost plus
/// [terrain_estimate] to the goal.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub fringe: FringeKind,
    /// Scales the estimate. Above 1.0 this is weighted A* and may return
    /// suboptimal paths.
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver {
            fringe: FringeKind::default(),
            heuristic_factor: 1.0,
        }
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver::default()
    }
    pub fn with_fringe(fringe: FringeKind) -> AstarSolver {
        AstarSolver {
            fringe,
            ..AstarSolver::default()
        }
    }
}

/// Terrain-aware estimate of the cost of moving from `p1` to `p2`.
///
/// With `steps` the Chebyshev distance between the cells, the estimate is
/// `steps * 2^((h(p2) - h(p1)) / steps)`: plain step count on flat ground,
/// discounted downhill and inflated uphill. This assumes every move costs
/// `2^Δh` for its elevation change Δh. Under that model, with 8-connected
/// unit moves, the estimate is consistent as long as no climb to the goal
/// exceeds `steps / ln 2`; steeper climbs can make it overestimate.
pub fn terrain_estimate<G: TerrainGraph>(grid: &G, p1: &Point, p2: &Point) -> f64 {
    if p1 == p2 {
        return 0.0;
    }
    let height1 = grid.elevation(p1);
    let height2 = grid.elevation(p2);
    let steps = (p1.x - p2.x).abs().max((p1.y - p2.y).abs()) as f64;
    if height1 == height2 {
        steps
    } else {
        steps * 2f64.powf((height2 - height1) / steps)
    }
}

impl GridSolver for AstarSolver {
    fn fringe(&self) -> FringeKind {
        self.fringe
    }

    fn name(&self) -> &'static str {
        "A*"
    }

    /// Just the terrain estimate times the heuristic factor.
    fn heuristic<G: TerrainGraph>(&self, grid: &G, p1: &Point, p2: &Point) -> f64 {
        terrain_estimate(grid, p1, p2) * self.heuristic_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::dijkstra::DijkstraSolver;
    use crate::terrain::{Movement, TerrainGrid};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn estimate_on_flat_ground_is_chebyshev() {
        let grid = TerrainGrid::new(5, 5, 1.5);
        assert_eq!(terrain_estimate(&grid, &Point::new(0, 0), &Point::new(4, 2)), 4.0);
        assert_eq!(terrain_estimate(&grid, &Point::new(3, 3), &Point::new(3, 3)), 0.0);
    }

    #[test]
    fn estimate_is_direction_dependent() {
        let mut grid = TerrainGrid::new(3, 1, 0.0);
        grid.set_elevation(Point::new(2, 0), 2.0).unwrap();
        let low = Point::new(0, 0);
        let high = Point::new(2, 0);
        // Uphill over two steps: 2 * 2^(2/2)
        assert!(close(terrain_estimate(&grid, &low, &high), 4.0));
        // Downhill: 2 * 2^(-1)
        assert!(close(terrain_estimate(&grid, &high, &low), 1.0));
    }

    #[test]
    fn factor_scales_estimate() {
        let grid = TerrainGrid::new(4, 4, 0.0);
        let mut solver = AstarSolver::new();
        solver.heuristic_factor = 1.5;
        let h = solver.heuristic(&grid, &Point::new(0, 0), &Point::new(3, 1));
        assert!(close(h, 4.5));
    }

    /// Asserts that the 3-cell diagonal is found on flat 8-connected terrain.
    #[test]
    fn flat_diagonal() {
        for fringe in [FringeKind::LinearScan, FringeKind::BinaryHeap] {
            let grid = TerrainGrid::new(3, 3, 0.0);
            let result = AstarSolver::with_fringe(fringe).find_path(&grid).unwrap();
            assert_eq!(
                result.path,
                vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
            );
            assert_eq!(result.cost, 2.0);
        }
    }

    #[test]
    fn expands_fewer_cells_than_dijkstra() {
        let mut grid = TerrainGrid::new(12, 12, 0.0);
        grid.set_start(Point::new(0, 6));
        grid.set_goal(Point::new(11, 6));
        let astar = AstarSolver::new().find_path(&grid).unwrap();
        let dijkstra = DijkstraSolver::new().find_path(&grid).unwrap();
        assert_eq!(astar.cost, dijkstra.cost);
        assert!(astar.expanded < dijkstra.expanded);
    }

    #[test]
    fn same_cost_as_dijkstra_on_gentle_slopes() {
        let mut grid = TerrainGrid::new(6, 6, 0.0);
        grid.set_movement(Movement::Chess);
        for x in 0..6 {
            for y in 0..6 {
                grid.set_elevation(Point::new(x, y), ((x * 7 + y * 3) % 10) as f64 / 10.0).unwrap();
            }
        }
        grid.set_blocked(Point::new(2, 2), true).unwrap();
        grid.set_blocked(Point::new(3, 2), true).unwrap();
        let astar = AstarSolver::new().find_path(&grid).unwrap();
        let dijkstra = DijkstraSolver::new().find_path(&grid).unwrap();
        assert!((astar.cost - dijkstra.cost).abs() < 1e-9);
        assert_eq!(astar.path.first(), Some(&grid.start()));
        assert_eq!(astar.path.last(), Some(&grid.goal()));
    }

    #[test]
    fn isolated_goal() {
        let mut grid = TerrainGrid::new(3, 3, 0.0);
        grid.set_movement(Movement::Manhattan);
        grid.set_blocked(Point::new(1, 2), true).unwrap();
        grid.set_blocked(Point::new(2, 1), true).unwrap();
        let result = AstarSolver::new().find_path(&grid).unwrap();
        assert_eq!(result.path, vec![Point::new(2, 2)]);
        assert!(!result.reached());
    }
}
