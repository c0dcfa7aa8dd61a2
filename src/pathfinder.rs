use crate::error::{PathError, Result};
use crate::fringe::FringeKind;
use crate::graph::TerrainGraph;
use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver, SearchResult};
use core::fmt;
use std::str::FromStr;

/// The available search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    UniformCost,
    HeuristicGuided,
}

impl FromStr for Strategy {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" | "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "astar" | "a*" | "heuristic" => Ok(Strategy::HeuristicGuided),
            _ => Err(PathError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::UniformCost => write!(f, "dijkstra"),
            Strategy::HeuristicGuided => write!(f, "astar"),
        }
    }
}

/// Runs whichever [Strategy] it is configured with.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    pub strategy: Strategy,
    pub fringe: FringeKind,
    /// Only used by [Strategy::HeuristicGuided].
    pub heuristic_factor: f64,
}

impl Default for Pathfinder {
    fn default() -> Pathfinder {
        Pathfinder {
            strategy: Strategy::default(),
            fringe: FringeKind::default(),
            heuristic_factor: 1.0,
        }
    }
}

impl Pathfinder {
    pub fn new(strategy: Strategy) -> Pathfinder {
        Pathfinder {
            strategy,
            ..Pathfinder::default()
        }
    }

    pub fn find_path<G: TerrainGraph>(&self, grid: &G) -> Result<SearchResult> {
        match self.strategy {
            Strategy::UniformCost => DijkstraSolver::with_fringe(self.fringe).find_path(grid),
            Strategy::HeuristicGuided => AstarSolver {
                fringe: self.fringe,
                heuristic_factor: self.heuristic_factor,
            }
            .find_path(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainGrid;
    use grid_util::Point;

    #[test]
    fn parses_strategy_names() {
        assert_eq!("Dijkstra".parse::<Strategy>(), Ok(Strategy::UniformCost));
        assert_eq!("ucs".parse::<Strategy>(), Ok(Strategy::UniformCost));
        assert_eq!("AStar".parse::<Strategy>(), Ok(Strategy::HeuristicGuided));
        assert_eq!("a*".parse::<Strategy>(), Ok(Strategy::HeuristicGuided));
        assert_eq!(
            "bfs".parse::<Strategy>(),
            Err(PathError::UnknownStrategy("bfs".to_owned()))
        );
        for s in [Strategy::UniformCost, Strategy::HeuristicGuided] {
            assert_eq!(s.to_string().parse::<Strategy>(), Ok(s));
        }
    }

    #[test]
    fn dispatches_to_configured_solver() {
        let grid = TerrainGrid::new(8, 8, 0.0);
        let dijkstra = Pathfinder::new(Strategy::UniformCost).find_path(&grid).unwrap();
        let astar = Pathfinder::new(Strategy::HeuristicGuided).find_path(&grid).unwrap();
        assert_eq!(dijkstra.cost, 7.0);
        assert_eq!(astar.cost, 7.0);
        assert!(astar.expanded < dijkstra.expanded);
        assert_eq!(astar.path.last(), Some(&Point::new(7, 7)));
    }
}
