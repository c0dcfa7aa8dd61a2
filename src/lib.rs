//! # terrain_pathfinding
//!
//! Least-cost routes between two cells of a height-valued grid. The grid is
//! anything implementing [TerrainGraph]; the search is either
//! [uniform-cost](solver::dijkstra::DijkstraSolver) (Dijkstra) or
//! [heuristic-guided](solver::astar::AstarSolver) (A*) with a terrain-aware
//! estimate that discounts descents and inflates climbs.
//!
//! ```
//! use terrain_pathfinding::{Pathfinder, Strategy, TerrainGrid};
//!
//! let grid = TerrainGrid::new(3, 3, 0.0);
//! let result = Pathfinder::new(Strategy::HeuristicGuided).find_path(&grid).unwrap();
//! assert_eq!(result.path.len(), 3);
//! assert_eq!(result.cost, 2.0);
//! ```
//!
//! A goal that cannot be reached is not an error: the search exhausts its
//! fringe and returns the single-cell path `[goal]` with an infinite cost.
pub mod error;
pub mod fringe;
pub mod graph;
pub mod pathfinder;
mod search_context;
pub mod solver;
pub mod terrain;

pub use error::{PathError, Result};
pub use fringe::FringeKind;
pub use graph::TerrainGraph;
pub use grid_util::Point;
pub use pathfinder::{Pathfinder, Strategy};
pub use solver::{GridSolver, SearchResult};
pub use terrain::{Movement, TerrainGrid};

/// Inline capacity for neighbor lists; covers the 8-connected case.
pub const N_SMALLVEC_SIZE: usize = 8;
