use grid_util::Point;
use thiserror::Error;

/// Convenient result alias for pathfinding operations.
pub type Result<T> = std::result::Result<T, PathError>;

/// Everything that can make a search refuse to run or abort early.
///
/// An unreachable goal is not represented here: it is a regular outcome of a
/// search, visible through [SearchResult::reached](crate::solver::SearchResult::reached).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// The grid has no cells to search.
    #[error("grid of size {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },

    #[error("start {0} lies outside the grid")]
    StartOutOfBounds(Point),

    #[error("goal {0} lies outside the grid")]
    GoalOutOfBounds(Point),

    #[error("cell {0} lies outside the grid")]
    CellOutOfBounds(Point),

    /// The grid enumerated a neighbor that is not one of its own cells.
    #[error("neighbor {neighbor} of {cell} lies outside the grid")]
    NeighborOutOfBounds { cell: Point, neighbor: Point },

    /// Edge costs must be finite and non-negative.
    #[error("edge from {from} to {to} has invalid cost {cost}")]
    InvalidEdgeCost { from: Point, to: Point, cost: f64 },

    #[error("expected {expected} elevation values, got {actual}")]
    ElevationSize { expected: usize, actual: usize },

    #[error("unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown movement type: {0}")]
    UnknownMovement(String),
}
