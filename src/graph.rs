use grid_util::Point;

/// Read-only view of a height-valued grid as consumed by the solvers.
///
/// Implementors decide the adjacency model and the cost of each move; the
/// solvers only require that every cell handed out by [neighbors](Self::neighbors)
/// is in bounds and that [edge_cost](Self::edge_cost) is finite and non-negative
/// for every such pair. The values must not change while a search is running.
pub trait TerrainGraph {
    type Neighbors: IntoIterator<Item = Point>;

    fn start(&self) -> Point;
    fn goal(&self) -> Point;
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn elevation(&self, cell: &Point) -> f64;
    /// All cells reachable from `cell` in one move, in a fixed order.
    fn neighbors(&self, cell: &Point) -> Self::Neighbors;
    /// Cost of moving from `from` to the adjacent cell `to`.
    fn edge_cost(&self, from: &Point, to: &Point) -> f64;

    fn in_bounds(&self, cell: &Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width()
            && (cell.y as usize) < self.height()
    }
}
