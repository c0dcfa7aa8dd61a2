use crate::error::{PathError, Result};
use crate::graph::TerrainGraph;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Offsets in enumeration order: N, E, S, W.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
/// Offsets in enumeration order: N, NE, E, SE, S, SW, W, NW.
const MOORE: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Adjacency model of a [TerrainGrid].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Movement {
    /// 8-connected, every move has length 1.
    #[default]
    Chess,
    /// 4-connected.
    Manhattan,
    /// 8-connected, diagonal moves have length √2.
    Euclidean,
}

impl Movement {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Movement::Manhattan => &CARDINAL,
            Movement::Chess | Movement::Euclidean => &MOORE,
        }
    }
    fn step_length(self, p1: &Point, p2: &Point) -> f64 {
        let diagonal = p1.x != p2.x && p1.y != p2.y;
        if self == Movement::Euclidean && diagonal {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    }
}

impl FromStr for Movement {
    type Err = PathError;

    /// Accepts the full name or its first letter, case-insensitive.
    fn from_str(s: &str) -> Result<Movement> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "chess" => Ok(Movement::Chess),
            "m" | "manhattan" => Ok(Movement::Manhattan),
            "e" | "euclidean" => Ok(Movement::Euclidean),
            _ => Err(PathError::UnknownMovement(s.to_owned())),
        }
    }
}

/// In-memory height map with blocked cells, implementing [TerrainGraph].
///
/// Moving from `a` to an adjacent `b` costs `step_length * 2^(h(b) - h(a))`,
/// the model [terrain_estimate](crate::solver::astar::terrain_estimate) is
/// built around. Connected components are tracked with a [UnionFind] so that
/// callers can test reachability without searching.
///
/// Edge costs overflow to infinity once a single move climbs more than about
/// 1024, and the solvers reject infinite costs. Keep elevation differences
/// between neighbouring cells well below that.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    elevation: Vec<f64>,
    blocked: Vec<bool>,
    start: Point,
    goal: Point,
    movement: Movement,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TerrainGrid {
    /// Flat terrain of the given elevation, start in the top-left corner and
    /// goal in the bottom-right one.
    pub fn new(width: usize, height: usize, elevation: f64) -> TerrainGrid {
        let mut grid = TerrainGrid {
            width,
            height,
            elevation: vec![elevation; width * height],
            blocked: vec![false; width * height],
            start: Point::new(0, 0),
            goal: Point::new(width as i32 - 1, height as i32 - 1),
            movement: Movement::default(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Terrain from row-major elevation values.
    pub fn from_elevations(width: usize, height: usize, elevation: Vec<f64>) -> Result<TerrainGrid> {
        if elevation.len() != width * height {
            return Err(PathError::ElevationSize {
                expected: width * height,
                actual: elevation.len(),
            });
        }
        let mut grid = TerrainGrid::new(width, height, 0.0);
        grid.elevation = elevation;
        Ok(grid)
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    pub fn set_start(&mut self, start: Point) {
        self.start = start;
    }
    pub fn set_goal(&mut self, goal: Point) {
        self.goal = goal;
    }
    pub fn movement(&self) -> Movement {
        self.movement
    }
    /// Changes the adjacency model. Components have to be regenerated afterwards.
    pub fn set_movement(&mut self, movement: Movement) {
        if movement != self.movement {
            self.components_dirty = true;
        }
        self.movement = movement;
    }
    pub fn set_elevation(&mut self, point: Point, elevation: f64) -> Result<()> {
        if !self.in_bounds(&point) {
            return Err(PathError::CellOutOfBounds(point));
        }
        let ix = self.ix(&point);
        self.elevation[ix] = elevation;
        Ok(())
    }
    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, point: &Point) -> bool {
        !self.in_bounds(point) || self.blocked[self.ix(point)]
    }
    pub fn can_move_to(&self, point: &Point) -> bool {
        self.in_bounds(point) && !self.is_blocked(point)
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_blocked(&mut self, point: Point, blocked: bool) -> Result<()> {
        if !self.in_bounds(&point) {
            return Err(PathError::CellOutOfBounds(point));
        }
        let ix = self.ix(&point);
        if blocked {
            if !self.blocked[ix] {
                self.components_dirty = true;
            }
        } else {
            for n in self.neighbors(&point) {
                let n_ix = self.ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        self.blocked[ix] = blocked;
        Ok(())
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let point = Point::new(x, y);
                if self.is_blocked(&point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                for n in self.neighbors(&point) {
                    let n_ix = self.ix(&n);
                    self.components.union(parent_ix, n_ix);
                }
            }
        }
    }

    /// Checks if start and goal are on the same component. Components must be up to date.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            start != goal && !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }
}

impl TerrainGraph for TerrainGrid {
    type Neighbors = SmallVec<[Point; N_SMALLVEC_SIZE]>;

    fn start(&self) -> Point {
        self.start
    }
    fn goal(&self) -> Point {
        self.goal
    }
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn elevation(&self, cell: &Point) -> f64 {
        self.elevation[self.ix(cell)]
    }
    fn neighbors(&self, cell: &Point) -> Self::Neighbors {
        self.movement
            .offsets()
            .iter()
            .map(|&(dx, dy)| Point::new(cell.x + dx, cell.y + dy))
            .filter(|p| self.can_move_to(p))
            .collect()
    }
    fn edge_cost(&self, from: &Point, to: &Point) -> f64 {
        let climb = self.elevation(to) - self.elevation(from);
        self.movement.step_length(from, to) * 2f64.powf(climb)
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let row = (0..self.width as i32)
                .map(|x| {
                    let p = Point::new(x, y);
                    if self.is_blocked(&p) {
                        "    #".to_owned()
                    } else {
                        format!("{:5.1}", self.elevation(&p))
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
