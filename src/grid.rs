//! Logical grid structs and utilities.

use anyhow::{anyhow, Error};
use log::debug;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer location on the grid
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct GridLocation {
    /// Row - increases downwards
    pub row: i16,
    /// Column - increases to the right
    pub col: i16,
}

impl GridLocation {
    /// Create a new GridLocation
    pub fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

/// Enum for direction values.
///
/// The discriminant order is the order the traversal engine tries moves in;
/// changing it changes which of several equal-length paths is discovered.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// +row
    Down = 0,
    /// -row
    Up = 1,
    /// +col
    Right = 2,
    /// -col
    Left = 3,
}

impl Direction {
    /// Get a list of all directions, in engine iteration order
    pub fn get_all() -> [Self; 4] {
        [Self::Down, Self::Up, Self::Right, Self::Left]
    }

    /// The (row, col) offset of one step in this direction
    pub fn vector(&self) -> (i16, i16) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }

    /// The location one step in this direction from `loc`
    ///
    /// The result may be out of bounds; [`Grid::wall_at`] treats such
    /// locations as walls.
    pub fn apply(&self, loc: GridLocation) -> GridLocation {
        let (dr, dc) = self.vector();
        GridLocation::new(loc.row + dr, loc.col + dc)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Down => "Down",
            Direction::Up => "Up",
            Direction::Right => "Right",
            Direction::Left => "Left",
        };
        write!(f, "{}", name)
    }
}

/// A square 2D grid of obstacles
///
/// Cells are `true` for walls and `false` for free space. The grid is
/// indexed by (row, col); rows increase downwards and columns to the right.
///
/// # Examples
///
/// ```
/// use mazebot::grid::{Grid, GridLocation};
///
/// let grid = Grid::open(3);
/// assert!(!grid.wall_at(&GridLocation::new(1, 1)));
/// assert!(grid.wall_at(&GridLocation::new(3, 0)));
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with no obstacles
    pub fn open(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Generate a grid where each cell is independently a wall with
    /// probability `obstacle_probability`, free otherwise
    ///
    /// There is no guarantee that any particular cell ends up free; callers
    /// validate their endpoints with [`validate_endpoints`]. Generation is
    /// deterministic for a given RNG state, so a seeded `rng` reproduces the
    /// same grid.
    pub fn random<R: Rng>(size: usize, obstacle_probability: f64, rng: &mut R) -> Self {
        let cells: Vec<bool> = (0..size * size)
            .map(|_| rng.gen_bool(obstacle_probability))
            .collect();
        let walls = cells.iter().filter(|&&wall| wall).count();
        debug!("generated {size}x{size} grid with {walls} walls");
        Self { size, cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the location is within the grid bounds
    pub fn in_bounds(&self, loc: &GridLocation) -> bool {
        loc.row >= 0 && loc.col >= 0 && (loc.row as usize) < self.size && (loc.col as usize) < self.size
    }

    /// Returns whether there is a wall at the given location
    ///
    /// Out-of-bounds locations read as walls.
    pub fn wall_at(&self, loc: &GridLocation) -> bool {
        if !self.in_bounds(loc) {
            return true;
        }
        self.cells[self.index(loc)]
    }

    /// Place or clear a wall at the given location
    ///
    /// Does nothing if the location is out of bounds.
    pub fn set_wall(&mut self, loc: &GridLocation, wall: bool) {
        if self.in_bounds(loc) {
            let index = self.index(loc);
            self.cells[index] = wall;
        }
    }

    fn index(&self, loc: &GridLocation) -> usize {
        loc.row as usize * self.size + loc.col as usize
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size == 0 {
            return Err(anyhow!("Grid must have at least one row"));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(anyhow!(
                "Grid must be square; got a row of length {} in a grid of {} rows",
                row.len(),
                size
            ));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

/// Validates that `start` and `goal` are usable endpoints for a search
///
/// Both must be in bounds and free. The traversal engine treats violations as
/// unreachable rather than checking them itself, so run this before searching
/// when the endpoints come from user input.
pub fn validate_endpoints(grid: &Grid, start: GridLocation, goal: GridLocation) -> Result<(), Error> {
    if !grid.in_bounds(&start) || !grid.in_bounds(&goal) {
        return Err(anyhow!(
            "Invalid positions! Must be within 0 to {}",
            grid.size() - 1
        ));
    }
    if grid.wall_at(&start) {
        return Err(anyhow!("Start position is blocked!"));
    }
    if grid.wall_at(&goal) {
        return Err(anyhow!("Goal position is blocked!"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_grids::StandardGrid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn direction_order_is_down_up_right_left() {
        assert_eq!(
            Direction::get_all(),
            [
                Direction::Down,
                Direction::Up,
                Direction::Right,
                Direction::Left
            ]
        );
    }

    #[test]
    fn direction_primitive_round_trip() {
        for direction in Direction::get_all() {
            let primitive: u8 = direction.into();
            assert_eq!(Direction::try_from(primitive).unwrap(), direction);
        }
        assert!(Direction::try_from(4u8).is_err());
    }

    #[test]
    fn direction_apply_moves_one_step() {
        let loc = GridLocation::new(1, 1);
        assert_eq!(Direction::Down.apply(loc), GridLocation::new(2, 1));
        assert_eq!(Direction::Up.apply(loc), GridLocation::new(0, 1));
        assert_eq!(Direction::Right.apply(loc), GridLocation::new(1, 2));
        assert_eq!(Direction::Left.apply(loc), GridLocation::new(1, 0));
    }

    #[test]
    fn wall_at_out_of_bounds() {
        let grid = Grid::open(3);
        assert!(grid.wall_at(&GridLocation::new(-1, 0)));
        assert!(grid.wall_at(&GridLocation::new(0, -1)));
        assert!(grid.wall_at(&GridLocation::new(3, 0)));
        assert!(grid.wall_at(&GridLocation::new(0, 3)));
        assert!(!grid.wall_at(&GridLocation::new(2, 2)));
    }

    #[test]
    fn set_wall_round_trip() {
        let mut grid = Grid::open(3);
        let loc = GridLocation::new(1, 2);
        grid.set_wall(&loc, true);
        assert!(grid.wall_at(&loc));
        grid.set_wall(&loc, false);
        assert!(!grid.wall_at(&loc));
        // out of bounds is a no-op
        grid.set_wall(&GridLocation::new(5, 5), true);
    }

    #[test]
    fn random_extreme_probabilities() {
        let mut rng = StdRng::seed_from_u64(0);
        let all_free = Grid::random(4, 0.0, &mut rng);
        let all_walls = Grid::random(4, 1.0, &mut rng);
        for row in 0..4 {
            for col in 0..4 {
                let loc = GridLocation::new(row, col);
                assert!(!all_free.wall_at(&loc));
                assert!(all_walls.wall_at(&loc));
            }
        }
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let a = Grid::random(8, 0.3, &mut StdRng::seed_from_u64(42));
        let b = Grid::random(8, 0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn try_from_rejects_empty() {
        let v = Grid::try_from(Vec::new());
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Grid must have at least one row"
        );
    }

    #[test]
    fn try_from_rejects_non_square() {
        assert!(Grid::try_from(vec![vec![false, false], vec![false]]).is_err());
        assert!(Grid::try_from(vec![vec![false, false, false], vec![false, false, false]]).is_err());
    }

    #[test]
    fn grid_serde_round_trip() {
        let grid = StandardGrid::Split3.get_grid();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, back);
    }

    #[test]
    fn validate_endpoints_out_of_range() {
        let grid = StandardGrid::Split3.get_grid();
        let v = validate_endpoints(&grid, GridLocation::new(3, 0), GridLocation::new(0, 0));
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Invalid positions! Must be within 0 to 2"
        );
    }

    #[test]
    fn validate_endpoints_blocked_start() {
        let grid = StandardGrid::Split3.get_grid();
        let v = validate_endpoints(&grid, GridLocation::new(1, 1), GridLocation::new(0, 0));
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), "Start position is blocked!");
    }

    #[test]
    fn validate_endpoints_blocked_goal() {
        let grid = StandardGrid::Split3.get_grid();
        let v = validate_endpoints(&grid, GridLocation::new(0, 0), GridLocation::new(1, 1));
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), "Goal position is blocked!");
    }

    #[test]
    fn validate_endpoints_accepts_free_cells() {
        let grid = StandardGrid::Split3.get_grid();
        assert!(validate_endpoints(&grid, GridLocation::new(0, 0), GridLocation::new(2, 2)).is_ok());
    }
}
