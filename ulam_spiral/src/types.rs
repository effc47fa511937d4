// types.rs - Shared value types for spiral grids and cells
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of a spiral grid, both 1-based cell counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of cells in the grid
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Longest side, used to size the traversal bound
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Every coordinate of the grid in row-major order, (1,1) first
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Coord::new(x, y)))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// 1-based grid coordinate; (1,1) is the top-left cell and y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
