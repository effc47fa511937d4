// spiral.rs - Anticlockwise spiral walk and value lookup
//
// Example 5x5 spiral, start (1) at coordinate 3,3:
//
// 17 16 15 14 13
// 18  5  4  3 12
// 19  6  1  2 11
// 20  7  8  9 10
// 21 22 23 24 25
//
// Pattern: (move <run>, turn anticlockwise) x 2, then run += 1.

use crate::error_handling::{Result, SpiralError};
use crate::heading::Heading;
use crate::types::{Coord, Dimensions};

/// Fixed ceiling of the legacy lookup, kept for callers that want the old bound
pub const LEGACY_STEP_CEILING: u64 = 9_999_999;

/// Cell holding '1'. Centred horizontally (right of centre for even widths)
/// and one row below the vertical centre.
pub fn start_position(dims: Dimensions) -> Coord {
    Coord::new(
        dims.width / 2 + dims.width % 2,
        dims.height / 2 + 1,
    )
}

/// Highest value the walk may reach before the lookup gives up.
///
/// Every cell of a near-square grid is numbered at most `width * height`,
/// so `(longest_side + 1)^2` is never reached by a correct walk.
pub fn step_limit(dims: Dimensions) -> u64 {
    let side = u64::from(dims.longest_side()) + 1;
    side.saturating_mul(side)
}

/// A position visited by the walk together with its number.
/// Positions can leave the grid (and go non-positive) on near-square shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiralCell {
    pub x: i64,
    pub y: i64,
    pub value: u64,
}

impl SpiralCell {
    #[inline]
    pub fn is_at(&self, coord: Coord) -> bool {
        self.x == i64::from(coord.x) && self.y == i64::from(coord.y)
    }

    /// Grid coordinate of this cell, if it has one
    pub fn coord(&self) -> Option<Coord> {
        let x = u32::try_from(self.x).ok()?;
        let y = u32::try_from(self.y).ok()?;
        Some(Coord::new(x, y))
    }
}

/// Unbounded iterator over the spiral, starting with value 1 at `start`.
/// Leg lengths run 1,1,2,2,3,3,...
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    x: i64,
    y: i64,
    value: Option<u64>,
    heading: Heading,
    run: u64,
    steps_in_leg: u64,
    legs_in_run: u8,
}

impl SpiralWalk {
    pub fn new(start: Coord) -> Self {
        Self {
            x: i64::from(start.x),
            y: i64::from(start.y),
            value: Some(1),
            heading: Heading::INITIAL,
            run: 1,
            steps_in_leg: 0,
            legs_in_run: 0,
        }
    }

    /// Walk for a grid, starting from its computed start cell
    pub fn for_grid(dims: Dimensions) -> Self {
        Self::new(start_position(dims))
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn run_length(&self) -> u64 {
        self.run
    }

    fn advance(&mut self) {
        let (dx, dy) = self.heading.delta();
        self.x += dx;
        self.y += dy;
        self.steps_in_leg += 1;

        if self.steps_in_leg < self.run {
            return;
        }

        self.steps_in_leg = 0;
        self.heading = self.heading.turn();
        self.legs_in_run += 1;
        if self.legs_in_run == 2 {
            self.legs_in_run = 0;
            self.run += 1;
        }
    }
}

impl Iterator for SpiralWalk {
    type Item = SpiralCell;

    fn next(&mut self) -> Option<SpiralCell> {
        let value = self.value?;
        let cell = SpiralCell {
            x: self.x,
            y: self.y,
            value,
        };
        self.value = value.checked_add(1);
        self.advance();
        Some(cell)
    }
}

/// Value of `target` on the spiral for `dims`.
///
/// Does not validate its inputs; see [`crate::try_ulam`].
pub fn locate(dims: Dimensions, target: Coord) -> Result<u64> {
    locate_with_limit(dims, target, step_limit(dims))
}

/// Same as [`locate`] with an explicit ceiling on the walked value
pub fn locate_with_limit(dims: Dimensions, target: Coord, limit: u64) -> Result<u64> {
    let start = start_position(dims);
    log::debug!("Spiral {} starts at {}, step limit {}", dims, start, limit);

    let found = SpiralWalk::new(start)
        .take_while(|cell| cell.value <= limit)
        .find(|cell| cell.is_at(target));

    match found {
        Some(cell) => {
            log::trace!("Found {} at value {}", target, cell.value);
            Ok(cell.value)
        }
        None => Err(SpiralError::TraversalExhausted {
            x: target.x,
            y: target.y,
            limit,
        }),
    }
}
