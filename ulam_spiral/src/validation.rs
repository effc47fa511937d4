// validation.rs - Admissibility checks run before any traversal

use crate::error_handling::{Result, SpiralError};
use crate::types::{Coord, Dimensions};

/// Width and height must be equal, or the width may exceed the height by one.
/// So 2x2, 3x2, 3x3 and 4x3 are valid but 3x4 is not.
pub fn valid_width_and_height(width: u32, height: u32) -> bool {
    width == height || height.checked_add(1) == Some(width)
}

/// The target must lie inside the 1-based `width` x `height` grid
pub fn valid_coordinates(width: u32, height: u32, x: u32, y: u32) -> bool {
    (1..=width).contains(&x) && (1..=height).contains(&y)
}

impl Dimensions {
    pub fn validate(self) -> Result<Self> {
        if valid_width_and_height(self.width, self.height) {
            Ok(self)
        } else {
            Err(SpiralError::invalid_shape(self))
        }
    }

    pub fn check_coord(&self, coord: Coord) -> Result<Coord> {
        if valid_coordinates(self.width, self.height, coord.x, coord.y) {
            Ok(coord)
        } else {
            Err(SpiralError::invalid_coordinate(*self, coord))
        }
    }
}
