// lib.rs - Library exports for ulam-spiral
// Looks up the number at a coordinate of an anticlockwise Ulam spiral.
// See http://en.wikipedia.org/wiki/Ulam_spiral
//
// Width, height, x and y are all 1-based; (1,1) is the top-left corner.

pub mod error_handling;
pub mod heading;
pub mod spiral;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error_handling::{Result, SpiralError};
pub use heading::Heading;
pub use spiral::{locate, start_position, step_limit, SpiralCell, SpiralWalk};
pub use types::{Coord, Dimensions};
pub use validation::{valid_coordinates, valid_width_and_height};

/// Value at (`x`, `y`) on a `width` x `height` spiral.
///
/// The shape is checked before the coordinate, and the first failure wins.
pub fn try_ulam(width: u32, height: u32, x: u32, y: u32) -> Result<u64> {
    let dims = Dimensions::new(width, height).validate()?;
    let target = dims.check_coord(Coord::new(x, y))?;
    locate(dims, target)
}

/// Reporting wrapper around [`try_ulam`]: failures are logged at error
/// level and yield `None`.
pub fn ulam(width: u32, height: u32, x: u32, y: u32) -> Option<u64> {
    match try_ulam(width, height, x, y) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}
