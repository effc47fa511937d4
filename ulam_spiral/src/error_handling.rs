// error_handling.rs - Error taxonomy for spiral lookups

use thiserror::Error;

use crate::types::{Coord, Dimensions};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    #[error("Invalid width and height combination: {width}x{height}")]
    InvalidShape { width: u32, height: u32 },

    #[error("Invalid x and y combination: ({x}, {y}) outside {width}x{height}")]
    InvalidCoordinate {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The walk ran past its step limit without reaching the target.
    /// Validated input never gets here; seeing it means the engine is broken.
    #[error("Spiral traversal exhausted after {limit} steps without reaching ({x}, {y})")]
    TraversalExhausted { x: u32, y: u32, limit: u64 },
}

impl SpiralError {
    pub fn invalid_shape(dims: Dimensions) -> Self {
        Self::InvalidShape {
            width: dims.width,
            height: dims.height,
        }
    }

    pub fn invalid_coordinate(dims: Dimensions, coord: Coord) -> Self {
        Self::InvalidCoordinate {
            x: coord.x,
            y: coord.y,
            width: dims.width,
            height: dims.height,
        }
    }

    /// True for errors caused by the caller's arguments rather than the engine
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidShape { .. } | Self::InvalidCoordinate { .. })
    }
}

pub type Result<T> = std::result::Result<T, SpiralError>;
