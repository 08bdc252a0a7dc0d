//! Scan geometry parameters and their configuration-code decoding
//!
//! The acquisition hardware reports its scan geometry as small integer codes.
//! This module decodes those codes into variant types and validates the
//! resulting parameter set before any path generation or placement happens.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Corner of the target grid where the scan begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartCorner {
    /// Scan begins at grid cell (0, 0)
    TopLeft,
    /// Scan begins at grid cell (width - 1, 0)
    TopRight,
    /// Scan begins at grid cell (0, height - 1)
    BottomLeft,
    /// Scan begins at grid cell (width - 1, height - 1)
    BottomRight,
}

impl StartCorner {
    /// Decode a corner from its configuration code
    ///
    /// # Errors
    ///
    /// Returns an error if the code is outside `0..=3`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::TopLeft),
            1 => Ok(Self::TopRight),
            2 => Ok(Self::BottomLeft),
            3 => Ok(Self::BottomRight),
            _ => Err(invalid_parameter(
                "start_corner",
                &code,
                &"expected a corner code in 0..=3",
            )),
        }
    }
}

/// Direction of a scan movement across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards decreasing row index
    Up,
    /// Towards increasing row index
    Down,
    /// Towards decreasing column index
    Left,
    /// Towards increasing column index
    Right,
}

impl Direction {
    /// Decode a direction from its configuration code
    ///
    /// # Errors
    ///
    /// Returns an error if the code is outside `0..=3`.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Up),
            1 => Ok(Self::Down),
            2 => Ok(Self::Left),
            3 => Ok(Self::Right),
            _ => Err(invalid_parameter(
                "direction",
                &code,
                &"expected a direction code in 0..=3",
            )),
        }
    }

    /// Whether this direction moves along the horizontal axis
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Immutable parameter set for a single reconstruction call
///
/// Callers own the parameters; every reconstruction re-validates them, and
/// no state derived from them survives between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructionParams {
    /// Number of tiles acquired by the scan
    pub num_images: usize,
    /// Target grid width in tiles
    pub target_width: usize,
    /// Target grid height in tiles
    pub target_height: usize,
    /// Corner where the traversal starts
    pub start_corner: StartCorner,
    /// Preferred direction of the first sweep
    pub first_direction: Direction,
    /// Orthogonal axis hint from the acquisition configuration
    ///
    /// Decoded and carried for fidelity with the capture metadata, but the
    /// traversal derives its turn direction from the start corner alone and
    /// never consults this field.
    pub second_direction: Direction,
}

impl ReconstructionParams {
    /// Number of cells in the target grid
    pub const fn grid_cells(&self) -> usize {
        self.target_width * self.target_height
    }

    /// Check that all parameters are usable before reconstruction
    ///
    /// # Errors
    ///
    /// Returns an error if any count or dimension is zero, or if a target
    /// dimension exceeds [`MAX_GRID_DIMENSION`].
    pub fn validate(&self) -> Result<()> {
        if self.num_images == 0 {
            return Err(invalid_parameter(
                "num_images",
                &self.num_images,
                &"at least one tile is required",
            ));
        }
        if self.target_width == 0 {
            return Err(invalid_parameter(
                "target_width",
                &self.target_width,
                &"grid width must be at least 1",
            ));
        }
        if self.target_height == 0 {
            return Err(invalid_parameter(
                "target_height",
                &self.target_height,
                &"grid height must be at least 1",
            ));
        }
        if self.target_width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "target_width",
                &self.target_width,
                &format!("grid width must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.target_height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "target_height",
                &self.target_height,
                &format!("grid height must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(())
    }
}
