//! Canvas composition: placing tiles along the scan path

use ndarray::{Array2, s};

use crate::io::error::{ReconstructionError, Result};
use crate::reconstruct::matrix::RawMatrix;
use crate::reconstruct::tiles::TileSet;
use crate::scan::params::ReconstructionParams;
use crate::scan::path::generate_path;

/// Result of composing tiles onto the output canvas
#[derive(Debug, Clone)]
pub struct Composition {
    /// The assembled canvas, `(rows * target_height) x (tile_width * target_width)`
    pub canvas: Array2<f64>,
    /// Number of tiles actually placed
    pub placed: usize,
    /// Number of grid cells the target layout asks for
    pub expected: usize,
}

impl Composition {
    /// Whether the scan path covered every cell of the target grid
    pub const fn is_complete(&self) -> bool {
        self.placed == self.expected
    }
}

/// Compose the raw matrix into a canvas along the scan path
///
/// Validates the parameters, slices the matrix into tiles, generates the
/// path, and copies tile `i` to the pixel offset implied by `path[i]`. The
/// canvas is zero-initialized; cells the path never reaches stay zero. A
/// path shorter than the grid is reported through [`Composition::placed`]
/// and a warning, never as an error.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, the matrix is too
/// narrow to slice, or fewer tiles exist than the grid requires. All of
/// these fail before any canvas is allocated.
pub fn compose(matrix: &RawMatrix, params: &ReconstructionParams) -> Result<Composition> {
    params.validate()?;

    let tiles = TileSet::split(matrix, params.num_images)?;
    let required = params.grid_cells();
    if tiles.len() < required {
        return Err(ReconstructionError::InsufficientTiles {
            available: tiles.len(),
            required,
        });
    }

    let path = generate_path(params);

    let rows = matrix.rows();
    let tile_width = tiles.tile_width();
    let mut canvas = Array2::zeros((rows * params.target_height, tile_width * params.target_width));

    let mut placed = 0_usize;
    for (index, position) in path.iter().enumerate() {
        let Some(tile) = tiles.tile(index) else {
            break;
        };
        let x0 = position.x * tile_width;
        let y0 = position.y * rows;
        canvas
            .slice_mut(s![y0..y0 + rows, x0..x0 + tile_width])
            .assign(&tile);
        placed += 1;
    }

    if placed < required {
        tracing::warn!(
            placed,
            expected = required,
            "scan path ended before covering the target grid; uncovered cells stay zero"
        );
    }

    Ok(Composition {
        canvas,
        placed,
        expected: required,
    })
}
