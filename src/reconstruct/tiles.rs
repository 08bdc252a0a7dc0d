//! Column slicing of the raw matrix into acquisition-ordered tiles

use ndarray::{ArrayView2, s};

use crate::io::error::{Result, invalid_parameter};
use crate::reconstruct::matrix::RawMatrix;

/// The raw matrix split into `num_images` equally-wide column slices
///
/// Tiles are indexed `0..num_images` in acquisition order. Each tile is a
/// zero-copy view into the source matrix; the tile width is the floor of
/// `total_columns / num_images`, and any remainder columns are discarded.
#[derive(Debug)]
pub struct TileSet<'a> {
    source: ArrayView2<'a, f64>,
    tile_width: usize,
    count: usize,
}

impl<'a> TileSet<'a> {
    /// Split a raw matrix into `num_images` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has fewer columns than `num_images`,
    /// which would make every tile zero samples wide.
    pub fn split(matrix: &'a RawMatrix, num_images: usize) -> Result<Self> {
        let tile_width = matrix.cols() / num_images.max(1);
        if tile_width == 0 {
            return Err(invalid_parameter(
                "num_images",
                &num_images,
                &format!(
                    "matrix has only {} columns, not enough for {num_images} tiles",
                    matrix.cols()
                ),
            ));
        }
        Ok(Self {
            source: matrix.view(),
            tile_width,
            count: num_images,
        })
    }

    /// Width of each tile in samples
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Number of sample rows shared by every tile
    pub fn rows(&self) -> usize {
        self.source.nrows()
    }

    /// Number of tiles in acquisition order
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Whether the set holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// View of the tile at `index`, or `None` past the end of the set
    pub fn tile(&self, index: usize) -> Option<ArrayView2<'_, f64>> {
        if index >= self.count {
            return None;
        }
        let start = index * self.tile_width;
        let end = start + self.tile_width;
        Some(self.source.slice(s![.., start..end]))
    }
}
