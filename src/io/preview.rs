//! Display normalization and 8-bit preview export
//!
//! The composed canvas keeps its raw numeric values; anything that shows it
//! on screen first stretches it to a display range. The stretch here is the
//! plain min/max mapping the interactive front end applies.

use std::path::Path;

use image::{ImageBuffer, Luma};
use ndarray::Array2;

use crate::io::error::{ReconstructionError, Result};

/// Display value used when every canvas sample is identical
///
/// A flat canvas has no contrast to stretch; a mid-range constant avoids
/// the division by zero.
pub const FLAT_CANVAS_LEVEL: u8 = 128;

/// Min/max stretch of the canvas to the 8-bit display range
///
/// A canvas where every value is equal maps to a uniform
/// [`FLAT_CANVAS_LEVEL`] image instead of dividing by zero.
pub fn normalize_for_display(canvas: &Array2<f64>) -> Array2<u8> {
    let min = canvas.iter().copied().fold(f64::INFINITY, f64::min);
    let max = canvas.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() || (max - min).abs() < f64::EPSILON {
        return Array2::from_elem(canvas.dim(), FLAT_CANVAS_LEVEL);
    }

    let span = max - min;
    canvas.mapv(|value| ((value - min) / span * 255.0) as u8)
}

/// Export the canvas as an 8-bit grayscale PNG after display normalization
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn export_preview_png(canvas: &Array2<f64>, path: &Path) -> Result<()> {
    let normalized = normalize_for_display(canvas);
    let (height, width) = normalized.dim();

    let img: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            let value = normalized
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or_default();
            Luma([value])
        });

    img.save(path).map_err(|e| ReconstructionError::ArtifactWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_canvas_normalizes_to_uniform_mid_range() {
        let canvas = Array2::zeros((3, 3));
        let normalized = normalize_for_display(&canvas);
        assert!(normalized.iter().all(|&v| v == FLAT_CANVAS_LEVEL));
    }

    #[test]
    fn test_stretch_maps_extremes_to_display_range() {
        let canvas = Array2::from_shape_fn((1, 3), |(_, j)| j as f64 * 50.0);
        let normalized = normalize_for_display(&canvas);
        let values: Vec<u8> = normalized.iter().copied().collect();
        assert_eq!(values, vec![0, 127, 255]);
    }
}
