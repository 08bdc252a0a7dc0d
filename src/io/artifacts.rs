//! Persistence of reconstruction artifacts
//!
//! Every successful reconstruction is saved twice: as an unsigned 16-bit
//! single-channel TIFF and as a plain-text integer dump of the same canvas.
//! Values go to disk in their raw numeric form. The TIFF cast truncates
//! toward zero and wraps modulo 2^16; the text dump truncates toward zero.
//! Neither output is clamped or normalized.

use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageBuffer, Luma};
use ndarray::Array2;

use crate::io::configuration::{OUTPUT_FILE_PREFIX, TIMESTAMP_FORMAT};
use crate::io::error::{ReconstructionError, Result};

/// Locations of the artifacts written for one reconstruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The unsigned 16-bit TIFF image
    pub tiff: PathBuf,
    /// The row-major integer text dump
    pub text: PathBuf,
}

/// Cast a canvas sample to the TIFF's unsigned 16-bit range
///
/// Truncates toward zero, then wraps modulo 2^16, matching a raw integer
/// cast rather than a clamping conversion.
const fn to_u16_sample(value: f64) -> u16 {
    (value as i64) as u16
}

/// Save the canvas as a timestamped TIFF/text artifact pair
///
/// Filenames embed the timestamp and the canvas `height x width`. The
/// output directory is created when missing. A failed write aborts only
/// persistence; the caller still holds the in-memory canvas.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or either
/// artifact cannot be encoded or written.
pub fn save_outputs(canvas: &Array2<f64>, output_dir: &Path) -> Result<ArtifactPaths> {
    std::fs::create_dir_all(output_dir).map_err(|e| ReconstructionError::FileSystem {
        path: output_dir.to_path_buf(),
        operation: "create output directory",
        source: e,
    })?;

    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    let (height, width) = canvas.dim();
    let base = format!("{OUTPUT_FILE_PREFIX}_{timestamp}_{height}x{width}");

    let tiff = output_dir.join(format!("{base}.tiff"));
    save_tiff(canvas, &tiff)?;
    tracing::info!(path = %tiff.display(), "saved TIFF artifact");

    let text = output_dir.join(format!("{base}.txt"));
    save_text(canvas, &text)?;
    tracing::info!(path = %text.display(), "saved text artifact");

    Ok(ArtifactPaths { tiff, text })
}

/// Encode the canvas as an unsigned 16-bit grayscale TIFF
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written.
pub fn save_tiff(canvas: &Array2<f64>, path: &Path) -> Result<()> {
    let (height, width) = canvas.dim();
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            let value = canvas
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or_default();
            Luma([to_u16_sample(value)])
        });

    img.save(path).map_err(|e| ReconstructionError::ArtifactWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Dump the canvas as whitespace/line-delimited integers, row-major
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_text(canvas: &Array2<f64>, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| ReconstructionError::FileSystem {
        path: path.to_path_buf(),
        operation: "create text artifact",
        source: e,
    })?;
    let mut writer = std::io::BufWriter::new(file);

    let write_failed = |e| ReconstructionError::FileSystem {
        path: path.to_path_buf(),
        operation: "write text artifact",
        source: e,
    };

    for row in canvas.rows() {
        let mut first = true;
        for &value in row {
            if first {
                first = false;
            } else {
                write!(writer, " ").map_err(write_failed)?;
            }
            // Fractional parts are truncated toward zero
            write!(writer, "{}", value.trunc() as i64).map_err(write_failed)?;
        }
        writeln!(writer).map_err(write_failed)?;
    }
    writer.flush().map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_cast_wraps_out_of_range_values() {
        assert_eq!(to_u16_sample(70000.7), 4464);
        assert_eq!(to_u16_sample(65535.0), 65535);
        assert_eq!(to_u16_sample(-1.5), 65535);
        assert_eq!(to_u16_sample(0.9), 0);
    }
}
