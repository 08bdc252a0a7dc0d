//! Reconstruction orchestration: load, compose, persist
//!
//! [`Reconstructor`] ties the pieces together the way an interactive caller
//! consumes them: `preview` composes in memory only, `reconstruct` composes
//! and persists the artifact pair. Parameters are supplied per call and
//! re-validated each time; nothing is cached between calls.

use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::io::artifacts::{ArtifactPaths, save_outputs};
use crate::io::error::Result;
use crate::reconstruct::canvas::{Composition, compose};
use crate::reconstruct::matrix::RawMatrix;
use crate::scan::params::ReconstructionParams;

/// Outcome of a persisted reconstruction
#[derive(Debug)]
pub struct ReconstructionOutput {
    /// The composed canvas, also available to callers after persistence
    pub composition: Composition,
    /// Where the TIFF and text artifacts were written
    pub artifacts: ArtifactPaths,
}

/// Reconstructs a composite image from one raw capture matrix
#[derive(Debug)]
pub struct Reconstructor {
    matrix: RawMatrix,
    output_dir: PathBuf,
}

impl Reconstructor {
    /// Create a reconstructor over an already-loaded matrix
    pub fn new(matrix: RawMatrix, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            matrix,
            output_dir: output_dir.into(),
        }
    }

    /// Load the capture data from a text file and create a reconstructor
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be read or parsed.
    pub fn from_data_file(
        input_path: impl AsRef<Path>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let matrix = RawMatrix::load(input_path)?;
        Ok(Self::new(matrix, output_dir))
    }

    /// The raw capture matrix this reconstructor operates on
    pub const fn matrix(&self) -> &RawMatrix {
        &self.matrix
    }

    /// Compose the canvas without any I/O
    ///
    /// Returns the raw canvas for interactive feedback; display
    /// normalization is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or there are fewer
    /// tiles than grid cells.
    pub fn preview(&self, params: &ReconstructionParams) -> Result<Array2<f64>> {
        Ok(compose(&self.matrix, params)?.canvas)
    }

    /// Compose the canvas and persist the TIFF/text artifact pair
    ///
    /// # Errors
    ///
    /// Returns an error if composition fails, or if persistence fails; in
    /// the latter case no canvas is returned here, but a caller that needs
    /// one can fall back to [`Reconstructor::preview`], which cannot hit
    /// the write path.
    pub fn reconstruct(&self, params: &ReconstructionParams) -> Result<ReconstructionOutput> {
        let composition = compose(&self.matrix, params)?;
        let artifacts = save_outputs(&composition.canvas, &self.output_dir)?;
        tracing::info!(
            placed = composition.placed,
            expected = composition.expected,
            "reconstruction finished"
        );
        Ok(ReconstructionOutput {
            composition,
            artifacts,
        })
    }
}
