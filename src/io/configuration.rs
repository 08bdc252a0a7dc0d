//! Constants and parameter-file loading

use std::path::Path;

use serde::Deserialize;

use crate::io::error::{ReconstructionError, Result, invalid_parameter};
use crate::scan::params::{Direction, ReconstructionParams, StartCorner};

// Safety limit to prevent excessive memory allocation
/// Maximum allowed target grid dimension in tiles
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Filename prefix shared by all reconstruction artifacts
pub const OUTPUT_FILE_PREFIX: &str = "reconstructed_image";

/// Timestamp format embedded in artifact filenames
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension of raw capture data files accepted by the CLI
pub const DATA_EXTENSION: &str = "txt";

/// Suffix of the optional 8-bit preview export
pub const PREVIEW_SUFFIX: &str = "_preview";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// On-disk shape of a parameter file: `{"parameters": {...}}`
#[derive(Debug, Deserialize)]
struct ParameterFile {
    parameters: RawParameters,
}

/// Raw integer-coded parameters as written by the acquisition tooling
#[derive(Debug, Deserialize)]
struct RawParameters {
    num_images: usize,
    target_width: usize,
    target_height: usize,
    start_corner: u8,
    first_direction: u8,
    second_direction: u8,
}

impl RawParameters {
    fn decode(self) -> Result<ReconstructionParams> {
        let params = ReconstructionParams {
            num_images: self.num_images,
            target_width: self.target_width,
            target_height: self.target_height,
            start_corner: StartCorner::from_code(self.start_corner)?,
            first_direction: Direction::from_code(self.first_direction)?,
            second_direction: Direction::from_code(self.second_direction)?,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Load and validate reconstruction parameters from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON of the
/// expected shape, or decodes to parameters that fail validation.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ReconstructionParams> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ReconstructionError::FileSystem {
        path: path.to_path_buf(),
        operation: "read parameter file",
        source: e,
    })?;
    let file: ParameterFile = serde_json::from_str(&text)
        .map_err(|e| invalid_parameter("parameters", &path.display(), &e))?;
    file.parameters.decode()
}
