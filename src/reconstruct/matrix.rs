//! Raw capture data loading from whitespace-delimited text
//!
//! A capture file holds one matrix row per line, columns separated by
//! whitespace, every token a floating-point number. All tiles share the row
//! count of this matrix, so a ragged row makes the whole file unusable and
//! is rejected at load time with the offending line.

use std::path::Path;

use ndarray::{Array2, ArrayView2};

use crate::io::error::{ReconstructionError, Result, data_load_error};

/// The full raw data matrix of a scan, `rows x (tile_width * num_images)`
#[derive(Debug, Clone)]
pub struct RawMatrix {
    data: Array2<f64>,
}

impl RawMatrix {
    /// Load a matrix from a whitespace-delimited text file
    ///
    /// Blank lines are skipped, matching the acquisition tooling's dumps.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains a non-numeric
    /// token or a ragged row (both reported with their line number), or
    /// contains no numeric rows at all.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ReconstructionError::FileSystem {
                path: path.to_path_buf(),
                operation: "read data file",
                source: e,
            })?;
        let matrix = Self::parse(&text, path)?;
        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            path = %path.display(),
            "loaded raw data matrix"
        );
        Ok(matrix)
    }

    /// Parse a matrix from in-memory text, reporting errors against `origin`
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RawMatrix::load`], minus the file read.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let mut values: Vec<f64> = Vec::new();
        let mut rows = 0_usize;
        let mut cols: Option<usize> = None;

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let mut row_len = 0_usize;

            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| {
                    data_load_error(
                        origin,
                        line_number,
                        &format!("invalid numeric token '{token}'"),
                    )
                })?;
                values.push(value);
                row_len += 1;
            }

            if row_len == 0 {
                continue;
            }

            match cols {
                None => cols = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(data_load_error(
                        origin,
                        line_number,
                        &format!("expected {expected} columns, found {row_len}"),
                    ));
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(ReconstructionError::EmptyInput {
                path: origin.to_path_buf(),
            });
        };

        let data = Array2::from_shape_vec((rows, cols), values).map_err(|e| {
            data_load_error(origin, rows, &format!("inconsistent matrix shape: {e}"))
        })?;
        Ok(Self { data })
    }

    /// Wrap an existing array as a raw matrix
    pub const fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Number of sample rows (shared by every tile)
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Total number of sample columns across all tiles
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Read-only view of the underlying samples
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("capture.txt")
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let matrix = RawMatrix::parse("1 2 3\n\n4 5 6\n", &origin());
        let matrix = match matrix {
            Ok(m) => m,
            Err(e) => unreachable!("parse failed: {e}"),
        };
        assert_eq!((matrix.rows(), matrix.cols()), (2, 3));
    }

    #[test]
    fn test_parse_rejects_non_numeric_token_with_line() {
        let err = match RawMatrix::parse("1 2\n3 oops\n", &origin()) {
            Err(e) => e,
            Ok(_) => unreachable!("parse should fail"),
        };
        match err {
            ReconstructionError::DataLoad { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("oops"));
            }
            other => unreachable!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_ragged_row() {
        let err = match RawMatrix::parse("1 2 3\n4 5\n", &origin()) {
            Err(e) => e,
            Ok(_) => unreachable!("parse should fail"),
        };
        assert!(matches!(
            err,
            ReconstructionError::DataLoad { line: 2, .. }
        ));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let err = match RawMatrix::parse("\n  \n", &origin()) {
            Err(e) => e,
            Ok(_) => unreachable!("parse should fail"),
        };
        assert!(matches!(err, ReconstructionError::EmptyInput { .. }));
    }
}
