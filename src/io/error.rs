//! Error types for data loading, validation, and artifact export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum ReconstructionError {
    /// Input data contained a token or row that could not be used
    DataLoad {
        /// Path to the data file
        path: PathBuf,
        /// One-based line number of the offending row
        line: usize,
        /// Description of what made the row unusable
        reason: String,
    },

    /// Input data contained no numeric rows at all
    EmptyInput {
        /// Path to the data file
        path: PathBuf,
    },

    /// Fewer tiles were acquired than the target grid requires
    ///
    /// Raised before any canvas allocation; no partial output exists.
    InsufficientTiles {
        /// Number of tiles available in the raw data
        available: usize,
        /// Number of grid cells that must be covered
        required: usize,
    },

    /// Reconstruction parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a reconstruction artifact
    ArtifactWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataLoad { path, line, reason } => {
                write!(
                    f,
                    "Failed to load data from '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::EmptyInput { path } => {
                write!(
                    f,
                    "Input file '{}' contains no numeric rows",
                    path.display()
                )
            }
            Self::InsufficientTiles {
                available,
                required,
            } => {
                write!(
                    f,
                    "Not enough tiles: {available} available, {required} required by the target grid"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ArtifactWrite { path, source } => {
                write!(
                    f,
                    "Failed to write artifact to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ReconstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ArtifactWrite { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, ReconstructionError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ReconstructionError {
    ReconstructionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a data load error for a specific line of a source file
pub fn data_load_error(
    path: impl Into<PathBuf>,
    line: usize,
    reason: &impl ToString,
) -> ReconstructionError {
    ReconstructionError::DataLoad {
        path: path.into(),
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_tiles_message_names_both_counts() {
        let err = ReconstructionError::InsufficientTiles {
            available: 4,
            required: 9,
        };
        let message = err.to_string();
        assert!(message.contains('4'));
        assert!(message.contains('9'));
    }

    #[test]
    fn test_data_load_error_reports_line() {
        let err = data_load_error("capture.txt", 3, &"invalid numeric token 'abc'");
        let message = err.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_file_system_error_exposes_source_and_context() {
        let err = ReconstructionError::FileSystem {
            path: PathBuf::from("captures"),
            operation: "scan target directory",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
        let message = err.to_string();
        assert!(message.contains("scan target directory"));
        assert!(message.contains("captures"));
    }
}
