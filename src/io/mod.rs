//! Input/output operations and error handling

/// Artifact persistence (TIFF and text dumps)
pub mod artifacts;
/// Command-line interface and batch processing
pub mod cli;
/// Constants and parameter-file loading
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Display normalization and preview export
pub mod preview;
/// Progress display for batch runs
pub mod progress;
