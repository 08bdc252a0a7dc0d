//! Scan geometry: parameters and boustrophedon path generation

/// Scan parameters, direction enumerations, and validation
pub mod params;
/// Deterministic snake-path traversal of the target grid
pub mod path;

pub use params::{Direction, ReconstructionParams, StartCorner};
pub use path::{GridPosition, generate_path};
