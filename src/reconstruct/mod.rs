//! Tile reconstruction: loading, slicing, composition, and execution

/// Canvas composition along the scan path
pub mod canvas;
/// Reconstruction orchestration and artifact persistence
pub mod executor;
/// Raw capture matrix loading
pub mod matrix;
/// Background execution with supersession for interactive callers
pub mod session;
/// Column slicing of the raw matrix into tiles
pub mod tiles;

pub use canvas::{Composition, compose};
pub use executor::{ReconstructionOutput, Reconstructor};
pub use matrix::RawMatrix;
pub use session::ReconstructionSession;
pub use tiles::TileSet;
