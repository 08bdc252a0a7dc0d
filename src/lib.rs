//! Boustrophedon scan-path reconstruction of composite images
//!
//! Raw capture data arrives as one wide numeric matrix holding N
//! equally-sized tiles in acquisition order. The scan hardware traverses
//! its target area in a snake pattern whose starting corner and first
//! sweep direction are configurable; this crate regenerates that path,
//! slices the matrix into tiles, and places each tile at the grid cell the
//! path assigns it, yielding a single composite canvas for preview or
//! persistence.

/// Input/output operations and error handling
pub mod io;
/// Data loading, tile slicing, canvas composition, and execution
pub mod reconstruct;
/// Scan parameters and path generation
pub mod scan;

pub use io::error::{ReconstructionError, Result};
