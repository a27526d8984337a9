//! Tile reassembly and pattern search over square binary-pixel image fragments
//!
//! The crate parses a set of scrambled square tiles, reconstructs the
//! original image by resolving adjacency, orientation, and grid placement,
//! and searches the stitched composite for a fixed pixel pattern under all
//! eight orientations.

#![deny(unsafe_code)]

/// Adjacency resolution, orientation, grid placement, and the solve pipeline
pub mod algorithm;
/// Pattern definition and composite-image search
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Tile and composite-image data structures
pub mod spatial;

pub use io::error::{Result, SolverError};
