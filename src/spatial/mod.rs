//! Spatial data structures for tiles and the stitched composite
//!
//! This module contains the pixel-level building blocks:
//! - Tile records with precomputed rotation views
//! - The tile arena and border geometry
//! - Composite stitching and whole-image transforms

/// Composite image stitching and transforms
pub mod composite;
/// Tile records, the tile arena, and border geometry
pub mod tile;

pub use tile::{Pixels, Tile, TileSet};
