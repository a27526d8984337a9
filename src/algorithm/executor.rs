//! Pipeline orchestration from raw input to solution
//!
//! The stages run strictly in sequence: parse, adjacency resolution,
//! checksum, orientation, placement, border stripping, stitching, pattern
//! search. Each stage consumes the previous stage's value; there is no
//! shared mutable state beyond the tile arena itself.

use crate::algorithm::adjacency::AdjacencyGraph;
use crate::algorithm::{orientation, placement};
use crate::analysis::pattern::Pattern;
use crate::analysis::search;
use crate::io::configuration::SEA_MONSTER;
use crate::io::error::Result;
use crate::io::parser::parse_tiles;
use crate::spatial::composite;
use crate::spatial::tile::Pixels;

/// Results of a completed solve
#[derive(Debug, Clone)]
pub struct Solution {
    /// Product of the four corner tile ids
    pub corner_checksum: u64,
    /// Set pixels not covered by any pattern match
    pub roughness: usize,
    /// The composite image in the orientation where the pattern was found
    pub composite: Pixels,
    /// Top-left anchors of every pattern match, as (x, y)
    pub matches: Vec<[usize; 2]>,
}

/// Solve a puzzle input end to end
///
/// # Errors
///
/// Returns a parse error for malformed input, a structural error when the
/// tiles do not describe a full square grid, and a search error when no
/// image orientation contains the pattern.
pub fn solve_input(input: &str) -> Result<Solution> {
    let mut tiles = parse_tiles(input)?;

    let graph = AdjacencyGraph::resolve(&tiles);
    let corner_checksum = graph.corner_checksum(&tiles)?;

    orientation::align(&mut tiles, &graph)?;
    let grid = placement::place(&tiles)?;

    tiles.strip_borders();
    let image = composite::stitch(&tiles, &grid)?;

    let pattern = Pattern::from_rows(&SEA_MONSTER)?;
    let outcome = search::search_oriented(&image, &pattern)?;

    Ok(Solution {
        corner_checksum,
        roughness: outcome.roughness,
        composite: outcome.image,
        matches: outcome.matches,
    })
}
