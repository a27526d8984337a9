//! Orientation resolution over the adjacency graph
//!
//! Breadth-first relaxation: starting from an arbitrary tile, every
//! unvisited neighbor is rotated (and possibly flipped) until its matching
//! border sits directly opposite the visited tile's, then the pair is
//! linked in both neighbor maps. Once the traversal drains, every tile is
//! in its final orientation and the join invariant holds across all
//! resolved edges: a tile's border at direction d equals the reversed
//! border of its neighbor at direction (d + 2) mod 4.

use std::collections::VecDeque;

use crate::algorithm::adjacency::AdjacencyGraph;
use crate::io::error::{Result, structure_error};
use crate::spatial::tile::{BorderMatch, Tile, TileSet, match_borders, opposite};

/// Rotate and flip every tile into its final orientation
///
/// # Errors
///
/// Returns a structural error when the adjacency graph is disconnected or
/// two tiles reported adjacent share no border.
pub fn align(tiles: &mut TileSet, graph: &AdjacencyGraph) -> Result<()> {
    if tiles.is_empty() {
        return Err(structure_error(&"cannot orient an empty tile set"));
    }

    let mut processed = vec![false; tiles.len()];
    let mut enqueued = vec![false; tiles.len()];
    let mut queue = VecDeque::with_capacity(tiles.len());

    queue.push_back(0);
    mark(&mut enqueued, 0);

    while let Some(current) = queue.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if processed.get(neighbor).copied().unwrap_or(true) {
                continue;
            }

            align_pair(tiles, current, neighbor)?;

            if !enqueued.get(neighbor).copied().unwrap_or(true) {
                queue.push_back(neighbor);
                mark(&mut enqueued, neighbor);
            }
        }
        mark(&mut processed, current);
    }

    if processed.iter().any(|&done| !done) {
        return Err(structure_error(&"adjacency graph is disconnected"));
    }

    Ok(())
}

fn mark(flags: &mut [bool], index: usize) {
    if let Some(flag) = flags.get_mut(index) {
        *flag = true;
    }
}

/// Orient `other` against the already-oriented `anchor` and link the pair
///
/// The matching border pairing (direction on the anchor, direction on the
/// other) determines the rotation: (direction + 2 - other_direction) mod 4
/// quarter turns place the other tile's matching border directly opposite
/// the anchor's. A direct (non-reversed) match means the winding directions
/// agree where they must oppose, so the other tile is additionally flipped:
/// horizontally for a north/south join, vertically for east/west.
fn align_pair(tiles: &mut TileSet, anchor: usize, other: usize) -> Result<()> {
    let (anchor_id, anchor_borders) = {
        let tile = tiles
            .get(anchor)
            .ok_or_else(|| structure_error(&format!("missing tile index {anchor}")))?;
        (tile.id(), tile.borders())
    };

    for (direction, border) in anchor_borders.iter().enumerate() {
        let candidate_borders = tiles
            .get(other)
            .ok_or_else(|| structure_error(&format!("missing tile index {other}")))?
            .borders();

        for (other_direction, candidate) in candidate_borders.iter().enumerate() {
            let Some(kind) = match_borders(border, candidate) else {
                continue;
            };

            let quarter_turns = (direction + 6 - other_direction) % 4;
            let tile = tiles
                .get_mut(other)
                .ok_or_else(|| structure_error(&format!("missing tile index {other}")))?;
            tile.rotate(quarter_turns);

            if kind == BorderMatch::Direct {
                if direction % 2 == 0 {
                    tile.flip_horizontal();
                } else {
                    tile.flip_vertical();
                }
            }

            tile.set_neighbor(opposite(direction), anchor)?;
            tiles
                .get_mut(anchor)
                .ok_or_else(|| structure_error(&format!("missing tile index {anchor}")))?
                .set_neighbor(direction, other)?;
            return Ok(());
        }
    }

    let other_id = tiles.get(other).map_or(0, Tile::id);
    Err(structure_error(&format!(
        "tiles {anchor_id} and {other_id} are listed as adjacent but share no border"
    )))
}
