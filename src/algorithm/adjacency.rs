//! Pairwise border matching and the undirected adjacency graph
//!
//! Two tiles are adjacent when any border of one equals any border of the
//! other, directly or reversed. Orientation is deliberately ignored here;
//! the resolver only answers "can these tiles ever join", and the
//! orientation pass settles how.

use crate::io::error::{Result, structure_error};
use crate::spatial::tile::{Tile, TileSet, match_borders};

/// Undirected tile adjacency, keyed by arena index
///
/// Computed once from the parsed tile set and read-only afterwards.
/// Neighbor lists follow arena order, so resolution is deterministic for a
/// given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Build the adjacency graph for a tile set
    ///
    /// Every unordered pair of distinct tiles is tested over all 4 x 4
    /// border combinations. The comparison count is quadratic in the tile
    /// count, which is acceptable at puzzle scale.
    pub fn resolve(tiles: &TileSet) -> Self {
        let borders: Vec<[Vec<u8>; 4]> = tiles.iter().map(Tile::borders).collect();

        let neighbors = borders
            .iter()
            .enumerate()
            .map(|(index, own)| {
                borders
                    .iter()
                    .enumerate()
                    .filter(|&(other_index, _)| other_index != index)
                    .filter(|&(_, other)| share_border(own, other))
                    .map(|(other_index, _)| other_index)
                    .collect()
            })
            .collect();

        Self { neighbors }
    }

    /// Number of tiles covered by the graph
    pub const fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the graph covers no tiles
    pub const fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbor arena indices of a tile (empty for unknown indices)
    pub fn neighbors(&self, index: usize) -> &[usize] {
        match self.neighbors.get(index) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Arena indices of tiles with exactly two adjacencies
    ///
    /// For a valid rectangular tiling these are exactly the four grid
    /// corners.
    pub fn corner_indices(&self) -> Vec<usize> {
        self.neighbors
            .iter()
            .enumerate()
            .filter(|(_, list)| list.len() == 2)
            .map(|(index, _)| index)
            .collect()
    }

    /// Product of the four corner tile ids
    ///
    /// # Errors
    ///
    /// Returns a structural error when the corner count is not exactly four
    /// or the product overflows.
    pub fn corner_checksum(&self, tiles: &TileSet) -> Result<u64> {
        let corners = self.corner_indices();
        if corners.len() != 4 {
            return Err(structure_error(&format!(
                "expected exactly 4 corner tiles, found {}",
                corners.len()
            )));
        }

        corners
            .iter()
            .filter_map(|&index| tiles.get(index))
            .try_fold(1_u64, |product, tile| {
                product.checked_mul(tile.id()).ok_or_else(|| {
                    structure_error(&"corner id product overflows a 64-bit integer")
                })
            })
    }
}

fn share_border(own: &[Vec<u8>; 4], other: &[Vec<u8>; 4]) -> bool {
    own.iter()
        .any(|border| other.iter().any(|candidate| match_borders(border, candidate).is_some()))
}
