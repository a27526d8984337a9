//! Grid placement from a corner tile and placement validation
//!
//! Once orientation is resolved, tile neighbor maps describe a rigid
//! rectangle. Placement starts from any tile with exactly two neighbors (a
//! corner), walks the neighbor maps breadth-first in signed coordinates,
//! and normalizes the placed rectangle by its minimum coordinates. The
//! corner is identified purely by neighbor count; which quadrant the walk
//! grows into does not matter because the later pattern search covers all
//! eight image orientations.

use std::collections::{HashMap, VecDeque};

use crate::io::error::{Result, structure_error};
use crate::spatial::tile::{GRID_OFFSETS, TileSet};

/// Resolved grid of arena indices, row-major from the top-left cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Vec<Vec<usize>>,
    side: usize,
}

impl TileGrid {
    /// Edge length of the grid in tiles
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Arena index at a grid cell
    pub fn cell(&self, x: usize, y: usize) -> Option<usize> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows of arena indices, top to bottom
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.cells
    }
}

/// Place oriented tiles into their grid cells
///
/// # Errors
///
/// Returns a structural error when the tile count is not a perfect square,
/// no corner tile exists, two tiles resolve to the same cell, or the placed
/// tiles do not fill an exact square.
pub fn place(tiles: &TileSet) -> Result<TileGrid> {
    let side = tiles.grid_side()?;

    let corner = tiles
        .iter()
        .position(|tile| tile.neighbor_count() == 2)
        .ok_or_else(|| {
            structure_error(&"no corner tile found (expected a tile with exactly two neighbors)")
        })?;

    let mut board: HashMap<(i32, i32), usize> = HashMap::with_capacity(tiles.len());
    let mut seen = vec![false; tiles.len()];
    let mut queue = VecDeque::with_capacity(tiles.len());
    queue.push_back((corner, 0_i32, 0_i32));

    while let Some((index, x, y)) = queue.pop_front() {
        if seen.get(index).copied().unwrap_or(true) {
            continue;
        }
        if let Some(flag) = seen.get_mut(index) {
            *flag = true;
        }

        if let Some(occupant) = board.insert((x, y), index) {
            let occupant_id = tiles.get(occupant).map_or(0, |tile| tile.id());
            let incoming_id = tiles.get(index).map_or(0, |tile| tile.id());
            return Err(structure_error(&format!(
                "tiles {occupant_id} and {incoming_id} both resolve to grid cell ({x}, {y})"
            )));
        }

        let neighbors = tiles
            .get(index)
            .ok_or_else(|| structure_error(&format!("missing tile index {index}")))?
            .neighbors();
        for (offsets, neighbor) in GRID_OFFSETS.iter().zip(neighbors.iter()) {
            if let Some(next) = *neighbor {
                queue.push_back((next, x + offsets[0], y + offsets[1]));
            }
        }
    }

    normalize(&board, side, tiles.len())
}

/// Shift placed coordinates to start at (0, 0) and validate the rectangle
fn normalize(board: &HashMap<(i32, i32), usize>, side: usize, count: usize) -> Result<TileGrid> {
    if board.len() != count {
        return Err(structure_error(&format!(
            "placed {} of {count} tiles; neighbor maps do not describe a full grid",
            board.len()
        )));
    }

    let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
    let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
    for &(x, y) in board.keys() {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let width = max_x.saturating_sub(min_x) + 1;
    let height = max_y.saturating_sub(min_y) + 1;
    if width != side as i32 || height != side as i32 {
        return Err(structure_error(&format!(
            "tiles span a {width} x {height} region, expected {side} x {side}"
        )));
    }

    let mut cells = Vec::with_capacity(side);
    for y in 0..side {
        let mut row = Vec::with_capacity(side);
        for x in 0..side {
            let key = (min_x + x as i32, min_y + y as i32);
            let index = board.get(&key).ok_or_else(|| {
                structure_error(&format!("grid has a hole at cell ({x}, {y})"))
            })?;
            row.push(*index);
        }
        cells.push(row);
    }

    Ok(TileGrid { cells, side })
}
