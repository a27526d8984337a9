//! Tile records, the tile arena, and border geometry
//!
//! A tile stores all four rotation views of its pixel data up front, so
//! rotation is an index change and flips reflect every stored view at once.
//! Borders are read in a fixed clockwise winding, which makes the two match
//! kinds (direct and reversed equality) carry orientation information.

use ndarray::{Array2, Axis, s};

use crate::io::error::{Result, structure_error};

/// Square binary pixel data (1 = set, 0 = unset)
pub type Pixels = Array2<u8>;

/// Direction index for a tile's top edge
pub const NORTH: usize = 0;
/// Direction index for a tile's right edge
pub const EAST: usize = 1;
/// Direction index for a tile's bottom edge
pub const SOUTH: usize = 2;
/// Direction index for a tile's left edge
pub const WEST: usize = 3;

/// Grid coordinate deltas per direction index, as (dx, dy)
pub const GRID_OFFSETS: [[i32; 2]; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];

/// Direction index of the opposite edge
pub const fn opposite(direction: usize) -> usize {
    (direction + 2) % 4
}

/// How one border sequence matched another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderMatch {
    /// Equal as read; the joining tile still needs a flip
    Direct,
    /// Equal after reversal; rotation alone aligns the joining tile
    Reversed,
}

/// Compare two borders for a join, directly first, then reversed
pub fn match_borders(border: &[u8], candidate: &[u8]) -> Option<BorderMatch> {
    if border == candidate {
        Some(BorderMatch::Direct)
    } else if border.len() == candidate.len() && border.iter().eq(candidate.iter().rev()) {
        Some(BorderMatch::Reversed)
    } else {
        None
    }
}

/// One square tile with precomputed rotation views and resolved neighbors
///
/// Neighbors are arena indices into the owning [`TileSet`], keyed by
/// direction index. The neighbor map is filled in during assembly.
#[derive(Debug, Clone)]
pub struct Tile {
    id: u64,
    views: [Pixels; 4],
    rotation: usize,
    neighbors: [Option<usize>; 4],
}

impl Tile {
    /// Create a tile from reference pixel data, precomputing all 4 rotations
    pub fn new(id: u64, reference: Pixels) -> Self {
        let quarter = rotate_view(&reference);
        let half = rotate_view(&quarter);
        let three_quarter = rotate_view(&half);

        Self {
            id,
            views: [reference, quarter, half, three_quarter],
            rotation: 0,
            neighbors: [None; 4],
        }
    }

    /// Puzzle id of the tile
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Edge length of the active view
    pub fn side(&self) -> usize {
        self.view().nrows()
    }

    /// Pixel data for the active orientation
    pub const fn pixels(&self) -> &Pixels {
        self.view()
    }

    const fn view(&self) -> &Pixels {
        match self.rotation % 4 {
            1 => &self.views[1],
            2 => &self.views[2],
            3 => &self.views[3],
            _ => &self.views[0],
        }
    }

    /// Borders of the active orientation in clockwise winding
    ///
    /// North is the top row left-to-right, east the right column
    /// top-to-bottom, south the bottom row right-to-left, and west the left
    /// column bottom-to-top.
    pub fn borders(&self) -> [Vec<u8>; 4] {
        let view = self.view();
        let n = view.nrows();
        if n == 0 {
            return [const { Vec::new() }; 4];
        }

        let north = view.row(0).to_vec();
        let east = view.column(n - 1).to_vec();
        let south: Vec<u8> = view.row(n - 1).iter().rev().copied().collect();
        let west: Vec<u8> = view.column(0).iter().rev().copied().collect();
        [north, east, south, west]
    }

    /// Advance the active rotation by the given number of quarter turns
    pub const fn rotate(&mut self, quarter_turns: usize) {
        self.rotation = (self.rotation + quarter_turns) % 4;
    }

    /// Mirror every stored rotation view left-to-right
    pub fn flip_horizontal(&mut self) {
        for view in &mut self.views {
            view.invert_axis(Axis(1));
        }
    }

    /// Mirror every stored rotation view top-to-bottom
    pub fn flip_vertical(&mut self) {
        for view in &mut self.views {
            view.invert_axis(Axis(0));
        }
    }

    /// Discard the outer pixel ring of every stored view
    ///
    /// Applied once, after the final orientation is locked in; afterwards
    /// the tile contributes only interior pixels to the composite.
    pub fn strip_border(&mut self) {
        for view in &mut self.views {
            let n = view.nrows();
            if n >= 3 {
                *view = view.slice(s![1..n - 1, 1..n - 1]).to_owned();
            }
        }
    }

    /// Resolved neighbor arena indices keyed by direction
    pub const fn neighbors(&self) -> &[Option<usize>; 4] {
        &self.neighbors
    }

    /// Number of resolved neighbors
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    /// Record the neighbor at a direction
    ///
    /// # Errors
    ///
    /// Returns a structural error when the direction index is out of range
    /// or a different neighbor was already recorded at that direction.
    pub fn set_neighbor(&mut self, direction: usize, index: usize) -> Result<()> {
        let id = self.id;
        let slot = self.neighbors.get_mut(direction).ok_or_else(|| {
            structure_error(&format!("direction index {direction} out of range"))
        })?;

        match *slot {
            Some(existing) if existing != index => Err(structure_error(&format!(
                "tile {id} already has a different neighbor at direction {direction}"
            ))),
            _ => {
                *slot = Some(index);
                Ok(())
            }
        }
    }
}

/// Rotate pixel data a quarter turn clockwise
pub fn rotate_view(view: &Pixels) -> Pixels {
    let (rows, cols) = view.dim();
    Array2::from_shape_fn((cols, rows), |(row, col)| view[(rows - 1 - col, row)])
}

/// Arena of tiles addressed by index
///
/// The arena index is the identity used by the adjacency graph and by tile
/// neighbor maps, keeping the tile graph free of object references.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Wrap parsed tiles into an arena
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the arena holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at an arena index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Mutable tile at an arena index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Iterate tiles in arena order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Edge length shared by all tiles (0 when empty)
    pub fn side(&self) -> usize {
        self.tiles.first().map_or(0, Tile::side)
    }

    /// Edge length of the assembled grid
    ///
    /// # Errors
    ///
    /// Returns a structural error when the tile count is not a positive
    /// perfect square.
    pub fn grid_side(&self) -> Result<usize> {
        let count = self.tiles.len();
        let side = count.isqrt();
        if count > 0 && side * side == count {
            Ok(side)
        } else {
            Err(structure_error(&format!(
                "tile count {count} is not a positive perfect square"
            )))
        }
    }

    /// Strip the border ring from every tile
    pub fn strip_borders(&mut self) {
        for tile in &mut self.tiles {
            tile.strip_border();
        }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
