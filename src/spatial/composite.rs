//! Composite image stitching and whole-image transforms

use ndarray::{Array2, Axis, s};

use crate::algorithm::placement::TileGrid;
use crate::io::error::{Result, structure_error};
use crate::spatial::tile::{Pixels, TileSet};

/// Stitch border-stripped tiles into one composite image
///
/// Every grid cell contributes its tile's interior pixels; the composite
/// side is the grid side times the interior side. Tiles must already be
/// stripped and in their final orientation.
///
/// # Errors
///
/// Returns a structural error when a grid cell references a missing tile or
/// a tile's interior does not match the shared interior side.
pub fn stitch(tiles: &TileSet, grid: &TileGrid) -> Result<Pixels> {
    let interior = tiles.side();
    let composite_side = grid.side() * interior;
    let mut image = Array2::zeros((composite_side, composite_side));

    for (grid_y, row) in grid.rows().iter().enumerate() {
        for (grid_x, &index) in row.iter().enumerate() {
            let tile = tiles.get(index).ok_or_else(|| {
                structure_error(&format!("grid references missing tile index {index}"))
            })?;
            if tile.side() != interior {
                return Err(structure_error(&format!(
                    "tile {} interior is {} pixels wide, expected {interior}",
                    tile.id(),
                    tile.side()
                )));
            }

            let top = grid_y * interior;
            let left = grid_x * interior;
            image
                .slice_mut(s![top..top + interior, left..left + interior])
                .assign(tile.pixels());
        }
    }

    Ok(image)
}

/// Rotate an image a quarter turn clockwise
pub fn rotate_clockwise(image: &Pixels) -> Pixels {
    let (rows, cols) = image.dim();
    Array2::from_shape_fn((cols, rows), |(row, col)| image[(rows - 1 - col, row)])
}

/// Mirror an image top-to-bottom
pub fn flip_vertical(image: &Pixels) -> Pixels {
    let mut flipped = image.clone();
    flipped.invert_axis(Axis(0));
    flipped
}

/// Count set pixels in an image
pub fn count_set_pixels(image: &Pixels) -> usize {
    image.iter().filter(|&&pixel| pixel == 1).count()
}
