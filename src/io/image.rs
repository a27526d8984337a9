//! PNG export of the assembled composite
//!
//! Renders the composite in the orientation where the pattern was found:
//! unset pixels dark, set pixels light, and pattern-covered pixels
//! highlighted. Each image pixel becomes a square of output pixels so small
//! composites stay legible.

use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::analysis::mask::CoverageMask;
use crate::io::configuration::{MATCH_COLOR, RENDER_SCALE, SET_COLOR, UNSET_COLOR};
use crate::io::error::{Result, SolverError};
use crate::spatial::tile::Pixels;

/// Save the composite as a PNG with pattern coverage highlighted
///
/// # Errors
///
/// Returns an image export error when encoding or writing the file fails.
pub fn export_composite_png(image: &Pixels, covered: &CoverageMask, path: &Path) -> Result<()> {
    let (height, width) = image.dim();

    let output = RgbaImage::from_fn(
        width as u32 * RENDER_SCALE,
        height as u32 * RENDER_SCALE,
        |out_x, out_y| {
            let x = (out_x / RENDER_SCALE) as usize;
            let y = (out_y / RENDER_SCALE) as usize;
            let color = if covered.contains(x, y) {
                MATCH_COLOR
            } else if image.get((y, x)).copied().unwrap_or(0) == 1 {
                SET_COLOR
            } else {
                UNSET_COLOR
            };
            Rgba(color)
        },
    );

    output.save(path).map_err(|source| SolverError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
