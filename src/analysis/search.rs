//! Eight-orientation pattern search and residual counting
//!
//! The composite is examined under 4 clockwise rotations, each with and
//! without a vertical flip. The first orientation containing at least one
//! match wins; valid inputs have exactly one such orientation. The residual
//! count subtracts pattern-covered pixels through a coverage mask, so
//! pixels shared by overlapping matches are only subtracted once.

use crate::analysis::mask::CoverageMask;
use crate::analysis::pattern::Pattern;
use crate::io::configuration::ORIENTATION_COUNT;
use crate::io::error::{Result, SolverError};
use crate::spatial::composite::{count_set_pixels, flip_vertical, rotate_clockwise};
use crate::spatial::tile::Pixels;

/// Outcome of a successful pattern search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The image in the orientation where matches were found
    pub image: Pixels,
    /// Orientation index: rotation count times two, plus one if flipped
    pub orientation: usize,
    /// Top-left anchors of every match, as (x, y)
    pub matches: Vec<[usize; 2]>,
    /// Set pixels not covered by any match
    pub roughness: usize,
}

/// Find all anchors where the pattern fits entirely on set pixels
///
/// Anchors run over every position where the pattern's bounding box fits
/// inside the image, inclusive of the last row and column.
pub fn scan(image: &Pixels, pattern: &Pattern) -> Vec<[usize; 2]> {
    let (height, width) = image.dim();
    if pattern.height() > height || pattern.width() > width {
        return Vec::new();
    }

    let mut anchors = Vec::new();
    for y in 0..=height - pattern.height() {
        for x in 0..=width - pattern.width() {
            let hit = pattern
                .offsets()
                .iter()
                .all(|offset| image[(y + offset[1], x + offset[0])] == 1);
            if hit {
                anchors.push([x, y]);
            }
        }
    }
    anchors
}

/// Search all eight orientations for the pattern
///
/// Rotations are the outer loop; each rotation is tried unflipped first,
/// then vertically flipped. The search stops at the first orientation with
/// at least one match.
///
/// # Errors
///
/// Returns [`SolverError::PatternNotFound`] when no orientation matches.
pub fn search_oriented(image: &Pixels, pattern: &Pattern) -> Result<SearchOutcome> {
    let mut rotated = image.clone();

    for rotation in 0..4 {
        for flip in [false, true] {
            let view = if flip {
                flip_vertical(&rotated)
            } else {
                rotated.clone()
            };

            let matches = scan(&view, pattern);
            if !matches.is_empty() {
                let roughness = residual_count(&view, pattern, &matches);
                return Ok(SearchOutcome {
                    image: view,
                    orientation: rotation * 2 + usize::from(flip),
                    matches,
                    roughness,
                });
            }
        }
        if rotation < 3 {
            rotated = rotate_clockwise(&rotated);
        }
    }

    Err(SolverError::PatternNotFound {
        orientations: ORIENTATION_COUNT,
    })
}

/// Coverage mask over all pixels claimed by the given matches
pub fn coverage(image: &Pixels, pattern: &Pattern, matches: &[[usize; 2]]) -> CoverageMask {
    let (height, width) = image.dim();
    let mut mask = CoverageMask::new(width, height);
    for anchor in matches {
        for offset in pattern.offsets() {
            mask.mark(anchor[0] + offset[0], anchor[1] + offset[1]);
        }
    }
    mask
}

/// Set pixels not covered by any match
fn residual_count(image: &Pixels, pattern: &Pattern, matches: &[[usize; 2]]) -> usize {
    let covered = coverage(image, pattern, matches).marked();
    count_set_pixels(image).saturating_sub(covered)
}
