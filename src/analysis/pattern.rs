//! Fixed relative-offset pixel patterns
//!
//! A pattern is the set of "must be set" offsets read from `#` characters
//! in its row form, plus the bounding box those offsets span. Patterns are
//! built once and never mutated.

use crate::io::error::{Result, structure_error};

/// A fixed set of relative pixel offsets with its bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<[usize; 2]>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Build a pattern from rows where `#` marks a required set pixel
    ///
    /// Any other character is ignored, so rows may pad with spaces or dots.
    ///
    /// # Errors
    ///
    /// Returns a structural error when no row contains a `#`.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let offsets: Vec<[usize; 2]> = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == '#')
                    .map(move |(x, _)| [x, y])
            })
            .collect();

        if offsets.is_empty() {
            return Err(structure_error(&"pattern contains no set pixels"));
        }

        let width = offsets.iter().map(|offset| offset[0]).max().unwrap_or(0) + 1;
        let height = offsets.iter().map(|offset| offset[1]).max().unwrap_or(0) + 1;

        Ok(Self {
            offsets,
            width,
            height,
        })
    }

    /// Required set-pixel offsets as (dx, dy)
    pub fn offsets(&self) -> &[[usize; 2]] {
        &self.offsets
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of required set pixels
    pub const fn pixel_count(&self) -> usize {
        self.offsets.len()
    }
}
