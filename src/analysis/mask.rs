//! Coverage bitmask over composite pixels
//!
//! Tracks which pixel coordinates pattern matches have claimed. Marking is
//! idempotent, so overlapping matches never double-count.

use bitvec::prelude::{BitVec, bitvec};

/// Fixed-size bitmask over an image's pixel coordinates
#[derive(Debug, Clone)]
pub struct CoverageMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl CoverageMask {
    /// Create an empty mask for an image of the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Mark a pixel coordinate as covered
    ///
    /// Out-of-range coordinates are ignored.
    pub fn mark(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            self.bits.set(y * self.width + x, true);
        }
    }

    /// Test whether a pixel coordinate is covered
    pub fn contains(&self, x: usize, y: usize) -> bool {
        if x < self.width && y < self.height {
            self.bits.get(y * self.width + x).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Count covered pixels
    pub fn marked(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no pixel is covered
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}
