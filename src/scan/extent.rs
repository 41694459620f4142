//! Vertical extent of the matched part of a region

use super::pos::BlockPos;

/// Lowest and highest matched cells seen so far, by y.
///
/// Starts collapsed on the scan origin. `lowest.y <= highest.y` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalExtent {
    pub lowest: BlockPos,
    pub highest: BlockPos,
}

impl VerticalExtent {
    pub fn new(origin: BlockPos) -> Self {
        Self {
            lowest: origin,
            highest: origin,
        }
    }

    /// Record a matched cell.
    ///
    /// Only one bound moves per cell: `highest` is tested only when the cell
    /// is not a new low.
    pub fn record(&mut self, pos: BlockPos) {
        if pos.y < self.lowest.y {
            self.lowest = pos;
        } else if pos.y > self.highest.y {
            self.highest = pos;
        }
    }

    /// Widen to cover `other`. On equal heights the current bound is kept.
    pub fn absorb(&mut self, other: &VerticalExtent) {
        if other.highest.y > self.highest.y {
            self.highest = other.highest;
        }
        if other.lowest.y < self.lowest.y {
            self.lowest = other.lowest;
        }
    }

    /// Number of cell layers spanned, inclusive
    pub fn height(&self) -> u64 {
        u64::from(self.highest.y.abs_diff(self.lowest.y)) + 1
    }

    pub fn contains_y(&self, y: i32) -> bool {
        self.lowest.y <= y && y <= self.highest.y
    }
}
