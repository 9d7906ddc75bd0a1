use serde::{Deserialize, Serialize};

use crate::error::CentroidError;
use crate::quadrant::Quadrant;

/// Regions narrower or shorter than this are not subdivided any further.
pub const TERMINAL_SPAN: usize = 3;

/// Axis-aligned search window with exclusive `right`/`bottom` bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Region {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Full extent of a `width x height` mask.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bottom.saturating_sub(self.top)
    }

    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Midpoint with truncating division on each axis.
    #[inline]
    pub fn midpoint(&self) -> (usize, usize) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// True once either side is too small to split meaningfully.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.width() < TERMINAL_SPAN || self.height() < TERMINAL_SPAN
    }

    /// The half of each axis that belongs to `q`, split at the midpoint.
    pub fn quadrant(&self, q: Quadrant) -> Region {
        let (mid_x, mid_y) = self.midpoint();
        let (left, right) = if q.is_left() {
            (self.left, mid_x)
        } else {
            (mid_x, self.right)
        };
        let (top, bottom) = if q.is_top() {
            (self.top, mid_y)
        } else {
            (mid_y, self.bottom)
        };
        Region::new(left, top, right, bottom)
    }

    /// Ordered, non-empty, and inside a `width x height` mask.
    pub fn validate_within(&self, width: usize, height: usize) -> Result<(), CentroidError> {
        let ordered = self.left <= self.right && self.top <= self.bottom;
        let inside = self.right <= width && self.bottom <= height;
        if !ordered || !inside || self.is_empty() {
            return Err(CentroidError::InvalidRegion {
                region: *self,
                width,
                height,
            });
        }
        Ok(())
    }
}
