//! Quadrant classification and per-quadrant foreground counts.
//!
//! Quadrants are numbered row-major around the region midpoint:
//!
//! ```text
//! 0 1
//! 2 3
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CentroidError;
use crate::mask::Mask;
use crate::region::Region;

#[cfg(feature = "tracing")]
use tracing::instrument;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::BottomLeft)
    }

    #[inline]
    pub fn is_top(self) -> bool {
        matches!(self, Quadrant::TopLeft | Quadrant::TopRight)
    }

    /// Classify `(x, y)` against the midpoint.
    ///
    /// Pixels on the midpoint row or column fall on the top/left side.
    #[inline]
    pub fn classify(x: usize, y: usize, mid_x: usize, mid_y: usize) -> Self {
        let idx = 2 * usize::from(y > mid_y) + usize::from(x > mid_x);
        Self::ALL[idx]
    }
}

/// Foreground counts indexed by [`Quadrant`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuadrantScores([u64; 4]);

impl QuadrantScores {
    pub fn new(counts: [u64; 4]) -> Self {
        Self(counts)
    }

    #[inline]
    pub fn get(&self, q: Quadrant) -> u64 {
        self.0[q.index()]
    }

    pub fn as_array(&self) -> [u64; 4] {
        self.0
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Highest-scoring quadrant; ties go to the lowest index.
    pub fn winner(&self) -> Quadrant {
        let mut best = Quadrant::TopLeft;
        for q in Quadrant::ALL.into_iter().skip(1) {
            if self.get(q) > self.get(best) {
                best = q;
            }
        }
        best
    }

    #[inline]
    fn bump(&mut self, q: Quadrant) {
        self.0[q.index()] += 1;
    }
}

/// Count foreground pixels of `region` per quadrant.
///
/// The region must be non-empty and lie inside the mask.
pub fn score_quadrants<M: Mask + ?Sized>(
    mask: &M,
    region: Region,
) -> Result<QuadrantScores, CentroidError> {
    mask.validate()?;
    region.validate_within(mask.width(), mask.height())?;
    Ok(score_unchecked(mask, region))
}

#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(mask), fields(w = region.width(), h = region.height()))
)]
pub(crate) fn score_unchecked<M: Mask + ?Sized>(mask: &M, region: Region) -> QuadrantScores {
    let (mid_x, mid_y) = region.midpoint();
    let mut scores = QuadrantScores::default();
    for y in region.top..region.bottom {
        for x in region.left..region.right {
            if mask.is_foreground(x, y) {
                scores.bump(Quadrant::classify(x, y, mid_x, mid_y));
            }
        }
    }
    scores
}
