use serde::{Deserialize, Serialize};

use crate::SegmentError;

/// Inclusive per-channel HSV window.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorBounds {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl Default for ColorBounds {
    /// Saturated red when fed through [`ChannelOrder::Bgr`](crate::ChannelOrder::Bgr).
    fn default() -> Self {
        Self {
            lower: [100, 200, 95],
            upper: [150, 255, 255],
        }
    }
}

impl ColorBounds {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }

    pub fn validate(&self) -> Result<(), SegmentError> {
        if let Some(channel) = (0..3).find(|&c| self.lower[c] > self.upper[c]) {
            return Err(SegmentError::InvalidBounds {
                channel,
                lower: self.lower[channel],
                upper: self.upper[channel],
            });
        }
        Ok(())
    }
}
