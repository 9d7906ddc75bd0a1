//! Color thresholding into a binary mask.

use log::debug;
use quadseek_core::MaskImage;
use serde::{Deserialize, Serialize};

use crate::bounds::ColorBounds;
use crate::hsv::rgb_to_hsv;
use crate::SegmentError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Sample value written for pixels inside the color window.
pub const FOREGROUND: u8 = 255;

/// Borrowed interleaved 3-channel image.
#[derive(Clone, Copy, Debug)]
pub struct RgbView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h*3
}

impl<'a> RgbView<'a> {
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, SegmentError> {
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(3));
        if width == 0 || height == 0 || expected != Some(data.len()) {
            return Err(SegmentError::InvalidBuffer {
                width,
                height,
                expected: expected.unwrap_or(0),
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * self.width + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Order in which the three input channels are fed to the HSV conversion.
///
/// `Bgr` swaps the first and third channel before conversion, which rotates
/// hue by 120 degrees: saturated red ends up near hue 120.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    Rgb,
    #[default]
    Bgr,
}

impl ChannelOrder {
    #[inline]
    fn to_hsv(self, px: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => rgb_to_hsv(px[0], px[1], px[2]),
            ChannelOrder::Bgr => rgb_to_hsv(px[2], px[1], px[0]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    pub bounds: ColorBounds,
    pub channel_order: ChannelOrder,
}

/// Mark every pixel whose HSV value falls inside `params.bounds`.
///
/// Foreground samples are [`FOREGROUND`], everything else is 0.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width, height = img.height))
)]
pub fn threshold_hsv(img: &RgbView<'_>, params: &SegmentParams) -> Result<MaskImage, SegmentError> {
    params.bounds.validate()?;

    let mut data = Vec::with_capacity(img.width * img.height);
    for px in img.data.chunks_exact(3) {
        let hsv = params.channel_order.to_hsv([px[0], px[1], px[2]]);
        data.push(if params.bounds.contains(hsv) {
            FOREGROUND
        } else {
            0
        });
    }

    let mask = MaskImage::new(img.width, img.height, data)?;
    debug!(
        "thresholded {}x{}: {} foreground pixels",
        img.width,
        img.height,
        mask.foreground_count()
    );
    Ok(mask)
}
