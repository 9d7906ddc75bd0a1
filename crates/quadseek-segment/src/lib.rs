//! Color segmentation for the quadrant-descent search.
//!
//! This crate is the mask producer: it converts interleaved RGB frames into
//! HSV, keeps pixels inside a per-channel window, and hands the resulting
//! [`MaskImage`](quadseek_core::MaskImage) to `quadseek-core`.
//!
//! It does **not** decode image files; see the `quadseek` facade crate for
//! the `image`-based helpers.

mod bounds;
mod error;
mod hsv;
mod io;
mod threshold;

pub use bounds::ColorBounds;
pub use error::SegmentError;
pub use hsv::rgb_to_hsv;
pub use io::{DetectConfig, SegmentIoError};
pub use threshold::{threshold_hsv, ChannelOrder, RgbView, SegmentParams, FOREGROUND};
