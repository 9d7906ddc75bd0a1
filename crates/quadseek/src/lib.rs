//! High-level facade crate for the `quadseek-*` workspace.
//!
//! This crate provides:
//! - re-exports of the mask/search core and the color segmenter
//! - (feature-gated) end-to-end helpers that threshold an `image::RgbImage`
//!   and locate the colored object in it
//! - the `quadseek` command-line tool (feature `cli`)
//!
//! ## Quickstart
//!
//! ```no_run
//! use quadseek::detect;
//! use quadseek::DetectConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = detect::detect_object_path("frame.png", &DetectConfig::default())?;
//! println!("{}", report.xy());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `quadseek::core`: masks, regions, quadrant scoring, centroid search.
//! - `quadseek::segment`: RGB→HSV thresholding and JSON configuration.
//! - `quadseek::detect` (feature `image`): end-to-end helpers from `image` types.
//! - `quadseek::annotate` (feature `image`): marker overlay at the centroid.

pub use quadseek_core as core;
pub use quadseek_segment as segment;

pub use quadseek_core::{
    find_centroid, Centroid, CentroidError, CentroidSearch, Mask, MaskImage, MaskView, Region,
    SearchParams, SearchResult,
};
pub use quadseek_segment::{ChannelOrder, ColorBounds, DetectConfig, SegmentParams};

mod report;
pub use report::DetectionReport;

#[cfg(feature = "image")]
pub mod annotate;
#[cfg(feature = "image")]
pub mod detect;

/// Install a `tracing` subscriber and forward `log` records into it.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    quadseek_core::init_tracing(json);
    // no-op if the subscriber already installed it
    let _ = tracing_log::LogTracer::init();
}
