//! Core types and the quadrant-descent centroid search.
//!
//! This crate knows nothing about images or color spaces. It consumes any
//! [`Mask`] (a 2D grid where positive samples are foreground) and narrows a
//! bounding box toward the quadrant carrying the most foreground mass until
//! the box is too small to split, then reports the box midpoint.
//!
//! ```
//! use quadseek_core::{find_centroid, Centroid, MaskImage};
//!
//! let mask = MaskImage::filled(8, 8, 1).unwrap();
//! assert_eq!(find_centroid(&mask).unwrap(), Centroid { x: 1, y: 1 });
//! ```

mod error;
mod logger;
mod mask;
mod quadrant;
mod region;
mod search;

pub use error::CentroidError;
pub use mask::{Mask, MaskImage, MaskView};
pub use quadrant::{score_quadrants, Quadrant, QuadrantScores};
pub use region::{Region, TERMINAL_SPAN};
pub use search::{
    find_centroid, find_centroid_in, Centroid, CentroidSearch, SearchParams, SearchResult,
    SearchStep,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, level_from_verbosity};
