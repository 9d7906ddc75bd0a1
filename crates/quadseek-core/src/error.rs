use crate::region::Region;

/// Precondition violations reported before any pixel is scanned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CentroidError {
    #[error("invalid mask (width={width}, height={height}, buffer length={len})")]
    InvalidMask {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("invalid region {region:?} for a {width}x{height} mask")]
    InvalidRegion {
        region: Region,
        width: usize,
        height: usize,
    },
}
