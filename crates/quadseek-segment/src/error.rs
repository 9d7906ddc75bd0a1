use quadseek_core::CentroidError;

/// Errors produced while turning a color frame into a mask.
#[derive(thiserror::Error, Debug)]
pub enum SegmentError {
    #[error("invalid RGB buffer for {width}x{height} (expected {expected} bytes, got {got})")]
    InvalidBuffer {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid color bounds on channel {channel} (lower={lower} > upper={upper})")]
    InvalidBounds { channel: usize, lower: u8, upper: u8 },

    #[error(transparent)]
    Mask(#[from] CentroidError),
}
