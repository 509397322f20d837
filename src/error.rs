use alloc::string::String;
use enough::StopReason;

/// Errors from P3 parsing and grayscale conversion.
///
/// Every error is terminal for the conversion that produced it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PpmError {
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input before magic number")]
    UnexpectedEof,

    #[error("unsupported magic number (expected P3)")]
    UnsupportedFormat,

    #[error("malformed header: missing or non-numeric {field}")]
    MalformedHeader { field: &'static str },

    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(String),

    #[error("image too large: {width}x{height} pixels")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("maximum color value must be 255 (got {0})")]
    UnsupportedMaxValue(u32),

    #[error("failed to read pixel data at row {row}, col {col}")]
    PixelReadError { row: u32, col: u32 },

    #[error("pixel value out of range at row {row}, col {col}")]
    PixelRangeError { row: u32, col: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PpmError {
    fn from(r: StopReason) -> Self {
        PpmError::Cancelled(r)
    }
}
