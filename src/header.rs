//! P3 header parsing.

use alloc::format;

use crate::error::PpmError;
use crate::limits::Limits;
use crate::source::{ByteSource, Lookahead};
use crate::tokenizer::{Token, read_token, skip_separators};

/// The only channel depth accepted.
pub const SUPPORTED_MAX_VALUE: u16 = 255;

/// Largest max-value token the header parser will read before deciding.
const MAX_VALUE_TOKEN_BOUND: u32 = 65535;

/// Validated P3 image header. Immutable once parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub max_value: u16,
}

impl ImageHeader {
    /// Parse only the header from an in-memory buffer, using default limits.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        Self::from_bytes_with_limits(data, &Limits::default())
    }

    /// Parse only the header from an in-memory buffer.
    pub fn from_bytes_with_limits(data: &[u8], limits: &Limits) -> Result<Self, PpmError> {
        parse_header(&mut Lookahead::new(data), limits)
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Parse and validate a P3 header, leaving the source positioned at the
/// first pixel token.
pub fn parse_header<S: ByteSource>(
    src: &mut Lookahead<S>,
    limits: &Limits,
) -> Result<ImageHeader, PpmError> {
    let Some(first) = skip_separators(src)? else {
        return Err(PpmError::UnexpectedEof);
    };
    let second = src.next_byte()?;
    if first != b'P' || second != Some(b'3') {
        return Err(PpmError::UnsupportedFormat);
    }

    let width = read_dimension(src, limits, "width")?;
    let height = read_dimension(src, limits, "height")?;
    let max_value = match read_token(src, MAX_VALUE_TOKEN_BOUND)? {
        Token::Value(v) => v,
        Token::OutOfRange | Token::Missing => {
            return Err(PpmError::MalformedHeader { field: "max value" });
        }
    };

    limits.check(width, height)?;
    if max_value != u32::from(SUPPORTED_MAX_VALUE) {
        return Err(PpmError::UnsupportedMaxValue(max_value));
    }

    log::debug!("parsed P3 header: {width}x{height}, max value {max_value}");
    Ok(ImageHeader {
        width,
        height,
        max_value: SUPPORTED_MAX_VALUE,
    })
}

fn read_dimension<S: ByteSource>(
    src: &mut Lookahead<S>,
    limits: &Limits,
    field: &'static str,
) -> Result<u32, PpmError> {
    match read_token(src, limits.max_dimension)? {
        Token::Value(v) => Ok(v),
        Token::OutOfRange => Err(PpmError::InvalidDimensions(format!(
            "{field} exceeds {}",
            limits.max_dimension
        ))),
        Token::Missing => Err(PpmError::MalformedHeader { field }),
    }
}
