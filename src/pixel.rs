use crate::error::PpmError;
use crate::source::{ByteSource, Lookahead};
use crate::tokenizer::{Token, read_token};

/// One decoded RGB channel triplet, 8 bits per channel.
pub type PixelTriplet = rgb::RGB8;

const CHANNEL_MAX: u32 = 255;

/// Read the R, G, B tokens for the pixel at (`row`, `col`).
///
/// Coordinates are 0-based and only used for error reporting.
pub fn read_pixel<S: ByteSource>(
    src: &mut Lookahead<S>,
    row: u32,
    col: u32,
) -> Result<PixelTriplet, PpmError> {
    let r = read_channel(src, row, col)?;
    let g = read_channel(src, row, col)?;
    let b = read_channel(src, row, col)?;
    Ok(PixelTriplet::new(r, g, b))
}

#[inline]
fn read_channel<S: ByteSource>(
    src: &mut Lookahead<S>,
    row: u32,
    col: u32,
) -> Result<u8, PpmError> {
    match read_token(src, CHANNEL_MAX)? {
        Token::Value(v) => u8::try_from(v).map_err(|_| PpmError::PixelRangeError { row, col }),
        Token::OutOfRange | Token::Missing => Err(PpmError::PixelReadError { row, col }),
    }
}

/// Simple-average intensity, truncating: `(r + g + b) / 3`.
#[inline]
pub fn gray_value(px: PixelTriplet) -> u8 {
    ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8
}
