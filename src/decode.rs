use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::header::{ImageHeader, parse_header};
use crate::limits::Limits;
use crate::pixel::{PixelTriplet, gray_value, read_pixel};
use crate::source::{ByteSource, Lookahead};

/// Decoded P3 image: header plus pixels in row-major order.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pub header: ImageHeader,
    pixels: Vec<PixelTriplet>,
}

impl DecodeOutput {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[PixelTriplet] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<PixelTriplet> {
        self.pixels
    }

    /// Averaged intensity per pixel, same truncation as the converter.
    pub fn to_gray(&self) -> Vec<u8> {
        self.pixels.iter().copied().map(gray_value).collect()
    }

    /// Borrowed 2D view of the pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, PixelTriplet> {
        imgref::ImgRef::new(
            &self.pixels[..],
            self.header.width as usize,
            self.header.height as usize,
        )
    }

    /// Convert into an owned 2D buffer.
    #[cfg(feature = "imgref")]
    pub fn into_imgvec(self) -> imgref::ImgVec<PixelTriplet> {
        let (w, h) = (self.header.width as usize, self.header.height as usize);
        imgref::ImgVec::new(self.pixels, w, h)
    }
}

/// Decode every pixel of an in-memory P3 image with default limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, PpmError> {
    decode_from(data, &Limits::default(), &stop)
}

/// Decode every pixel `source` yields.
///
/// Unlike conversion, this holds the whole image in memory, so
/// [`Limits::max_memory_bytes`] is checked against the header first. The
/// buffer grows one row at a time as pixels arrive; a header alone never
/// triggers a full-image allocation.
pub fn decode_from<S: ByteSource>(
    source: S,
    limits: &Limits,
    stop: &dyn Stop,
) -> Result<DecodeOutput, PpmError> {
    let mut src = Lookahead::new(source);
    let header = parse_header(&mut src, limits)?;
    limits.check_decode_memory(&header, core::mem::size_of::<PixelTriplet>())?;
    stop.check()?;

    let w = header.width as usize;
    let mut pixels = Vec::new();
    for y in 0..header.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        pixels.reserve(w);
        for x in 0..header.width {
            pixels.push(read_pixel(&mut src, y, x)?);
        }
    }
    Ok(DecodeOutput { header, pixels })
}
