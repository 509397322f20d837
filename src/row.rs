//! Grayscale row formatting.

use alloc::vec::Vec;

use crate::lut::DecimalLut;
use crate::pixel::{PixelTriplet, gray_value};

/// Worst case per pixel: three 3-digit values and three separators.
const MAX_BYTES_PER_PIXEL: usize = 3 * 3 + 3;

/// Formats one output row at a time into a reusable buffer.
///
/// Each pixel becomes `g g g`, pixels are separated by a single space, and
/// the row ends with `\n`.
#[derive(Debug)]
pub struct RowAssembler<'l> {
    lut: &'l DecimalLut,
    buf: Vec<u8>,
}

impl<'l> RowAssembler<'l> {
    /// Allocate a buffer large enough for `width` pixels of any value.
    pub fn new(lut: &'l DecimalLut, width: u32) -> Self {
        Self {
            lut,
            buf: Vec::with_capacity(Self::capacity_for(width)),
        }
    }

    /// Bytes reserved for a row of `width` pixels.
    pub fn capacity_for(width: u32) -> usize {
        (width as usize)
            .saturating_mul(MAX_BYTES_PER_PIXEL)
            .saturating_add(2)
    }

    /// Append the gray triplet for `px`.
    #[inline]
    pub fn push_pixel(&mut self, px: PixelTriplet) {
        let text = self.lut.get(gray_value(px));
        if !self.buf.is_empty() {
            self.buf.push(b' ');
        }
        self.buf.extend_from_slice(text);
        self.buf.push(b' ');
        self.buf.extend_from_slice(text);
        self.buf.push(b' ');
        self.buf.extend_from_slice(text);
    }

    /// Terminate the row and return its bytes. The next push starts a new row.
    pub fn finish_row(&mut self) -> &[u8] {
        self.buf.push(b'\n');
        &self.buf
    }

    /// Discard the current row contents, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
