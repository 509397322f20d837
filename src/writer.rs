use alloc::format;

use crate::error::PpmError;
use crate::header::ImageHeader;
use crate::sink::ByteSink;

/// Write the `P3` header, copying geometry and depth unchanged.
pub fn write_header<K: ByteSink>(sink: &mut K, header: &ImageHeader) -> Result<(), PpmError> {
    let ImageHeader {
        width,
        height,
        max_value,
    } = *header;
    let text = format!("P3\n{width} {height}\n{max_value}\n");
    sink.write_all(text.as_bytes())
}

/// Write one assembled row verbatim.
#[inline]
pub fn write_row<K: ByteSink>(sink: &mut K, row: &[u8]) -> Result<(), PpmError> {
    sink.write_all(row)
}
