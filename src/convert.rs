//! End-to-end P3 to grayscale conversion.
//!
//! The header is parsed and validated in full before anything is written.
//! Rows are then decoded, formatted and written one at a time. The first
//! error aborts the conversion; bytes already handed to the sink are not
//! retracted, so callers writing to durable storage must discard the output
//! on error (see `convert_file` with the `std` feature).

use alloc::vec::Vec;

use enough::Stop;

use crate::error::PpmError;
use crate::header::{ImageHeader, parse_header};
use crate::limits::Limits;
use crate::lut::DecimalLut;
use crate::pixel::read_pixel;
use crate::row::RowAssembler;
use crate::sink::ByteSink;
use crate::source::{ByteSource, Lookahead};
use crate::writer::{write_header, write_row};

/// Builder for a grayscale conversion.
#[derive(Clone, Debug, Default)]
pub struct ConvertRequest<'a> {
    limits: Option<&'a Limits>,
    lut: Option<&'a DecimalLut>,
}

impl<'a> ConvertRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply resource limits. Defaults to [`Limits::default`].
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Share a prebuilt lookup table instead of building one per conversion.
    pub fn with_lut(mut self, lut: &'a DecimalLut) -> Self {
        self.lut = Some(lut);
        self
    }

    /// Parse the header from `src` under this request's limits.
    pub fn read_header<S: ByteSource>(
        &self,
        src: &mut Lookahead<S>,
    ) -> Result<ImageHeader, PpmError> {
        match self.limits {
            Some(limits) => parse_header(src, limits),
            None => parse_header(src, &Limits::default()),
        }
    }

    /// Convert everything `source` yields, writing to `sink`.
    ///
    /// Returns the parsed header on success.
    pub fn convert<S: ByteSource, K: ByteSink>(
        &self,
        source: S,
        sink: &mut K,
        stop: impl Stop,
    ) -> Result<ImageHeader, PpmError> {
        let mut src = Lookahead::new(source);
        let header = self.read_header(&mut src)?;
        self.write_image(&mut src, &header, sink, &stop)?;
        Ok(header)
    }

    /// Write the output header and all rows for an already parsed `header`,
    /// then flush the sink.
    pub fn write_image<S: ByteSource, K: ByteSink>(
        &self,
        src: &mut Lookahead<S>,
        header: &ImageHeader,
        sink: &mut K,
        stop: &dyn Stop,
    ) -> Result<(), PpmError> {
        stop.check()?;
        write_header(sink, header)?;
        match self.lut {
            Some(lut) => convert_rows(src, header, lut, sink, stop)?,
            None => convert_rows(src, header, &DecimalLut::new(), sink, stop)?,
        }
        sink.flush()?;
        log::debug!(
            "converted {}x{} image to grayscale",
            header.width,
            header.height
        );
        Ok(())
    }
}

fn convert_rows<S: ByteSource, K: ByteSink>(
    src: &mut Lookahead<S>,
    header: &ImageHeader,
    lut: &DecimalLut,
    sink: &mut K,
    stop: &dyn Stop,
) -> Result<(), PpmError> {
    let mut row = RowAssembler::new(lut, header.width);
    for y in 0..header.height {
        if y % 16 == 0 {
            stop.check()?;
            log::trace!("row {y} of {}", header.height);
        }
        row.clear();
        for x in 0..header.width {
            row.push_pixel(read_pixel(src, y, x)?);
        }
        write_row(sink, row.finish_row())?;
    }
    Ok(())
}

/// Convert an in-memory P3 image, returning the grayscale P3 bytes.
pub fn convert_bytes(data: &[u8], stop: impl Stop) -> Result<Vec<u8>, PpmError> {
    let mut out = Vec::new();
    ConvertRequest::new().convert(data, &mut out, stop)?;
    Ok(out)
}
