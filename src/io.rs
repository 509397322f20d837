//! `std::io` adapters and file-to-file conversion.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use enough::Stop;

use crate::convert::ConvertRequest;
use crate::error::PpmError;
use crate::header::ImageHeader;
use crate::limits::Limits;
use crate::sink::ByteSink;
use crate::source::{ByteSource, Lookahead};

/// Buffer size for file reads and writes.
pub const BUFFER_SIZE: usize = 256 * 1024;

/// [`ByteSource`] over any reader, buffered internally.
pub struct IoSource<R: Read> {
    bytes: io::Bytes<BufReader<R>>,
}

impl<R: Read> IoSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::with_capacity(BUFFER_SIZE, reader).bytes(),
        }
    }
}

impl<R: Read> ByteSource for IoSource<R> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, PpmError> {
        self.bytes.next().transpose().map_err(PpmError::from)
    }
}

/// [`ByteSink`] over any writer, buffered internally.
///
/// Call [`IoSink::finish`] to observe flush failures; dropping the sink
/// flushes on a best-effort basis and discards errors.
pub struct IoSink<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(BUFFER_SIZE, writer),
        }
    }

    /// Flush remaining bytes and return the writer.
    pub fn finish(self) -> Result<W, PpmError> {
        self.inner
            .into_inner()
            .map_err(|e| PpmError::Io(e.into_error()))
    }
}

impl<W: Write> ByteSink for IoSink<W> {
    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), PpmError> {
        self.inner.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PpmError> {
        self.inner.flush()?;
        Ok(())
    }
}

/// Convert the P3 file at `input` into a grayscale P3 file at `output`.
///
/// `output` is created only once the input header has validated. If
/// anything fails after that, the partially written file is removed before
/// the error is returned.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    limits: &Limits,
    stop: impl Stop,
) -> Result<ImageHeader, PpmError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let request = ConvertRequest::new().with_limits(limits);

    let mut src = Lookahead::new(IoSource::new(File::open(input)?));
    let header = request.read_header(&mut src)?;

    let file = File::create(output)?;
    if let Err(err) = write_output(&request, &mut src, &header, file, &stop) {
        log::warn!("removing partial output {}: {err}", output.display());
        if let Err(rm) = fs::remove_file(output) {
            log::warn!("could not remove {}: {rm}", output.display());
        }
        return Err(err);
    }
    Ok(header)
}

fn write_output<S: ByteSource>(
    request: &ConvertRequest<'_>,
    src: &mut Lookahead<S>,
    header: &ImageHeader,
    file: File,
    stop: &dyn Stop,
) -> Result<(), PpmError> {
    let mut sink = IoSink::new(file);
    request.write_image(src, header, &mut sink, stop)?;
    // Close-time errors only surface through sync_all.
    sink.finish()?.sync_all()?;
    Ok(())
}
