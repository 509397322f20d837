#![cfg(feature = "std")]

use std::fs;
use std::io::{self, Write};

use enough::Unstoppable;
use zengray::*;

#[test]
fn converts_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("im.ppm");
    let output = dir.path().join("im-gray.ppm");
    fs::write(&input, b"P3\n# comment\n2 1\n255\n10 20 30 40 50 60\n").unwrap();

    let header = convert_file(&input, &output, &Limits::default(), Unstoppable).unwrap();
    assert_eq!((header.width, header.height), (2, 1));
    assert_eq!(
        fs::read(&output).unwrap(),
        b"P3\n2 1\n255\n20 20 20 50 50 50\n"
    );
}

#[test]
fn pixel_failure_removes_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.ppm");
    let output = dir.path().join("out.ppm");
    fs::write(&input, b"P3\n2 2\n255\n1 2 3 4 5 6\n7 8").unwrap();

    let err = convert_file(&input, &output, &Limits::default(), Unstoppable).unwrap_err();
    assert!(matches!(err, PpmError::PixelReadError { row: 1, col: 0 }));
    assert!(!output.exists());
}

#[test]
fn header_failure_does_not_touch_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.ppm");
    let output = dir.path().join("keep.ppm");
    fs::write(&input, b"P6\n1 1\n255\n\x00\x00\x00").unwrap();
    fs::write(&output, b"previous").unwrap();

    let err = convert_file(&input, &output, &Limits::default(), Unstoppable).unwrap_err();
    assert!(matches!(err, PpmError::UnsupportedFormat));
    assert_eq!(fs::read(&output).unwrap(), b"previous");
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(
        dir.path().join("absent.ppm"),
        dir.path().join("out.ppm"),
        &Limits::default(),
        Unstoppable,
    )
    .unwrap_err();
    assert!(matches!(err, PpmError::Io(_)));
    assert!(!dir.path().join("out.ppm").exists());
}

#[test]
fn reader_and_writer_adapters() {
    let input: &[u8] = b"P3 2 1 255 0 3 6 9 9 9";
    let mut sink = IoSink::new(Vec::new());
    ConvertRequest::new()
        .convert(IoSource::new(input), &mut sink, Unstoppable)
        .unwrap();
    assert_eq!(sink.finish().unwrap(), b"P3\n2 1\n255\n3 3 3 9 9 9\n");
}

/// Writer that accepts `budget` bytes and then fails.
struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.len() > self.budget {
            return Err(io::Error::other("disk full"));
        }
        self.budget -= buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_is_reported() {
    let mut sink = IoSink::new(FailingWriter { budget: 4 });
    let err = ConvertRequest::new()
        .convert(&b"P3 1 1 255 1 1 1"[..], &mut sink, Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PpmError::Io(_)));
}

#[test]
fn finish_reports_deferred_write_failure() {
    let mut sink = IoSink::new(FailingWriter { budget: 0 });
    // Fits in the buffer, so the failure only shows up when finishing.
    sink.write_all(b"P3\n1 1\n255\n").unwrap();
    assert!(matches!(sink.finish(), Err(PpmError::Io(_))));
}

/// Reader that yields its bytes and then errors.
struct FailingReader<'a> {
    data: &'a [u8],
}

impl io::Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("device gone"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn source_failure_is_reported() {
    let source = IoSource::new(FailingReader {
        data: b"P3 1 1 255 1 ",
    });
    let mut out = Vec::new();
    let err = ConvertRequest::new()
        .convert(source, &mut out, Unstoppable)
        .unwrap_err();
    assert!(matches!(err, PpmError::Io(_)));
}
