//! # zengray
//!
//! Streaming converter from ASCII PPM (`P3`) to grayscale `P3`.
//!
//! Input is read one byte at a time through a comment-tolerant tokenizer:
//! `#` comments and any whitespace may appear between any two tokens,
//! including inline after a header field (`2000 # width`). Each pixel is
//! replaced by the truncated average `(r + g + b) / 3` in all three
//! channels. Output rows are formatted from a precomputed decimal lookup
//! table and written one row at a time, so memory use is bounded by a
//! single row regardless of image height.
//!
//! ## Supported input
//!
//! - `P3` magic, width, height and max value as decimal tokens
//! - max value `255` only
//! - width and height in `1..=Limits::max_dimension` (default 100 000), with
//!   `width * height` no greater than `max_dimension² / 10`
//!
//! ## Non-Goals
//!
//! - Binary PNM variants (P5, P6, P7)
//! - Channel depths other than 8 bits
//! - Perceptual luminance weighting
//!
//! ## Usage
//!
//! ```
//! use zengray::{convert_bytes, Unstoppable};
//!
//! let input = b"P3\n# comment\n2 1\n255\n10 20 30 40 50 60\n";
//! let gray = convert_bytes(input, Unstoppable)?;
//! assert_eq!(gray, b"P3\n2 1\n255\n20 20 20 50 50 50\n");
//! # Ok::<(), zengray::PpmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod convert;
mod decode;
mod error;
mod header;
mod limits;
mod lut;
mod pixel;
mod row;
mod sink;
mod source;
pub mod tokenizer;
mod writer;

#[cfg(feature = "std")]
pub mod io;

// Re-exports
pub use convert::{ConvertRequest, convert_bytes};
pub use decode::{DecodeOutput, decode, decode_from};
pub use enough::{Stop, Unstoppable};
pub use error::PpmError;
pub use header::{ImageHeader, SUPPORTED_MAX_VALUE, parse_header};
pub use limits::{Limits, MAX_DIMENSION};
pub use lut::DecimalLut;
pub use pixel::{PixelTriplet, gray_value, read_pixel};
pub use row::RowAssembler;
pub use sink::ByteSink;
pub use source::{ByteSource, Lookahead};
pub use writer::{write_header, write_row};

#[cfg(feature = "std")]
pub use io::{IoSink, IoSource, convert_file};
