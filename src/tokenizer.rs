//! Unsigned decimal tokenizer shared by header and pixel parsing.
//!
//! Tokens are runs of ASCII digits. Between tokens any mix of whitespace and
//! `#` comments (running to end of line) is skipped. A comment is only
//! recognized in the skip phase: a `#` directly after a digit ends the token
//! and is left in the stream for the next read.

use crate::error::PpmError;
use crate::source::{ByteSource, Lookahead};

/// Outcome of reading one token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// A decimal value within the requested bound.
    Value(u32),
    /// Digits were present but the value exceeds the bound.
    OutOfRange,
    /// End of input, or the next significant byte is not a digit.
    Missing,
}

impl Token {
    /// The parsed value, if any.
    pub fn value(self) -> Option<u32> {
        match self {
            Token::Value(v) => Some(v),
            Token::OutOfRange | Token::Missing => None,
        }
    }
}

/// Whitespace as understood by C `isspace` in the "C" locale.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Skip whitespace and comments, returning (consumed) the first significant
/// byte, or `None` at end of input.
pub(crate) fn skip_separators<S: ByteSource>(
    src: &mut Lookahead<S>,
) -> Result<Option<u8>, PpmError> {
    loop {
        match src.next_byte()? {
            None => return Ok(None),
            Some(b'#') => loop {
                match src.next_byte()? {
                    None => return Ok(None),
                    Some(b'\n') => break,
                    Some(_) => {}
                }
            },
            Some(b) if is_space(b) => {}
            Some(b) => return Ok(Some(b)),
        }
    }
}

/// Read the next unsigned integer, classifying failures.
///
/// The non-digit byte that ends a token is pushed back, as is a leading
/// non-digit byte when no token is present.
pub fn read_token<S: ByteSource>(
    src: &mut Lookahead<S>,
    max_allowed: u32,
) -> Result<Token, PpmError> {
    let Some(first) = skip_separators(src)? else {
        return Ok(Token::Missing);
    };
    if !first.is_ascii_digit() {
        src.push_back(first);
        return Ok(Token::Missing);
    }

    let limit = u64::from(max_allowed);
    let mut val = u64::from(first - b'0');
    loop {
        match src.next_byte()? {
            Some(b) if b.is_ascii_digit() => {
                // Past this point the value can only grow beyond `limit`;
                // pin it to a sentinel instead of multiplying further.
                if val > limit / 10 + 1 {
                    val = limit + 1;
                } else {
                    val = val * 10 + u64::from(b - b'0');
                }
            }
            Some(b) => {
                src.push_back(b);
                break;
            }
            None => break,
        }
    }

    if val > limit {
        Ok(Token::OutOfRange)
    } else {
        Ok(Token::Value(val as u32))
    }
}

/// Read the next unsigned integer no greater than `max_allowed`.
///
/// `Ok(None)` covers end of input, a non-digit token and an out-of-range
/// value alike. Errors come only from the source itself.
pub fn read_uint<S: ByteSource>(
    src: &mut Lookahead<S>,
    max_allowed: u32,
) -> Result<Option<u32>, PpmError> {
    read_token(src, max_allowed).map(Token::value)
}
