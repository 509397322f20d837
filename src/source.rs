//! Byte sources and the one-byte lookahead the tokenizer reads through.

use crate::error::PpmError;

/// A sequential stream of bytes.
///
/// `Ok(None)` signals end of input. Errors are reserved for failures of the
/// underlying medium; a source must keep returning `Ok(None)` once exhausted.
pub trait ByteSource {
    fn next_byte(&mut self) -> Result<Option<u8>, PpmError>;
}

impl ByteSource for &[u8] {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, PpmError> {
        match self.split_first() {
            Some((&b, rest)) => {
                *self = rest;
                Ok(Some(b))
            }
            None => Ok(None),
        }
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, PpmError> {
        (**self).next_byte()
    }
}

/// Wraps a [`ByteSource`] with a single byte of pushback.
///
/// The wrapped source is never rewound; a rejected byte is parked here until
/// the next read.
#[derive(Debug)]
pub struct Lookahead<S> {
    inner: S,
    pending: Option<u8>,
}

impl<S: ByteSource> Lookahead<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    /// Next byte, consuming it.
    #[inline]
    pub fn next_byte(&mut self) -> Result<Option<u8>, PpmError> {
        match self.pending.take() {
            Some(b) => Ok(Some(b)),
            None => self.inner.next_byte(),
        }
    }

    /// Next byte, leaving it in the stream.
    pub fn peek(&mut self) -> Result<Option<u8>, PpmError> {
        if self.pending.is_none() {
            self.pending = self.inner.next_byte()?;
        }
        Ok(self.pending)
    }

    /// Return a byte to the front of the stream.
    ///
    /// Only one byte may be pending at a time.
    #[inline]
    pub fn push_back(&mut self, byte: u8) {
        debug_assert!(self.pending.is_none(), "lookahead already holds a byte");
        self.pending = Some(byte);
    }

    /// Unwrap the underlying source, dropping any pending byte.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for Lookahead<S> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, PpmError> {
        Lookahead::next_byte(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_back_is_returned_first() {
        let mut src = Lookahead::new(&b"ab"[..]);
        assert_eq!(src.next_byte().unwrap(), Some(b'a'));
        src.push_back(b'a');
        assert_eq!(src.peek().unwrap(), Some(b'a'));
        assert_eq!(src.next_byte().unwrap(), Some(b'a'));
        assert_eq!(src.next_byte().unwrap(), Some(b'b'));
        assert_eq!(src.next_byte().unwrap(), None);
        assert_eq!(src.peek().unwrap(), None);
    }
}
