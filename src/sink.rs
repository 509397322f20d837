use alloc::vec::Vec;

use crate::error::PpmError;

/// Destination for formatted output bytes.
pub trait ByteSink {
    /// Write the entire buffer.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), PpmError>;

    /// Push buffered bytes to the underlying medium.
    fn flush(&mut self) -> Result<(), PpmError> {
        Ok(())
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), PpmError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<K: ByteSink + ?Sized> ByteSink for &mut K {
    #[inline]
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), PpmError> {
        (**self).write_all(bytes)
    }

    fn flush(&mut self) -> Result<(), PpmError> {
        (**self).flush()
    }
}
