/// Default upper bound on width and height.
pub const MAX_DIMENSION: u32 = 100_000;

/// Resource limits for conversion and decoding.
#[derive(Clone, Debug)]
pub struct Limits {
    /// Maximum width and height, inclusive.
    pub max_dimension: u32,
    /// Maximum pixel count (width * height).
    ///
    /// `None` derives the guard from `max_dimension`: `max_dimension² / 10`.
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for decoded pixel buffers. `None` means no limit.
    pub max_memory_bytes: Option<u64>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dimension: MAX_DIMENSION,
            max_pixels: None,
            max_memory_bytes: None,
        }
    }
}

impl Limits {
    /// Limits with a custom dimension bound and the derived pixel guard.
    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..Self::default()
        }
    }

    /// Effective pixel-count guard.
    pub fn pixel_guard(&self) -> u64 {
        self.max_pixels.unwrap_or_else(|| {
            let d = u64::from(self.max_dimension);
            d * d / 10
        })
    }

    /// Check dimensions against limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::PpmError> {
        if width == 0 || height == 0 || width > self.max_dimension || height > self.max_dimension
        {
            return Err(crate::PpmError::InvalidDimensions(alloc::format!(
                "{width}x{height}, must be 1-{}",
                self.max_dimension
            )));
        }
        if u64::from(width) * u64::from(height) > self.pixel_guard() {
            return Err(crate::PpmError::ImageTooLarge { width, height });
        }
        Ok(())
    }

    /// Check that holding every pixel of `header` in memory, at
    /// `bytes_per_pixel` each, stays within `max_memory_bytes`.
    pub(crate) fn check_decode_memory(
        &self,
        header: &crate::ImageHeader,
        bytes_per_pixel: usize,
    ) -> Result<(), crate::PpmError> {
        let Some(max_mem) = self.max_memory_bytes else {
            return Ok(());
        };
        let needed = header.pixel_count().saturating_mul(bytes_per_pixel as u64);
        if needed > max_mem {
            return Err(crate::PpmError::LimitExceeded(alloc::format!(
                "{}x{} image needs {needed} bytes, memory limit is {max_mem}",
                header.width, header.height
            )));
        }
        Ok(())
    }
}
