//! Error types for colorspace operations.

use thiserror::Error;

/// Result type for colorspace operations.
pub type ColorResult<T> = Result<T, ColorError>;

/// Error type for colorspace operations.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Buffer has the wrong number of bands for a color conversion.
    ///
    /// Conversions and saturation operate on color triples, so the buffer
    /// must carry exactly 3 bands.
    #[error("requires a {expected}-band buffer, got {got} bands")]
    WrongBandCount {
        /// Bands required by the operation
        expected: usize,
        /// Bands in the supplied buffer
        got: usize,
    },

    /// Underlying buffer error.
    #[error(transparent)]
    Buffer(#[from] tint_core::Error),
}

impl ColorError {
    /// Creates a [`ColorError::WrongBandCount`] error.
    #[inline]
    pub fn wrong_band_count(expected: usize, got: usize) -> Self {
        Self::WrongBandCount { expected, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_band_count_message() {
        let err = ColorError::wrong_band_count(3, 4);
        let msg = err.to_string();
        assert!(msg.contains("3-band"));
        assert!(msg.contains("4 bands"));
    }
}
