//! Error types for tint-core operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur constructing or accessing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Data length does not match the declared (band, row, column) shape.
    #[error("shape mismatch: {bands}x{height}x{width} needs {expected} samples, got {got}")]
    ShapeMismatch {
        /// Declared band count
        bands: usize,
        /// Declared height
        height: usize,
        /// Declared width
        width: usize,
        /// Samples required by the shape
        expected: usize,
        /// Samples actually supplied
        got: usize,
    },

    /// A band index is outside the buffer's band range.
    #[error("band {band} out of range for {bands}-band buffer")]
    BandOutOfRange {
        /// Requested band index (0-based)
        band: usize,
        /// Bands in the buffer
        bands: usize,
    },
}

impl Error {
    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(bands: usize, height: usize, width: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            bands,
            height,
            width,
            expected: bands * height * width,
            got,
        }
    }

    /// Creates an [`Error::BandOutOfRange`] error.
    #[inline]
    pub fn band_out_of_range(band: usize, bands: usize) -> Self {
        Self::BandOutOfRange { band, bands }
    }
}
