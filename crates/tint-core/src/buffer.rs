//! Band-major pixel buffer.
//!
//! [`PixelBuffer`] is the unit of work for every operation in this
//! workspace: one raster tile with axes (band, row, column) and `f32`
//! samples. RGB-domain data is normalized to [0, 1]; intermediate
//! colorspace planes (L, C, H, ...) use their native ranges.
//!
//! # Memory Layout
//!
//! Samples are stored planar, one contiguous plane per band:
//!
//! ```text
//! Memory: [R R R R ...]  <- band 0, row-major
//!         [G G G G ...]  <- band 1
//!         [B B B B ...]  <- band 2
//!         [A A A A ...]  <- band 3 (optional extras pass through ops)
//! ```
//!
//! # Memory Management
//!
//! The sample vector lives in an [`Arc`], so cloning a buffer is cheap and
//! mutation is copy-on-write. Operations take `&PixelBuffer` and return a
//! new buffer; the caller's tile is never mutated.

use crate::{Error, Result, StorageFormat};
use std::sync::Arc;

/// Owned band-major raster tile with `f32` samples.
///
/// # Example
///
/// ```rust
/// use tint_core::PixelBuffer;
///
/// let mut buf = PixelBuffer::new(3, 2, 2);
/// buf.set(0, 0, 0, 0.5);
/// assert_eq!(buf.get(0, 0, 0), 0.5);
/// assert_eq!(buf.band(1), &[0.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Clone)]
pub struct PixelBuffer {
    /// Sample data, one plane per band (Arc for cheap cloning)
    data: Arc<Vec<f32>>,
    bands: usize,
    height: usize,
    width: usize,
}

impl PixelBuffer {
    /// Creates a new zero-filled buffer.
    pub fn new(bands: usize, height: usize, width: usize) -> Self {
        Self {
            data: Arc::new(vec![0.0; bands * height * width]),
            bands,
            height,
            width,
        }
    }

    /// Creates a buffer from existing samples in band-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len()` is not
    /// `bands * height * width`.
    pub fn from_data(bands: usize, height: usize, width: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != bands * height * width {
            return Err(Error::shape_mismatch(bands, height, width, data.len()));
        }
        Ok(Self {
            data: Arc::new(data),
            bands,
            height,
            width,
        })
    }

    /// Creates a buffer by scaling integer storage samples to [0, 1].
    ///
    /// Samples are divided by the storage type's maximum value, per the
    /// input contract of every operation in this workspace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `raw.len()` does not match the
    /// declared shape.
    pub fn from_storage<T: StorageFormat>(
        bands: usize,
        height: usize,
        width: usize,
        raw: &[T],
    ) -> Result<Self> {
        Self::from_data(bands, height, width, crate::to_normalized(raw))
    }

    /// Scales the buffer back to an integer storage type.
    ///
    /// Samples are multiplied by the storage type's maximum value, rounded
    /// and clamped to its range.
    pub fn to_storage<T: StorageFormat>(&self) -> Vec<T> {
        crate::from_normalized(&self.data)
    }

    /// Returns the number of bands.
    #[inline]
    pub fn bands(&self) -> usize {
        self.bands
    }

    /// Returns the tile height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the tile width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of samples in one band plane.
    #[inline]
    pub fn plane_len(&self) -> usize {
        self.height * self.width
    }

    /// Returns the full (band, row, column) shape.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.bands, self.height, self.width)
    }

    /// Returns a reference to the raw samples, band-major.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the samples.
    ///
    /// If the data is shared, this clones it first (copy-on-write).
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns one band plane as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `band >= self.bands()`.
    #[inline]
    pub fn band(&self, band: usize) -> &[f32] {
        debug_assert!(band < self.bands, "band out of range");
        let plane = self.plane_len();
        &self.data[band * plane..(band + 1) * plane]
    }

    /// Returns one band plane as a mutable slice (copy-on-write).
    ///
    /// # Panics
    ///
    /// Panics if `band >= self.bands()`.
    #[inline]
    pub fn band_mut(&mut self, band: usize) -> &mut [f32] {
        debug_assert!(band < self.bands, "band out of range");
        let plane = self.plane_len();
        &mut self.data_mut()[band * plane..(band + 1) * plane]
    }

    /// Returns the sample at (band, row, column).
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn get(&self, band: usize, row: usize, col: usize) -> f32 {
        debug_assert!(band < self.bands && row < self.height && col < self.width);
        self.data[(band * self.height + row) * self.width + col]
    }

    /// Sets the sample at (band, row, column).
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn set(&mut self, band: usize, row: usize, col: usize, value: f32) {
        debug_assert!(band < self.bands && row < self.height && col < self.width);
        let idx = (band * self.height + row) * self.width + col;
        self.data_mut()[idx] = value;
    }

    /// Returns a new buffer holding the first `n` bands of this one.
    ///
    /// Planes are contiguous, so this is a single copy of the data prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BandOutOfRange`] if `n > self.bands()`.
    pub fn first_bands(&self, n: usize) -> Result<Self> {
        if n > self.bands {
            return Err(Error::band_out_of_range(n, self.bands));
        }
        let plane = self.plane_len();
        Self::from_data(n, self.height, self.width, self.data[..n * plane].to_vec())
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("bands", &self.bands)
            .field("height", &self.height)
            .field("width", &self.width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let buf = PixelBuffer::new(3, 4, 5);
        assert_eq!(buf.shape(), (3, 4, 5));
        assert_eq!(buf.plane_len(), 20);
        assert!(buf.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_data() {
        let buf = PixelBuffer::from_data(2, 1, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(buf.band(0), &[0.1, 0.2]);
        assert_eq!(buf.band(1), &[0.3, 0.4]);
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = PixelBuffer::from_data(3, 2, 2, vec![0.0; 11]);
        assert!(matches!(result, Err(Error::ShapeMismatch { expected: 12, got: 11, .. })));
    }

    #[test]
    fn test_get_set() {
        let mut buf = PixelBuffer::new(2, 2, 2);
        buf.set(1, 0, 1, 0.75);
        assert_eq!(buf.get(1, 0, 1), 0.75);
        assert_eq!(buf.get(0, 0, 1), 0.0);
    }

    #[test]
    fn test_band_mut() {
        let mut buf = PixelBuffer::new(2, 1, 3);
        buf.band_mut(1).copy_from_slice(&[0.1, 0.2, 0.3]);
        assert_eq!(buf.band(0), &[0.0, 0.0, 0.0]);
        assert_eq!(buf.band(1), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_clone_cow() {
        let buf1 = PixelBuffer::from_data(1, 1, 2, vec![0.5, 0.5]).unwrap();
        let mut buf2 = buf1.clone();
        buf2.set(0, 0, 0, 0.9);
        assert_eq!(buf1.get(0, 0, 0), 0.5);
        assert_eq!(buf2.get(0, 0, 0), 0.9);
    }

    #[test]
    fn test_first_bands() {
        let buf = PixelBuffer::from_data(4, 1, 2, (0..8).map(|i| i as f32).collect()).unwrap();
        let rgb = buf.first_bands(3).unwrap();
        assert_eq!(rgb.bands(), 3);
        assert_eq!(rgb.band(2), &[4.0, 5.0]);
        assert!(buf.first_bands(5).is_err());
    }

    #[test]
    fn test_storage_roundtrip() {
        let raw: Vec<u8> = (1..=12).map(|v| v * 10).collect();
        let buf = PixelBuffer::from_storage(3, 2, 2, &raw).unwrap();
        assert!(buf.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
        let back: Vec<u8> = buf.to_storage();
        assert_eq!(raw, back);
    }
}
