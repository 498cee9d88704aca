//! LCH-based saturation adjustment.

use crate::{ColorError, ColorResult, ColorSpace, convert_buffer};
use tint_core::PixelBuffer;

/// Scales the saturation of an RGB buffer by `proportion`.
///
/// The buffer is converted to LCH, the Chroma plane is multiplied by
/// `proportion`, and the result converted back to RGB. 0 produces a
/// grayscale image, 1 is an identity within the colorspace round trip,
/// values above 1 oversaturate. Heavily oversaturated colors can leave
/// the sRGB gamut and come back slightly outside [0, 1].
///
/// # Errors
///
/// Returns [`ColorError::WrongBandCount`] unless the buffer has exactly
/// 3 bands.
///
/// # Example
///
/// ```rust
/// use tint_core::PixelBuffer;
/// use tint_color::saturate_rgb;
///
/// let rgb = PixelBuffer::from_data(3, 1, 1, vec![0.4, 0.7, 0.2]).unwrap();
/// let gray = saturate_rgb(&rgb, 0.0).unwrap();
/// assert!((gray.get(0, 0, 0) - gray.get(1, 0, 0)).abs() < 0.1);
/// ```
pub fn saturate_rgb(buf: &PixelBuffer, proportion: f32) -> ColorResult<PixelBuffer> {
    if buf.bands() != 3 {
        return Err(ColorError::wrong_band_count(3, buf.bands()));
    }

    let mut lch = convert_buffer(buf, ColorSpace::Rgb, ColorSpace::Lch)?;
    for c in lch.band_mut(1) {
        *c *= proportion;
    }
    convert_buffer(&lch, ColorSpace::Lch, ColorSpace::Rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_pixel(r: f32, g: f32, b: f32) -> PixelBuffer {
        PixelBuffer::from_data(3, 1, 1, vec![r, g, b]).unwrap()
    }

    fn near(a: &PixelBuffer, b: &PixelBuffer, tol: f32) -> bool {
        a.data()
            .iter()
            .zip(b.data().iter())
            .all(|(x, y)| (x - y).abs() <= tol)
    }

    #[test]
    fn test_saturation_identity() {
        for rgb in [
            single_pixel(0.392156, 0.776470, 0.164705),
            single_pixel(0.0392, 0.1960, 0.3529),
            single_pixel(1.0, 0.0, 0.0),
        ] {
            let out = saturate_rgb(&rgb, 1.0).unwrap();
            assert!(near(&out, &rgb, 0.2));
        }
    }

    #[test]
    fn test_saturation_grayscale() {
        let rgb = single_pixel(0.392156, 0.776470, 0.164705);
        let gray = saturate_rgb(&rgb, 0.0).unwrap();
        assert!((gray.get(0, 0, 0) - gray.get(1, 0, 0)).abs() < 0.1);
        assert!((gray.get(1, 0, 0) - gray.get(2, 0, 0)).abs() < 0.1);
    }

    #[test]
    fn test_oversaturation() {
        let rgb = single_pixel(0.392156, 0.776470, 0.164705);
        let expected = single_pixel(0.3425, 0.78372, 0.0);
        let out = saturate_rgb(&rgb, 1.1).unwrap();
        assert!(near(&out, &expected, 0.2));

        let rgb = single_pixel(0.0392, 0.1960, 0.3529);
        let expected = single_pixel(0.0456, 0.1929, 0.3941);
        let out = saturate_rgb(&rgb, 1.25).unwrap();
        assert!(near(&out, &expected, 0.2));
    }

    #[test]
    fn test_wrong_band_count() {
        for bands in [2, 4] {
            let buf = PixelBuffer::new(bands, 2, 2);
            let result = saturate_rgb(&buf, 1.1);
            assert!(matches!(
                result,
                Err(ColorError::WrongBandCount { expected: 3, .. })
            ));
        }
    }
}
