//! Saturation adjustment in LCH space.

use crate::OpsResult;
use tint_core::PixelBuffer;

/// Scales the saturation of a 3-band RGB buffer.
///
/// Multiplies Chroma by `proportion` in LCH color space. As saturation
/// increases colors appear more "pure"; as it decreases they appear more
/// washed-out. 0 produces grayscale, 1 leaves the image unchanged (up to
/// the colorspace round trip), 2 is likely far too saturated.
///
/// # Errors
///
/// Returns [`tint_color::ColorError::WrongBandCount`] (wrapped in
/// [`crate::OpsError::Color`]) unless the buffer has exactly 3 bands.
pub fn saturation(buf: &PixelBuffer, proportion: f32) -> OpsResult<PixelBuffer> {
    Ok(tint_color::saturate_rgb(buf, proportion)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    fn test_arr() -> PixelBuffer {
        let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        PixelBuffer::from_storage(3, 2, 2, &raw).unwrap()
    }

    #[test]
    fn test_saturation_identity() {
        let arr = test_arr();
        let x = saturation(&arr, 1.0).unwrap();
        for (a, b) in x.data().iter().zip(arr.data().iter()) {
            assert!((a - b).abs() < 0.2);
        }
    }

    #[test]
    fn test_saturation_grayscale() {
        let arr = test_arr();
        let x = saturation(&arr, 0.0).unwrap();
        for px in 0..arr.plane_len() {
            let r = x.band(0)[px];
            let g = x.band(1)[px];
            let b = x.band(2)[px];
            assert!((r - g).abs() < 0.1 && (g - b).abs() < 0.1);
        }
    }

    #[test]
    fn test_saturation_wrong_band_count() {
        for bands in [2, 4] {
            let buf = PixelBuffer::new(bands, 2, 2);
            assert!(matches!(
                saturation(&buf, 1.25),
                Err(OpsError::Color(tint_color::ColorError::WrongBandCount { .. }))
            ));
        }
    }
}
