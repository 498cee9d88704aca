//! Gamma correction - power-law pixel remapping.

use crate::map::map_plane;
use crate::{OpsError, OpsResult, guard};
use tint_core::PixelBuffer;

pub(crate) const NAME: &str = "gamma";

/// Applies `x^(1/g)` to one plane of samples.
///
/// Shared by the whole-buffer [`gamma`] and the per-band DSL path.
pub(crate) fn gamma_plane(src: &[f32], g: f32) -> OpsResult<Vec<f32>> {
    if g <= 0.0 || g.is_nan() {
        return Err(OpsError::InvalidGamma { g });
    }
    guard::ensure_input_range(src, NAME)?;

    let inv = 1.0 / g;
    let out = map_plane(src, move |x| x.powf(inv));

    guard::ensure_output_range(&out, NAME)?;
    Ok(out)
}

/// Gamma-corrects every band of a buffer.
///
/// Remaps each sample according to a power law, `out = in^(1/g)`.
/// Setting `g` below 1.0 darkens the image; above 1.0 lightens it.
/// Reasonable values range from about 0.8 to 2.4.
///
/// # Errors
///
/// - [`OpsError::InvalidGamma`] if `g <= 0` or `g` is NaN
/// - [`OpsError::InputOutOfRange`] if the buffer is not normalized to
///   [0, 1]
/// - [`OpsError::OutputOutOfRange`] if the result leaves [0, 1] or is not
///   finite (for example a near-zero exponent driving values to
///   infinity)
///
/// # Example
///
/// ```rust
/// use tint_core::PixelBuffer;
/// use tint_ops::gamma;
///
/// let buf = PixelBuffer::from_data(1, 1, 2, vec![0.25, 1.0]).unwrap();
/// let out = gamma(&buf, 2.0).unwrap();
/// assert!((out.get(0, 0, 0) - 0.5).abs() < 1e-6);
/// ```
pub fn gamma(buf: &PixelBuffer, g: f32) -> OpsResult<PixelBuffer> {
    let data = gamma_plane(buf.data(), g)?;
    Ok(PixelBuffer::from_data(buf.bands(), buf.height(), buf.width(), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_arr() -> PixelBuffer {
        let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        PixelBuffer::from_storage(3, 2, 2, &raw).unwrap()
    }

    #[test]
    fn test_gamma_value() {
        let arr = test_arr();
        let x = gamma(&arr, 0.95).unwrap();
        assert!((x.get(0, 0, 0) - 0.033069782).abs() < 1e-4);
    }

    #[test]
    fn test_gamma_identity() {
        let arr = test_arr();
        let x = gamma(&arr, 1.0).unwrap();
        assert_eq!(x.data(), arr.data());
    }

    #[test]
    fn test_gamma_negative() {
        let arr = test_arr();
        assert!(matches!(gamma(&arr, -2.0), Err(OpsError::InvalidGamma { .. })));
        assert!(matches!(gamma(&arr, -0.001), Err(OpsError::InvalidGamma { .. })));
    }

    #[test]
    fn test_gamma_nan() {
        let arr = test_arr();
        assert!(matches!(gamma(&arr, f32::NAN), Err(OpsError::InvalidGamma { .. })));
    }

    #[test]
    fn test_gamma_negative_input() {
        let data: Vec<f32> = test_arr().data().iter().map(|v| -v).collect();
        let arr = PixelBuffer::from_data(3, 2, 2, data).unwrap();
        assert!(matches!(
            gamma(&arr, 2.2),
            Err(OpsError::InputOutOfRange { op: "gamma" })
        ));
    }

    #[test]
    fn test_gamma_does_not_mutate_input() {
        let arr = test_arr();
        let before = arr.data().to_vec();
        let _ = gamma(&arr, 0.5).unwrap();
        assert_eq!(arr.data(), &before[..]);
    }
}
