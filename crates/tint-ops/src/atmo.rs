//! Static atmospheric haze correction.
//!
//! A simple, non-adaptive recipe for cutting through atmospheric haze in
//! satellite and aerial imagery: dampen the cool bands with per-band
//! gamma, then restore midtone contrast with a joint sigmoidal stretch.

use crate::OpsResult;
use crate::gamma::gamma_plane;
use crate::sigmoidal::sigmoidal_plane;
use tint_color::ColorError;
use tint_core::PixelBuffer;

/// Applies the atmospheric correction formula to an RGB(+) buffer.
///
/// `haze` is the amount of haze to adjust for (0 is none, 0.03 typical):
/// the green band gets gamma `1 - haze/3`, the blue band `1 - haze`, and
/// the red band is left untouched. The first three bands then receive a
/// joint sigmoidal contrast with `contrast` and `bias`. Bands beyond the
/// third pass through unmodified.
///
/// # Errors
///
/// - a wrong-band-count error if the buffer has fewer than 3 bands
/// - [`crate::OpsError::InvalidGamma`] when `haze >= 1` (the blue gamma
///   degenerates)
/// - any error the gamma or sigmoidal steps can raise
///
/// # Example
///
/// ```rust
/// use tint_core::PixelBuffer;
/// use tint_ops::simple_atmo;
///
/// let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
/// let tile = PixelBuffer::from_storage(3, 2, 2, &raw).unwrap();
/// let out = simple_atmo(&tile, 0.03, 10.0, 0.15).unwrap();
/// assert_eq!(out.bands(), 3);
/// ```
pub fn simple_atmo(
    rgb: &PixelBuffer,
    haze: f32,
    contrast: f32,
    bias: f32,
) -> OpsResult<PixelBuffer> {
    if rgb.bands() < 3 {
        return Err(ColorError::wrong_band_count(3, rgb.bands()).into());
    }

    let gamma_g = 1.0 - haze / 3.0;
    let gamma_b = 1.0 - haze;

    let mut out = rgb.clone();
    let green = gamma_plane(rgb.band(1), gamma_g)?;
    out.band_mut(1).copy_from_slice(&green);
    let blue = gamma_plane(rgb.band(2), gamma_b)?;
    out.band_mut(2).copy_from_slice(&blue);

    let color_len = 3 * out.plane_len();
    let contrasted = sigmoidal_plane(&out.data()[..color_len], contrast, bias)?;
    out.data_mut()[..color_len].copy_from_slice(&contrasted);

    Ok(out)
}

/// Renders the atmospheric correction as an operation string.
///
/// The returned pipeline is equivalent to [`simple_atmo`] with the same
/// parameters:
///
/// ```rust
/// use tint_ops::simple_atmo_opstring;
///
/// let ops = simple_atmo_opstring(0.03, 10.0, 0.15);
/// assert_eq!(ops, "gamma g 0.99, gamma b 0.97, sigmoidal rgb 10 0.15");
/// ```
pub fn simple_atmo_opstring(haze: f32, contrast: f32, bias: f32) -> String {
    let gamma_g = 1.0 - haze / 3.0;
    let gamma_b = 1.0 - haze;
    format!("gamma g {gamma_g}, gamma b {gamma_b}, sigmoidal rgb {contrast} {bias}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OpsError, apply_operations, parse_operations};

    fn test_arr() -> PixelBuffer {
        let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
        PixelBuffer::from_storage(3, 2, 2, &raw).unwrap()
    }

    fn test_arr_rgba() -> PixelBuffer {
        let raw: Vec<u8> = vec![
            10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 0, 0, 255, 255,
        ];
        PixelBuffer::from_storage(4, 2, 2, &raw).unwrap()
    }

    #[test]
    fn test_atmo_value() {
        let arr = test_arr();
        let x = simple_atmo(&arr, 0.03, 10.0, 0.15).unwrap();
        // red band is untouched by the gammas, so element (0,0,0) matches
        // a plain sigmoidal
        assert!((x.get(0, 0, 0) - 0.080560341).abs() < 1e-4);
    }

    #[test]
    fn test_atmo_heavy_haze_rejected() {
        // haze of 2.0 makes the blue gamma negative
        let arr = test_arr();
        assert!(matches!(
            simple_atmo(&arr, 2.0, 10.0, 0.15),
            Err(OpsError::InvalidGamma { .. })
        ));
    }

    #[test]
    fn test_atmo_bad_bias_rejected() {
        let arr = test_arr();
        assert!(matches!(
            simple_atmo(&arr, 0.03, 1000.0, -0.15),
            Err(OpsError::BiasOutOfRange { .. })
        ));
    }

    #[test]
    fn test_atmo_alpha_passthrough() {
        let rgba = test_arr_rgba();
        let x = simple_atmo(&rgba, 0.03, 10.0, 0.15).unwrap();
        assert_eq!(x.bands(), 4);
        assert_eq!(x.band(3), rgba.band(3));
    }

    #[test]
    fn test_atmo_opstring_equivalence() {
        let arr = test_arr();
        let direct = simple_atmo(&arr, 0.03, 10.0, 0.15).unwrap();

        let ops = parse_operations(&simple_atmo_opstring(0.03, 10.0, 0.15)).unwrap();
        let via_dsl = apply_operations(&ops, &arr).unwrap();

        for (a, b) in direct.data().iter().zip(via_dsl.data().iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
