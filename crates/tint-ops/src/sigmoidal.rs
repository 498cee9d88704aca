//! Sigmoidal contrast adjustment.
//!
//! Contrast control based on the logistic transfer function, rescaled so
//! the output stays inside [0, 1]. Unlike a linear stretch it never
//! saturates highlights or shadows; `contrast` sets the strength of the
//! curve and `bias` the midtone value it pivots on.
//!
//! # Formula
//!
//! With contrast β and bias α, the forward curve (β > 0) is
//!
//! ```text
//! ( 1/(1 + e^(β(α - x))) - 1/(1 + e^(βα)) )
//! -----------------------------------------
//! ( 1/(1 + e^(β(α - 1))) - 1/(1 + e^(βα)) )
//! ```
//!
//! and β < 0 applies the inverse of that curve with |β|. β = 0 is the
//! identity.
//!
//! # Reference
//!
//! Hany Farid, "Fundamentals of Image Processing"

use crate::map::map_plane;
use crate::{OpsError, OpsResult, guard};
use tint_core::PixelBuffer;

pub(crate) const NAME: &str = "sigmoidal";

/// Applies sigmoidal contrast to one plane of samples.
///
/// Shared by the whole-buffer [`sigmoidal`] and the per-band DSL path.
pub(crate) fn sigmoidal_plane(src: &[f32], contrast: f32, bias: f32) -> OpsResult<Vec<f32>> {
    guard::ensure_input_range(src, NAME)?;
    if !(bias >= -guard::EPS && bias <= 1.0 + guard::EPS) {
        return Err(OpsError::BiasOutOfRange { bias });
    }

    let beta = contrast;
    // A bias of exactly 0 degenerates the curve; nudge it to epsilon.
    let alpha = if bias == 0.0 { guard::EPS } else { bias };

    if beta == 0.0 {
        return Ok(src.to_vec());
    }

    let out = if beta > 0.0 {
        let offset = 1.0 / (1.0 + (beta * alpha).exp());
        let scale = 1.0 / (1.0 + (beta * (alpha - 1.0)).exp()) - offset;
        map_plane(src, move |x| {
            (1.0 / (1.0 + (beta * (alpha - x)).exp()) - offset) / scale
        })
    } else {
        // Inverse sigmoidal function
        let d1 = 1.0 + (beta * alpha - beta).exp();
        let d2 = 1.0 + (beta * alpha).exp();
        map_plane(src, move |x| {
            let inner = x / d1 - x / d2 + 1.0 / d2;
            (beta * alpha - (1.0 / inner - 1.0).ln()) / beta
        })
    };

    // Pathological (contrast, bias) pairs divide by zero or take the log
    // of a non-positive number; the range check turns that into an error.
    guard::ensure_output_range(&out, NAME)?;
    Ok(out)
}

/// Applies sigmoidal contrast to every band of a buffer.
///
/// `contrast` may be any real value: 0 is none, 3 is typical, 20 is a
/// lot, and negative values invert the curve. `bias` is the threshold
/// level the curve centers on, in [0, 1] (typically 0.5).
///
/// # Errors
///
/// - [`OpsError::InputOutOfRange`] if the buffer is not normalized to
///   [0, 1]
/// - [`OpsError::BiasOutOfRange`] if `bias` is outside [0, 1]
/// - [`OpsError::OutputOutOfRange`] if a pathological parameter pair
///   produces NaN or out-of-range output
///
/// # Example
///
/// ```rust
/// use tint_core::PixelBuffer;
/// use tint_ops::sigmoidal;
///
/// let buf = PixelBuffer::from_data(1, 1, 2, vec![0.2, 0.8]).unwrap();
/// let out = sigmoidal(&buf, 10.0, 0.5).unwrap();
/// // midtone contrast pushes values away from the bias point
/// assert!(out.get(0, 0, 0) < 0.2);
/// assert!(out.get(0, 0, 1) > 0.8);
/// ```
pub fn sigmoidal(buf: &PixelBuffer, contrast: f32, bias: f32) -> OpsResult<PixelBuffer> {
    let data = sigmoidal_plane(buf.data(), contrast, bias)?;
    Ok(PixelBuffer::from_data(buf.bands(), buf.height(), buf.width(), data)?)
}
