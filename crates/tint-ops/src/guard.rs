//! Range guards shared by the pixel operations.
//!
//! Every operation works on [0, 1] data and promises [0, 1] output.
//! Inputs are checked before any math runs; outputs are checked after,
//! and a violation is an error rather than a clamp, so parameter-domain
//! misuse (negative gamma, extreme contrast/bias pairs) is never hidden.

use crate::{OpsError, OpsResult};

/// Slack allowed around the [0, 1] range.
pub(crate) const EPS: f32 = f32::EPSILON;

/// Checks that all samples lie in [0, 1] within [`EPS`].
///
/// NaN fails the comparison and is rejected too. This is the caller-error
/// check: a failure means the buffer handed in was not normalized.
pub(crate) fn ensure_input_range(data: &[f32], op: &'static str) -> OpsResult<()> {
    for &v in data {
        if !(v >= -EPS && v <= 1.0 + EPS) {
            return Err(OpsError::InputOutOfRange { op });
        }
    }
    Ok(())
}

/// Checks that all samples are finite and lie in [0, 1] within [`EPS`].
///
/// This is the post-condition on operation output.
pub(crate) fn ensure_output_range(data: &[f32], op: &'static str) -> OpsResult<()> {
    for &v in data {
        if !v.is_finite() || v < -EPS || v > 1.0 + EPS {
            return Err(OpsError::OutputOutOfRange { op });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_range_accepts_unit_interval() {
        assert!(ensure_input_range(&[0.0, 0.5, 1.0], "test").is_ok());
    }

    #[test]
    fn test_input_range_rejects_out_of_range() {
        assert!(ensure_input_range(&[0.0, 1.5], "test").is_err());
        assert!(ensure_input_range(&[-0.5], "test").is_err());
        assert!(ensure_input_range(&[f32::NAN], "test").is_err());
    }

    #[test]
    fn test_output_range_rejects_non_finite() {
        assert!(ensure_output_range(&[f32::INFINITY], "test").is_err());
        assert!(ensure_output_range(&[f32::NAN], "test").is_err());
        assert!(ensure_output_range(&[0.0, 1.0], "test").is_ok());
    }
}
