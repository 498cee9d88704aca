//! Error types for color operations and the operation DSL.

use thiserror::Error;
use tint_color::ColorError;

/// Result type for color operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors from color operations and operation-string parsing.
///
/// Parse errors (`UnknownOperation`, `WrongArity`, `InvalidArgument`,
/// `InvalidBandSpec`, `EmptyPipeline`) surface before any pixel
/// processing begins, so a whole pipeline can be validated up front.
/// The remaining variants are apply-time: validation of the buffer and
/// parameters, or a violated output contract.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Input samples outside the [0, 1] working range (caller error).
    #[error("{op} input must be values between 0 and 1")]
    InputOutOfRange {
        /// Operation that rejected its input
        op: &'static str,
    },

    /// Gamma must be a positive, non-NaN exponent.
    #[error("gamma must be greater than 0, got {g}")]
    InvalidGamma {
        /// The rejected exponent
        g: f32,
    },

    /// Sigmoidal bias must lie in [0, 1].
    #[error("bias must be a scalar float between 0 and 1, got {bias}")]
    BiasOutOfRange {
        /// The rejected bias
        bias: f32,
    },

    /// Operation produced values outside [0, 1] or not finite.
    ///
    /// Never silently clamped: an out-of-range result signals misuse of
    /// the parameter domain.
    #[error("{op} output is not finite or falls outside the range 0 to 1")]
    OutputOutOfRange {
        /// Operation whose output violated the contract
        op: &'static str,
    },

    /// Operation name not recognized by the DSL.
    #[error("{name} is not a valid operation")]
    UnknownOperation {
        /// The unrecognized token
        name: String,
    },

    /// Wrong number of numeric arguments for an operation clause.
    #[error("{op} takes {expected} numeric argument(s), got {got}")]
    WrongArity {
        /// Operation name
        op: &'static str,
        /// Arguments the operation takes
        expected: usize,
        /// Arguments found in the clause
        got: usize,
    },

    /// Argument token could not be parsed as a number.
    #[error("invalid numeric argument for {op}: {token}")]
    InvalidArgument {
        /// Operation name
        op: &'static str,
        /// The malformed token
        token: String,
    },

    /// Band spec character is not a digit or r/g/b.
    #[error("invalid band character {found:?} for {op}: expected digits or r, g, b")]
    InvalidBandSpec {
        /// Operation name
        op: &'static str,
        /// The offending character
        found: char,
    },

    /// A selected band index is outside the buffer's band range.
    #[error("{op} band must be between 1 and {bands}, got {band}")]
    BandOutOfRange {
        /// Operation name
        op: &'static str,
        /// The out-of-range 1-based band index
        band: usize,
        /// Bands in the buffer
        bands: usize,
    },

    /// Operation string held no operations at all.
    #[error("operation string contains no operations")]
    EmptyPipeline,

    /// Colorspace error from the saturation path.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Underlying buffer error.
    #[error(transparent)]
    Buffer(#[from] tint_core::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_operation_message() {
        let err = OpsError::UnknownOperation { name: "foob".into() };
        assert_eq!(err.to_string(), "foob is not a valid operation");
    }

    #[test]
    fn test_band_out_of_range_message() {
        let err = OpsError::BandOutOfRange { op: "gamma", band: 7, bands: 3 };
        assert!(err.to_string().contains("between 1 and 3"));
    }

    #[test]
    fn test_color_error_passthrough() {
        let err: OpsError = ColorError::wrong_band_count(3, 4).into();
        assert!(err.to_string().contains("3-band"));
    }
}
