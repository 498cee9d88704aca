//! Operation DSL: parse a pipeline string into compiled operations.
//!
//! A pipeline string is a sequence of clauses,
//!
//! ```text
//! OPNAME BANDS ARG... [OPNAME BANDS ARG...]...
//! ```
//!
//! separated by whitespace. Commas are optional whitespace with no
//! semantic weight; operation names and band letters are
//! case-insensitive. `saturation` takes no band spec (it always targets
//! the first three bands); its proportion follows the name directly.
//!
//! Parsing validates names, arities and numeric arguments up front, so a
//! whole pipeline can be checked before any pixel work starts. Band
//! indices are range-checked at apply time instead, when the buffer's
//! band count is finally known.

use crate::gamma::gamma_plane;
use crate::sigmoidal::sigmoidal_plane;
use crate::{OpsError, OpsResult};
use tint_color::{ColorError, saturate_rgb};
use tint_core::PixelBuffer;

const OP_GAMMA: &str = "gamma";
const OP_SIGMOIDAL: &str = "sigmoidal";
const OP_SATURATION: &str = "saturation";

const OP_NAMES: [&str; 3] = [OP_GAMMA, OP_SIGMOIDAL, OP_SATURATION];

/// Resolved set of 1-based band indices for one operation clause.
///
/// Built from a band spec such as `rgb`, `13` or `Rg`: each character is
/// a digit or one of `r`/`g`/`b` (mapped to 1/2/3, case-insensitive).
/// Duplicates collapse; order does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandSet(Vec<usize>);

impl BandSet {
    /// Parses a band spec string.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidBandSpec`] for any character that is
    /// neither a digit nor r/g/b.
    pub fn from_spec(op: &'static str, spec: &str) -> OpsResult<Self> {
        let mut bands = Vec::new();
        for c in spec.chars() {
            let band = match c {
                '0'..='9' => c as usize - '0' as usize,
                'r' | 'R' => 1,
                'g' | 'G' => 2,
                'b' | 'B' => 3,
                _ => return Err(OpsError::InvalidBandSpec { op, found: c }),
            };
            if !bands.contains(&band) {
                bands.push(band);
            }
        }
        bands.sort_unstable();
        Ok(Self(bands))
    }

    /// Iterates the selected band indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// Number of selected bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no bands are selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for BandSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for band in &self.0 {
            write!(f, "{band}")?;
        }
        Ok(())
    }
}

/// One compiled operation clause.
///
/// Immutable once constructed; holds the operation kind, its numeric
/// parameters and the resolved band set. A sequence of these is cheap to
/// share across parallel workers.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    /// Per-band power-law remapping.
    Gamma {
        /// Gamma exponent
        g: f32,
        /// Bands the curve applies to
        bands: BandSet,
    },
    /// Per-band sigmoidal contrast.
    Sigmoidal {
        /// Contrast strength (0 = identity)
        contrast: f32,
        /// Midpoint bias in [0, 1]
        bias: f32,
        /// Bands the curve applies to
        bands: BandSet,
    },
    /// Joint LCH saturation over the first three bands.
    Saturation {
        /// Chroma multiplier
        proportion: f32,
    },
}

impl ColorOp {
    /// The operation's DSL name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gamma { .. } => OP_GAMMA,
            Self::Sigmoidal { .. } => OP_SIGMOIDAL,
            Self::Saturation { .. } => OP_SATURATION,
        }
    }

    /// Applies this operation to a buffer, returning a new buffer with
    /// the same band count.
    ///
    /// Band-scalar operations (gamma, sigmoidal) transform each selected
    /// band independently; all other bands are copied through untouched.
    /// Saturation transforms the first three bands as a unit and leaves
    /// any further bands (alpha, masks) bit-identical.
    ///
    /// # Errors
    ///
    /// - [`OpsError::BandOutOfRange`] if a selected band exceeds the
    ///   buffer's band count
    /// - a wrong-band-count error if saturation is applied to a buffer
    ///   with fewer than 3 bands
    /// - any validation or range error of the underlying operation
    pub fn apply(&self, buf: &PixelBuffer) -> OpsResult<PixelBuffer> {
        match self {
            Self::Gamma { g, bands } => {
                apply_per_band(buf, OP_GAMMA, bands, |src| gamma_plane(src, *g))
            }
            Self::Sigmoidal { contrast, bias, bands } => {
                apply_per_band(buf, OP_SIGMOIDAL, bands, |src| {
                    sigmoidal_plane(src, *contrast, *bias)
                })
            }
            Self::Saturation { proportion } => {
                if buf.bands() < 3 {
                    return Err(ColorError::wrong_band_count(3, buf.bands()).into());
                }
                let rgb = buf.first_bands(3)?;
                let sat = saturate_rgb(&rgb, *proportion)?;
                let mut out = buf.clone();
                out.data_mut()[..3 * buf.plane_len()].copy_from_slice(sat.data());
                Ok(out)
            }
        }
    }
}

impl std::fmt::Display for ColorOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gamma { g, bands } => write!(f, "gamma {bands} {g}"),
            Self::Sigmoidal { contrast, bias, bands } => {
                write!(f, "sigmoidal {bands} {contrast} {bias}")
            }
            Self::Saturation { proportion } => write!(f, "saturation {proportion}"),
        }
    }
}

/// Transforms each selected band of `buf` through `f` into a copy.
fn apply_per_band<F>(
    buf: &PixelBuffer,
    op: &'static str,
    bands: &BandSet,
    f: F,
) -> OpsResult<PixelBuffer>
where
    F: Fn(&[f32]) -> OpsResult<Vec<f32>>,
{
    let mut out = buf.clone();
    for band in bands.iter() {
        if band < 1 || band > buf.bands() {
            return Err(OpsError::BandOutOfRange { op, band, bands: buf.bands() });
        }
        let plane = f(buf.band(band - 1))?;
        out.band_mut(band - 1).copy_from_slice(&plane);
    }
    Ok(out)
}

/// Parses an operation string into an ordered list of compiled
/// operations.
///
/// # Errors
///
/// - [`OpsError::EmptyPipeline`] for a string with no tokens at all
/// - [`OpsError::UnknownOperation`] when no token names a known
///   operation
/// - [`OpsError::InvalidBandSpec`], [`OpsError::WrongArity`] or
///   [`OpsError::InvalidArgument`] for a malformed clause
///
/// # Example
///
/// ```rust
/// use tint_ops::parse_operations;
///
/// let ops = parse_operations("gamma 1,2 0.95 sigmoidal rgb 35 0.13").unwrap();
/// assert_eq!(ops.len(), 2);
/// assert_eq!(ops[0].name(), "gamma");
/// ```
pub fn parse_operations(ops_string: &str) -> OpsResult<Vec<ColorOp>> {
    // commas are optional whitespace, treated like an empty string
    let cleaned = ops_string.replace(',', "");
    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(|t| t.to_ascii_lowercase())
        .collect();
    if tokens.is_empty() {
        return Err(OpsError::EmptyPipeline);
    }

    // Group tokens into clauses, one per operation name; tokens before
    // the first operation name are discarded.
    let mut clauses: Vec<Vec<&str>> = Vec::new();
    for token in &tokens {
        if OP_NAMES.contains(&token.as_str()) {
            clauses.push(vec![token.as_str()]);
        } else if let Some(clause) = clauses.last_mut() {
            clause.push(token.as_str());
        }
    }
    if clauses.is_empty() {
        return Err(OpsError::UnknownOperation { name: tokens[0].clone() });
    }

    clauses.iter().map(|clause| compile_clause(clause)).collect()
}

/// Compiles one clause (operation name plus its tokens).
fn compile_clause(parts: &[&str]) -> OpsResult<ColorOp> {
    match parts[0] {
        OP_GAMMA => {
            let (bands, args) = band_clause(OP_GAMMA, parts, 1)?;
            Ok(ColorOp::Gamma { g: args[0], bands })
        }
        OP_SIGMOIDAL => {
            let (bands, args) = band_clause(OP_SIGMOIDAL, parts, 2)?;
            Ok(ColorOp::Sigmoidal { contrast: args[0], bias: args[1], bands })
        }
        OP_SATURATION => {
            let args = numeric_args(OP_SATURATION, &parts[1..], 1)?;
            Ok(ColorOp::Saturation { proportion: args[0] })
        }
        name => Err(OpsError::UnknownOperation { name: name.to_string() }),
    }
}

/// Splits a band-taking clause into its band set and numeric arguments.
fn band_clause(
    op: &'static str,
    parts: &[&str],
    expected: usize,
) -> OpsResult<(BandSet, Vec<f32>)> {
    let spec = parts
        .get(1)
        .ok_or(OpsError::WrongArity { op, expected, got: 0 })?;
    let bands = BandSet::from_spec(op, spec)?;
    let args = numeric_args(op, &parts[2..], expected)?;
    Ok((bands, args))
}

/// Parses exactly `expected` positional float arguments.
fn numeric_args(op: &'static str, args: &[&str], expected: usize) -> OpsResult<Vec<f32>> {
    if args.len() != expected {
        return Err(OpsError::WrongArity { op, expected, got: args.len() });
    }
    args.iter()
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| OpsError::InvalidArgument { op, token: token.to_string() })
        })
        .collect()
}

/// Folds a buffer through an operation sequence, in order.
///
/// # Errors
///
/// Propagates the first error any operation raises.
pub fn apply_operations(ops: &[ColorOp], buf: &PixelBuffer) -> OpsResult<PixelBuffer> {
    let mut out = buf.clone();
    for op in ops {
        out = op.apply(&out)?;
    }
    Ok(out)
}
