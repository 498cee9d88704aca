//! # tint-ops
//!
//! Parametric color operations over band-major raster tiles, and a small
//! DSL for expressing an ordered pipeline of them as one string.
//!
//! # Operations
//!
//! - [`gamma`] - power-law remapping, `x^(1/g)`
//! - [`sigmoidal`] - logistic contrast with a midpoint bias
//! - [`saturation`] - Chroma scaling in LCH space
//! - [`simple_atmo`] - composite atmospheric haze correction
//!
//! Every operation is a pure function: it takes a buffer with values in
//! [0, 1], returns a new buffer in the same range, and never mutates its
//! input. Out-of-range or non-finite results are reported as errors, not
//! clamped.
//!
//! # The operation DSL
//!
//! A pipeline is written as whitespace-separated clauses; commas are
//! optional whitespace. Operation names and band letters are
//! case-insensitive:
//!
//! ```text
//! gamma rgb 0.95, sigmoidal rgb 35 0.13, saturation 1.15
//! gamma 3 1.85 gamma 1,2 1.95 sigmoidal 1,2,3 35 0.13
//! ```
//!
//! [`parse_operations`] compiles a string into a [`Vec<ColorOp>`];
//! [`apply_operations`] folds a buffer through the sequence:
//!
//! ```rust
//! use tint_core::PixelBuffer;
//! use tint_ops::{apply_operations, parse_operations};
//!
//! let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
//! let tile = PixelBuffer::from_storage(3, 2, 2, &raw).unwrap();
//!
//! let ops = parse_operations("gamma rgb 0.95, sigmoidal rgb 35 0.13").unwrap();
//! let out = apply_operations(&ops, &tile).unwrap();
//! assert_eq!(out.bands(), 3);
//! ```
//!
//! A compiled sequence is immutable and can be shared across worker
//! threads; applying it to spatially disjoint tiles is embarrassingly
//! parallel.
//!
//! # Dependencies
//!
//! - [`tint-core`] - the `PixelBuffer` type
//! - [`tint-color`] - LCH conversion backing the saturation operation
//! - [`rayon`] - plane parallelism (optional, `parallel` feature)
//!
//! # Used By
//!
//! External raster I/O and job-dispatch layers; this crate is the whole
//! of the per-tile math.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod atmo;
mod error;
mod gamma;
mod guard;
mod magick;
mod map;
mod parse;
mod saturation;
mod sigmoidal;

pub use atmo::{simple_atmo, simple_atmo_opstring};
pub use error::{OpsError, OpsResult};
pub use gamma::gamma;
pub use magick::magick_to_ops;
pub use parse::{BandSet, ColorOp, apply_operations, parse_operations};
pub use saturation::saturation;
pub use sigmoidal::sigmoidal;
