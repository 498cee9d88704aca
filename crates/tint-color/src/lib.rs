//! # tint-color
//!
//! Colorspace conversion engine for raster color correction.
//!
//! Converts color triples and whole pixel buffers between RGB, XYZ, Lab,
//! LCH and Luv, and provides the LCH-based saturation primitive built on
//! top of those conversions.
//!
//! # Conversions
//!
//! Every pair of spaces converts through XYZ as the common intermediate:
//!
//! ```text
//! RGB <-> XYZ <-> Lab <-> LCH
//!          ^
//!          +---> Luv
//! ```
//!
//! # Conventions
//!
//! - RGB is nonlinear sRGB in [0, 1]; the piecewise sRGB companding is
//!   applied on the way in and out.
//! - XYZ is normalized to the D65 white point, so white is (1, 1, 1).
//! - Hue is in radians, in (-pi, pi], straight from `atan2`.
//! - All math runs on `f32`, the workspace working type.
//!
//! # Example
//!
//! ```rust
//! use tint_color::{ColorSpace, convert};
//!
//! let lch = convert([1.0, 0.0, 0.0], ColorSpace::Rgb, ColorSpace::Lch);
//! let rgb = convert(lch, ColorSpace::Lch, ColorSpace::Rgb);
//! assert!((rgb[0] - 1.0).abs() < 0.01);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - the `PixelBuffer` type
//! - [`rayon`] - row parallelism in buffer conversion
//!
//! # Used By
//!
//! - `tint-ops` - the saturation operation and the DSL compiler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod error;
mod saturate;
pub mod transfer;

pub use convert::{ColorSpace, convert, convert_buffer};
pub use error::{ColorError, ColorResult};
pub use saturate::saturate_rgb;
