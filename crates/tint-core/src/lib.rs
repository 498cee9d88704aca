//! # tint-core
//!
//! Core types for raster color correction.
//!
//! This crate provides the data model shared by the rest of the workspace:
//!
//! - [`PixelBuffer`] - Band-major (planar) raster tile with `f32` samples
//! - [`StorageFormat`] - Scaling between integer storage types and the
//!   normalized [0, 1] working range
//! - [`Error`] - Error types for buffer construction and access
//!
//! # Design
//!
//! All pixel math in this workspace runs on a single working type, `f32`,
//! with values normalized to [0, 1]. Integer raster data (u8, u16) is
//! scaled into that range at the edge of the system and scaled back out
//! when results are written:
//!
//! ```rust
//! use tint_core::PixelBuffer;
//!
//! // A 3-band 2x2 tile from 8-bit samples
//! let raw: Vec<u8> = vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120];
//! let buf = PixelBuffer::from_storage(3, 2, 2, &raw).unwrap();
//! assert!((buf.get(0, 0, 0) - 10.0 / 255.0).abs() < 1e-6);
//!
//! let back: Vec<u8> = buf.to_storage();
//! assert_eq!(raw, back);
//! ```
//!
//! # Used By
//!
//! - `tint-color` - colorspace conversion over 3-band buffers
//! - `tint-ops` - pixel operations and the operation DSL

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod buffer;
mod error;
mod storage;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use storage::{StorageFormat, from_normalized, to_normalized};
