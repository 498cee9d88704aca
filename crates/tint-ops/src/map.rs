//! Elementwise plane mapping, parallel when the `parallel` feature is on.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
pub(crate) fn map_plane<F>(src: &[f32], f: F) -> Vec<f32>
where
    F: Fn(f32) -> f32 + Sync,
{
    src.par_iter().map(|&x| f(x)).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn map_plane<F>(src: &[f32], f: F) -> Vec<f32>
where
    F: Fn(f32) -> f32 + Sync,
{
    src.iter().map(|&x| f(x)).collect()
}
