//! Colorspace conversion between RGB, XYZ, Lab, LCH and Luv.
//!
//! All conversions route through XYZ as the common intermediate, so any
//! (src, dst) pair is two steps at most. XYZ here is D65-normalized:
//! reference white is (1, 1, 1), which keeps the Lab/Luv formulas free of
//! explicit white-point terms.
//!
//! # Native ranges
//!
//! | Space | Components |
//! |-------|------------|
//! | RGB   | [0, 1] nonlinear sRGB |
//! | XYZ   | [0, ~1] white-normalized |
//! | Lab   | L 0-100, a/b unbounded signed |
//! | LCH   | L 0-100, C >= 0, H radians in (-pi, pi] |
//! | Luv   | L 0-100, u/v unbounded signed |

use crate::transfer::{srgb_eotf, srgb_oetf};
use crate::{ColorError, ColorResult};
use rayon::prelude::*;
use tint_core::PixelBuffer;

/// CIE Lab breakpoint in the XYZ domain, (6/29)^3.
const T0: f32 = 0.008_856_451_7;
/// Slope of the linear segment of the Lab forward function, 1/(3*(6/29)^2).
const ALPHA: f32 = 7.787_037;
/// Offset of the linear segment, 4/29.
const OFFSET: f32 = 0.137_931_034;
/// Breakpoint of the inverse function in the f domain, 6/29.
const F_BREAK: f32 = 0.206_896_55;
/// Slope of the inverse linear segment, 3*(6/29)^2.
const F_SLOPE: f32 = 0.128_418_55;

/// D65 white point used to normalize X and Z.
const XN: f32 = 0.95047;
const ZN: f32 = 1.08883;

/// u', v' chromaticity of the normalized white point (1, 1, 1).
const UN_PRIME: f32 = 4.0 / 19.0;
const VN_PRIME: f32 = 9.0 / 19.0;

/// A colorspace a triple or buffer can be converted to or from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Nonlinear sRGB, components in [0, 1].
    Rgb,
    /// CIE XYZ, normalized to the D65 white point.
    Xyz,
    /// CIE L*a*b*.
    Lab,
    /// Cylindrical Lab: Lightness, Chroma, Hue (radians).
    Lch,
    /// CIE L*u*v*.
    Luv,
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Rgb => "rgb",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Luv => "luv",
        };
        f.write_str(name)
    }
}

/// Forward CIE function: cube root above the breakpoint, linear below.
#[inline]
fn f_cie(t: f32) -> f32 {
    if t > T0 { t.cbrt() } else { ALPHA * t + OFFSET }
}

/// Inverse of [`f_cie`].
#[inline]
fn f_cie_inv(t: f32) -> f32 {
    if t > F_BREAK {
        t * t * t
    } else {
        F_SLOPE * (t - OFFSET)
    }
}

#[inline]
fn rgb_to_xyz([r, g, b]: [f32; 3]) -> [f32; 3] {
    let rl = srgb_eotf(r);
    let gl = srgb_eotf(g);
    let bl = srgb_eotf(b);

    // sRGB -> XYZ matrix with D65 white normalization
    [
        (rl * 0.4124 + gl * 0.3576 + bl * 0.1805) / XN,
        rl * 0.2126 + gl * 0.7152 + bl * 0.0722,
        (rl * 0.0193 + gl * 0.1192 + bl * 0.9505) / ZN,
    ]
}

#[inline]
fn xyz_to_rgb([x, y, z]: [f32; 3]) -> [f32; 3] {
    let x = x * XN;
    let z = z * ZN;

    let rl = x * 3.2406 + y * -1.5372 + z * -0.4986;
    let gl = x * -0.9689 + y * 1.8758 + z * 0.0415;
    let bl = x * 0.0557 + y * -0.2040 + z * 1.0570;

    [srgb_oetf(rl), srgb_oetf(gl), srgb_oetf(bl)]
}

#[inline]
fn xyz_to_lab([x, y, z]: [f32; 3]) -> [f32; 3] {
    let fx = f_cie(x);
    let fy = f_cie(y);
    let fz = f_cie(z);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

#[inline]
fn lab_to_xyz([l, a, b]: [f32; 3]) -> [f32; 3] {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    [f_cie_inv(fx), f_cie_inv(fy), f_cie_inv(fz)]
}

#[inline]
fn lab_to_lch([l, a, b]: [f32; 3]) -> [f32; 3] {
    [l, (a * a + b * b).sqrt(), b.atan2(a)]
}

#[inline]
fn lch_to_lab([l, c, h]: [f32; 3]) -> [f32; 3] {
    [l, c * h.cos(), c * h.sin()]
}

#[inline]
fn xyz_to_luv([x, y, z]: [f32; 3]) -> [f32; 3] {
    let denom = x + 15.0 * y + 3.0 * z;
    let (u_prime, v_prime) = if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    };

    let l = 116.0 * f_cie(y) - 16.0;
    [
        l,
        13.0 * l * (u_prime - UN_PRIME),
        13.0 * l * (v_prime - VN_PRIME),
    ]
}

#[inline]
fn luv_to_xyz([l, u, v]: [f32; 3]) -> [f32; 3] {
    // Near-black lightness carries no recoverable chromaticity; the
    // u'/v' ratios below would divide rounding residue by rounding
    // residue.
    if l.abs() < 1e-4 {
        return [0.0, 0.0, 0.0];
    }

    let u_prime = u / (13.0 * l) + UN_PRIME;
    let v_prime = v / (13.0 * l) + VN_PRIME;

    let y = f_cie_inv((l + 16.0) / 116.0);
    if v_prime.abs() < 1e-4 {
        return [0.0, y, 0.0];
    }

    // Solve u' = 4x/d, v' = 9y/d for x and z, with d = x + 15y + 3z
    let d = 9.0 * y / v_prime;
    let x = u_prime * d / 4.0;
    let z = (d - x - 15.0 * y) / 3.0;

    [x, y, z]
}

#[inline]
fn to_xyz(color: [f32; 3], src: ColorSpace) -> [f32; 3] {
    match src {
        ColorSpace::Rgb => rgb_to_xyz(color),
        ColorSpace::Xyz => color,
        ColorSpace::Lab => lab_to_xyz(color),
        ColorSpace::Lch => lab_to_xyz(lch_to_lab(color)),
        ColorSpace::Luv => luv_to_xyz(color),
    }
}

#[inline]
fn from_xyz(color: [f32; 3], dst: ColorSpace) -> [f32; 3] {
    match dst {
        ColorSpace::Rgb => xyz_to_rgb(color),
        ColorSpace::Xyz => color,
        ColorSpace::Lab => xyz_to_lab(color),
        ColorSpace::Lch => lab_to_lch(xyz_to_lab(color)),
        ColorSpace::Luv => xyz_to_luv(color),
    }
}

/// Converts one color triple between two colorspaces.
///
/// Pure and total: every pair of [`ColorSpace`] values is defined, and
/// `src == dst` returns the input unchanged.
///
/// # Example
///
/// ```rust
/// use tint_color::{ColorSpace, convert};
///
/// let [l, c, h] = convert([1.0, 0.0, 0.0], ColorSpace::Rgb, ColorSpace::Lch);
/// assert!((l - 53.2).abs() < 1.0);
/// assert!((c - 104.6).abs() < 1.0);
/// assert!((h - 0.7).abs() < 0.25);
/// ```
#[inline]
pub fn convert(color: [f32; 3], src: ColorSpace, dst: ColorSpace) -> [f32; 3] {
    if src == dst {
        return color;
    }
    from_xyz(to_xyz(color, src), dst)
}

/// Converts a 3-band pixel buffer between two colorspaces, element-wise.
///
/// Bands are the color channels: band 0 carries the first component of
/// `src`, and so on. Samples are processed in parallel.
///
/// # Errors
///
/// Returns [`ColorError::WrongBandCount`] if the buffer does not have
/// exactly 3 bands. The check runs before any conversion math.
pub fn convert_buffer(
    buf: &PixelBuffer,
    src: ColorSpace,
    dst: ColorSpace,
) -> ColorResult<PixelBuffer> {
    if buf.bands() != 3 {
        return Err(ColorError::wrong_band_count(3, buf.bands()));
    }

    let plane = buf.plane_len();
    let mut out = PixelBuffer::new(3, buf.height(), buf.width());
    {
        let (o0, rest) = out.data_mut().split_at_mut(plane);
        let (o1, o2) = rest.split_at_mut(plane);

        (o0, o1, o2, buf.band(0), buf.band(1), buf.band(2))
            .into_par_iter()
            .for_each(|(d0, d1, d2, &c0, &c1, &c2)| {
                let [r0, r1, r2] = convert([c0, c1, c2], src, dst);
                *d0 = r0;
                *d1 = r1;
                *d2 = r2;
            });
    }
    Ok(out)
}
