//! Conversion between stored [`Rgba`] pixels and [`Hsla`] colors.
//!
//! HSLA never lives in a grid; it is only a more convenient space for
//! generative code to pick colors in before writing them back as RGBA via
//! [`PixelGrid::set_hsla()`](crate::PixelGrid::set_hsla).

use crate::Rgba;

/// Hue, saturation, lightness and alpha, each in `[0, 1]`.
///
/// `hue` is a fraction of a full turn of the color wheel, not degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    #[inline]
    pub const fn new(
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    ) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    #[inline]
    pub fn to_rgba(self) -> Rgba {
        to_rgba(self)
    }
}

impl From<Hsla> for Rgba {
    #[inline]
    fn from(hsla: Hsla) -> Self {
        to_rgba(hsla)
    }
}

impl From<Rgba> for Hsla {
    #[inline]
    fn from(rgba: Rgba) -> Self {
        to_hsla(rgba)
    }
}

/// Scales a unit value to a byte with `min(floor(x * 256), 255)`.
///
/// Float-to-int casts saturate, so negative input lands on 0.
#[inline]
fn to_byte(value: f64) -> u8 {
    (value * 256.0).floor().min(255.0) as u8
}

#[inline]
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t >= 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts an HSLA color to an RGBA pixel.
///
/// ```
/// use pixel_grid::{Hsla, Rgba, to_rgba};
///
/// let red = to_rgba(Hsla::new(0.0, 1.0, 0.5, 1.0));
/// assert_eq!(red, Rgba::new(255, 0, 0, 255));
/// ```
pub fn to_rgba(hsla: Hsla) -> Rgba {
    let Hsla {
        hue: h,
        saturation: s,
        lightness: l,
        alpha: a,
    } = hsla;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgba::new(to_byte(r), to_byte(g), to_byte(b), to_byte(a))
}

/// Converts an RGBA pixel to an HSLA color.
///
/// ```
/// use pixel_grid::{Rgba, to_hsla};
///
/// let green = to_hsla(Rgba::new(0, 255, 0, 255));
/// assert!((green.hue - 1.0 / 3.0).abs() < 1e-9);
/// assert_eq!(green.lightness, 0.5);
/// ```
pub fn to_hsla(rgba: Rgba) -> Hsla {
    let r = rgba.red as f64 / 255.0;
    let g = rgba.green as f64 / 255.0;
    let b = rgba.blue as f64 / 255.0;
    let a = rgba.alpha as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsla::new(0.0, 0.0, lightness, a);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsla::new(sector / 6.0, saturation, lightness, a)
}
