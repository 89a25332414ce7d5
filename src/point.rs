//! Integer grid coordinates and their resolution-independent counterpart.

use core::{fmt, ops::Add};

/// Integer `(x, y)` coordinate with a top-left origin.
///
/// Coordinates are signed so that neighbor offsets and window positions can
/// step off the grid; [`PixelGrid::contains()`](crate::PixelGrid::contains)
/// decides whether a point addresses a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// `self + offset`, or `None` if either coordinate overflows.
    #[inline]
    pub fn checked_add(self, offset: Self) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(offset.x)?,
            self.y.checked_add(offset.y)?,
        ))
    }

    /// Sum of the absolute coordinate differences.
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Largest absolute coordinate difference.
    #[inline]
    pub fn chebyshev_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, offset: Self) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y)
    }
}

impl From<(isize, isize)> for Point {
    #[inline]
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point rescaled by the grid's dimensions to `x / width`, `y / height`.
///
/// Both coordinates lie in `[0, 1)`. Handed to
/// [`PixelGrid::normalized_map()`](crate::PixelGrid::normalized_map) callbacks
/// so generative code can ignore the grid's resolution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
