//! Error type shared by every fallible grid operation.

use crate::Point;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GridError>;

/// Contract violations reported by [`PixelGrid`](crate::PixelGrid) and its
/// helpers.
///
/// None of these are transient: the grid performs no I/O, so every error
/// points at a caller bug and is returned immediately without retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A supplied buffer does not hold exactly `width * height * 4` bytes.
    #[error(
        "expected a buffer of {expected} bytes (width * height * channels) but got {actual}"
    )]
    Construction {
        /// Byte length implied by the requested dimensions.
        expected: usize,
        /// Byte length of the buffer that was supplied.
        actual: usize,
    },
    /// A grid was requested with a zero dimension, or with dimensions whose
    /// buffer size overflows.
    #[error("cannot create a pixel grid of size {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// A point lies outside the grid.
    #[error("point {point} is outside of a {width}x{height} grid")]
    OutOfBounds {
        /// The offending point.
        point: Point,
        /// Width of the grid that was accessed.
        width: usize,
        /// Height of the grid that was accessed.
        height: usize,
    },
    /// A window was requested with an even width or height.
    #[error("expected an odd window size but got {width}x{height}")]
    InvalidWindowSize {
        /// Requested window width.
        width: usize,
        /// Requested window height.
        height: usize,
    },
    /// A fold was started without an initial accumulator.
    #[error("reduce requires an initial accumulator")]
    MissingAccumulator,
    /// A mapping callback produced no pixel.
    #[error("mapper did not return a pixel for point {point}")]
    MapperContractViolation {
        /// The point whose callback produced nothing.
        point: Point,
    },
    /// Two grids that must share dimensions do not.
    #[error(
        "expected a {}x{} grid but got {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    ShapeMismatch {
        /// Shape of the grid being written.
        expected: (usize, usize),
        /// Shape of the grid being read.
        actual: (usize, usize),
    },
}
