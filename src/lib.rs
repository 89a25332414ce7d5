//! A grid abstraction over flat, channel-interleaved RGBA pixel buffers.
//!
//! [`PixelGrid`] owns a row-major `width × height × 4` byte buffer and offers
//! bounds-checked pixel access on top of it, plus the building blocks
//! generative-art and image-filter code keeps reaching for:
//!
//! - Neighbor queries over [`VonNeumann`] (4-connected) and [`Moore`]
//!   (8-connected) neighborhoods.
//! - Odd-sized [windows](PixelGrid::window) centered on a point, padded with
//!   [`Rgba::SENTINEL`] where they hang over the border.
//! - Row-major traversal: [`for_each()`](PixelGrid::for_each),
//!   [`map()`](PixelGrid::map), [`normalized_map()`](PixelGrid::normalized_map)
//!   and [`reduce()`](PixelGrid::reduce).
//! - [`to_rgba()`] / [`to_hsla()`] color conversion.
//! - A stochastic [dither](PixelGrid::random_dither_from) that stamps sampled
//!   pixels onto the neighbors of random points.
//!
//! The crate never talks to a rendering surface. Callers hand in a raw buffer
//! via [`PixelGrid::from_buffer()`] and take it back with
//! [`PixelGrid::into_bytes()`] or [`PixelGrid::as_bytes()`].
//!
//! # Example
//!
//! ```
//! use pixel_grid::{Hsla, PixelGrid, Point, Rgba};
//!
//! let mut grid = PixelGrid::new(16, 16).unwrap();
//! grid.set_hsla(grid.center(), Hsla::new(0.0, 1.0, 0.5, 1.0)).unwrap();
//!
//! // Box blur of the red channel, edge-padded with opaque black.
//! let blurred = grid.map(|pixel, point, source| {
//!     let window = source.window(point, 3, 3).unwrap();
//!     let red = window.reduce(0u32, |sum, pixel, _| sum + pixel.red as u32);
//!     Rgba::new((red / 9) as u8, pixel.green, pixel.blue, 255)
//! });
//!
//! assert_eq!(blurred.get(Point::new(8, 7)).unwrap().red, 255 / 9);
//! ```
//!
//! # Errors
//!
//! Every contract violation is reported as a [`GridError`]. Nothing is
//! retried or logged-and-swallowed; callers decide whether a violation is
//! fatal.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on [`Point`],
//!   [`NormalizedPoint`], [`Rgba`], [`Hsla`] and [`DitherOptions`].

mod color;
mod dither;
mod error;
mod grid;
mod neighborhood;
mod pixel;
mod point;
mod traverse;
mod window;

pub use color::{Hsla, to_hsla, to_rgba};
pub use dither::DitherOptions;
pub use error::{GridError, Result};
pub use grid::{CHANNELS, PixelGrid};
pub use neighborhood::{
    MOORE_OFFSETS, Moore, Neighborhood, NeighborhoodKind, VON_NEUMANN_OFFSETS,
    VonNeumann,
};
pub use pixel::Rgba;
pub use point::{NormalizedPoint, Point};
pub use traverse::Points;
