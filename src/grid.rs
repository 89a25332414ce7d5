//! The flat, channel-interleaved pixel buffer and its indexing.

use crate::{GridError, Hsla, Point, Result, Rgba, to_rgba};
use rand::Rng;

/// Number of interleaved channels per pixel. Always RGBA.
pub const CHANNELS: usize = 4;

/// Byte length of a `width × height` RGBA buffer.
///
/// Both dimensions must be non-zero and the length must stay within
/// `isize::MAX`, which also keeps every coordinate representable as a
/// [`Point`].
fn buffer_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .filter(|&len| width > 0 && height > 0 && len <= isize::MAX as usize)
        .ok_or(GridError::InvalidDimensions { width, height })
}

/// A `width × height` grid of [`Rgba`] pixels backed by one flat byte
/// buffer.
///
/// Pixels are stored row-major with a top-left origin; the first byte of
/// `(x, y)` sits at `y * width * 4 + x * 4`. The buffer is the only pixel
/// state and is owned exclusively by the grid. It changes only through
/// [`set()`](Self::set) and the operations built on it; [`map()`](Self::map)
/// and [`window()`](Self::window) always allocate a new grid.
///
/// # Example
///
/// ```
/// use pixel_grid::{PixelGrid, Point, Rgba};
///
/// let mut grid = PixelGrid::new(10, 10).unwrap();
/// let point = Point::new(1, 3);
/// grid.set(point, Rgba::new(6, 2, 5, 1)).unwrap();
///
/// assert_eq!(grid.get(point).unwrap(), Rgba::new(6, 2, 5, 1));
/// assert!(grid.get(Point::new(10, 0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
}

impl PixelGrid {
    /// Allocates a zero-filled (transparent black) grid.
    ///
    /// Fails with [`GridError::InvalidDimensions`] if either dimension is zero
    /// or the buffer size would not fit in memory.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = buffer_len(width, height)?;
        Ok(Self::zeroed(width, height, len))
    }

    /// Wraps an existing RGBA buffer, e.g. one read back from a rendering
    /// surface or a decoded image.
    ///
    /// Fails with [`GridError::InvalidDimensions`] for unusable dimensions
    /// and with [`GridError::Construction`] unless the buffer holds exactly
    /// `width * height * 4` bytes.
    pub fn from_buffer(
        width: usize,
        height: usize,
        buffer: impl Into<Vec<u8>>,
    ) -> Result<Self> {
        let buffer = buffer.into();
        let expected = buffer_len(width, height)?;

        if buffer.len() != expected {
            return Err(GridError::Construction {
                expected,
                actual: buffer.len(),
            });
        }

        tracing::debug!(width, height, "wrapped external pixel buffer");

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    /// A zero-filled grid with the same shape as this one.
    #[inline]
    pub(crate) fn blank(&self) -> Self {
        Self::zeroed(self.width, self.height, self.buffer.len())
    }

    #[inline]
    fn zeroed(width: usize, height: usize, len: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; len],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        CHANNELS
    }

    /// The raw row-major RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Gives up the grid and returns its buffer, for handing back to a
    /// rendering surface.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Whether `point` addresses a pixel of this grid.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Reads the pixel at `point`.
    pub fn get(&self, point: Point) -> Result<Rgba> {
        let index = self.index(point)?;
        Ok(self.read(index))
    }

    /// Writes `pixel` at `point`.
    pub fn set(&mut self, point: Point, pixel: Rgba) -> Result<()> {
        let index = self.index(point)?;
        self.write(index, pixel);
        Ok(())
    }

    /// Converts `pixel` to RGBA and writes it at `point`.
    pub fn set_hsla(&mut self, point: Point, pixel: Hsla) -> Result<()> {
        self.set(point, to_rgba(pixel))
    }

    /// The middle pixel, rounding down on even dimensions.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as isize, (self.height / 2) as isize)
    }

    /// Draws a uniformly distributed point inside the grid.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(0..self.width) as isize,
            rng.random_range(0..self.height) as isize,
        )
    }

    /// Reads the pixel at a uniformly distributed point.
    pub fn random_pixel<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        let point = self.random_point(rng);
        self.read(self.offset(point))
    }

    /// Byte offset of the first channel of `point`.
    fn index(&self, point: Point) -> Result<usize> {
        if !self.contains(point) {
            return Err(GridError::OutOfBounds {
                point,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.offset(point))
    }

    /// Byte offset of `point`, which must already be known to be in bounds.
    #[inline]
    pub(crate) fn offset(&self, point: Point) -> usize {
        point.y as usize * self.width * CHANNELS + point.x as usize * CHANNELS
    }

    #[inline]
    pub(crate) fn read(&self, index: usize) -> Rgba {
        let mut channels = [0; CHANNELS];
        channels.copy_from_slice(&self.buffer[index..index + CHANNELS]);
        Rgba::from(channels)
    }

    #[inline]
    pub(crate) fn write(&mut self, index: usize, pixel: Rgba) {
        self.buffer[index..index + CHANNELS].copy_from_slice(&pixel.to_array());
    }
}
