//! Stochastic point-sampling dither.
//!
//! Each sample picks a random point, reads the pixel there from the source,
//! optionally darkens it and stamps it onto the von Neumann neighbors of that
//! point in the target. The sampled point itself is not written. Coverage is
//! probabilistic: a point may be hit any number of times, including never.

use crate::{GridError, PixelGrid, Point, Result, Rgba, VonNeumann};
use rand::Rng;

/// Configuration for [`PixelGrid::random_dither_from()`] and friends.
///
/// # Defaults
///
/// - Samples: 1000
/// - Darkening: 0 (the darkened branch only forces alpha to opaque)
/// - Darken probability: 0.5
///
/// # Example
///
/// ```
/// use pixel_grid::DitherOptions;
///
/// let options = DitherOptions::new().samples(250).darkening(16);
/// assert_eq!(options.samples, 250);
/// assert_eq!(options.darkening, 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DitherOptions {
    /// Number of random points to sample.
    ///
    /// Default: `1000`
    pub samples: usize,

    /// Amount subtracted from each color channel of a darkened sample.
    ///
    /// Default: `0`
    pub darkening: u8,

    /// Probability that a sample takes the darkened branch.
    ///
    /// Values outside `[0, 1]` behave like the nearest bound.
    ///
    /// Default: `0.5`
    pub darken_probability: f64,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            samples: 1000,
            darkening: 0,
            darken_probability: 0.5,
        }
    }
}

impl DitherOptions {
    /// Same as [`DitherOptions::default()`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    #[inline]
    pub fn darkening(mut self, darkening: u8) -> Self {
        self.darkening = darkening;
        self
    }

    #[inline]
    pub fn darken_probability(mut self, probability: f64) -> Self {
        self.darken_probability = probability;
        self
    }
}

impl PixelGrid {
    /// Dithers `source` onto this grid using the thread-local RNG.
    ///
    /// Fails with [`GridError::ShapeMismatch`] if the grids differ in size.
    pub fn random_dither_from(
        &mut self,
        source: &PixelGrid,
        options: &DitherOptions,
    ) -> Result<()> {
        self.random_dither_from_with_rng(source, options, &mut rand::rng())
    }

    /// Dithers `source` onto this grid, drawing randomness from `rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_grid::{DitherOptions, PixelGrid, Point, Rgba};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let source = PixelGrid::from_buffer(8, 8, vec![200; 8 * 8 * 4]).unwrap();
    /// let mut target = PixelGrid::new(8, 8).unwrap();
    /// let mut rng = SmallRng::seed_from_u64(7);
    ///
    /// target
    ///     .random_dither_from_with_rng(&source, &DitherOptions::new(), &mut rng)
    ///     .unwrap();
    ///
    /// assert!(target.pixels().any(|(_, pixel)| pixel != Rgba::TRANSPARENT));
    /// ```
    pub fn random_dither_from_with_rng<R: Rng + ?Sized>(
        &mut self,
        source: &PixelGrid,
        options: &DitherOptions,
        rng: &mut R,
    ) -> Result<()> {
        if source.shape() != self.shape() {
            return Err(GridError::ShapeMismatch {
                expected: self.shape(),
                actual: source.shape(),
            });
        }

        self.propagate(options, rng, |_, point| {
            source.read(source.offset(point))
        });
        Ok(())
    }

    /// Dithers this grid onto itself using the thread-local RNG.
    pub fn random_dither(&mut self, options: &DitherOptions) {
        self.random_dither_with_rng(options, &mut rand::rng());
    }

    /// Dithers this grid onto itself, drawing randomness from `rng`.
    ///
    /// Every sample reads the grid as left by the previous samples, so colors
    /// can creep across the grid over many samples.
    pub fn random_dither_with_rng<R: Rng + ?Sized>(
        &mut self,
        options: &DitherOptions,
        rng: &mut R,
    ) {
        self.propagate(options, rng, |grid, point| {
            grid.read(grid.offset(point))
        });
    }

    fn propagate<R, S>(
        &mut self,
        options: &DitherOptions,
        rng: &mut R,
        mut sample: S,
    ) where
        R: Rng + ?Sized,
        S: FnMut(&PixelGrid, Point) -> Rgba,
    {
        tracing::debug!(
            samples = options.samples,
            darkening = options.darkening,
            width = self.width(),
            height = self.height(),
            "random dither"
        );

        for _ in 0..options.samples {
            let point = self.random_point(rng);
            let mut pixel = sample(self, point);

            if rng.random::<f64>() < options.darken_probability {
                pixel = pixel.darken(options.darkening);
            }

            for neighbor in self.neighbors(point, &VonNeumann) {
                let index = self.offset(neighbor);
                self.write(index, pixel);
            }
        }
    }
}
