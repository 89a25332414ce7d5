//! Row-major traversal: visit, map and fold.
//!
//! Every traversal walks `y` from `0` to `height - 1` in the outer loop and
//! `x` from `0` to `width - 1` in the inner loop. The order is part of the
//! contract: callers seed stochastic algorithms from it.

use crate::{GridError, NormalizedPoint, PixelGrid, Point, Result, Rgba};
use core::iter::FusedIterator;

/// Row-major iterator over every point of a grid.
///
/// Created by [`PixelGrid::points()`].
#[derive(Debug, Clone)]
pub struct Points {
    width: usize,
    height: usize,
    next: usize,
}

impl Iterator for Points {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.next >= self.width * self.height {
            return None;
        }
        let point = Point::new(
            (self.next % self.width) as isize,
            (self.next / self.width) as isize,
        );
        self.next += 1;
        Some(point)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.width * self.height).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}

impl FusedIterator for Points {}

impl PixelGrid {
    /// Every point of the grid in row-major order.
    #[inline]
    pub fn points(&self) -> Points {
        Points {
            width: self.width(),
            height: self.height(),
            next: 0,
        }
    }

    /// Every `(point, pixel)` pair in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (Point, Rgba)> + '_ {
        self.points()
            .map(move |point| (point, self.read(self.offset(point))))
    }

    /// Calls `visitor(pixel, point, grid)` once per point, in row-major
    /// order.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(Rgba, Point, &PixelGrid),
    {
        for (point, pixel) in self.pixels() {
            visitor(pixel, point, self);
        }
    }

    /// Builds a new grid of the same shape from
    /// `transform(pixel, point, source)`.
    ///
    /// The source grid is never modified.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_grid::{PixelGrid, Point, Rgba};
    ///
    /// let grid = PixelGrid::new(4, 4).unwrap();
    /// let inverted = grid.map(|pixel, _, _| {
    ///     Rgba::new(255 - pixel.red, 255 - pixel.green, 255 - pixel.blue, 255)
    /// });
    ///
    /// assert_eq!(inverted.get(Point::new(3, 3)).unwrap(), Rgba::new(255, 255, 255, 255));
    /// assert_eq!(grid.get(Point::new(3, 3)).unwrap(), Rgba::TRANSPARENT);
    /// ```
    pub fn map<F>(&self, mut transform: F) -> PixelGrid
    where
        F: FnMut(Rgba, Point, &PixelGrid) -> Rgba,
    {
        let mut output = self.blank();
        self.for_each(|pixel, point, source| {
            let index = output.offset(point);
            output.write(index, transform(pixel, point, source));
        });
        output
    }

    /// Like [`map()`](Self::map) for callbacks that may fail to produce a
    /// pixel.
    ///
    /// Stops at the first `None` with [`GridError::MapperContractViolation`].
    pub fn try_map<F>(&self, mut transform: F) -> Result<PixelGrid>
    where
        F: FnMut(Rgba, Point, &PixelGrid) -> Option<Rgba>,
    {
        let mut output = self.blank();
        for (point, pixel) in self.pixels() {
            let mapped = transform(pixel, point, self)
                .ok_or(GridError::MapperContractViolation { point })?;
            let index = output.offset(point);
            output.write(index, mapped);
        }
        Ok(output)
    }

    /// Like [`map()`](Self::map), but the callback sees the point rescaled to
    /// `(x / width, y / height)`.
    ///
    /// The result is still written at the original integer point.
    pub fn normalized_map<F>(&self, mut transform: F) -> PixelGrid
    where
        F: FnMut(Rgba, NormalizedPoint, &PixelGrid) -> Rgba,
    {
        self.map(|pixel, point, source| {
            transform(pixel, source.normalize(point), source)
        })
    }

    /// Fallible form of [`normalized_map()`](Self::normalized_map).
    pub fn try_normalized_map<F>(&self, mut transform: F) -> Result<PixelGrid>
    where
        F: FnMut(Rgba, NormalizedPoint, &PixelGrid) -> Option<Rgba>,
    {
        self.try_map(|pixel, point, source| {
            transform(pixel, source.normalize(point), source)
        })
    }

    /// Left fold over every pixel in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_grid::{PixelGrid, Point, Rgba};
    ///
    /// let mut grid = PixelGrid::new(3, 3).unwrap();
    /// grid.set(Point::new(1, 1), Rgba::new(10, 0, 0, 255)).unwrap();
    ///
    /// let red: u32 = grid.reduce(0, |sum, pixel, _| sum + pixel.red as u32);
    /// assert_eq!(red, 10);
    /// ```
    pub fn reduce<T, F>(&self, initial: T, mut combine: F) -> T
    where
        F: FnMut(T, Rgba, Point) -> T,
    {
        self.pixels()
            .fold(initial, |total, (point, pixel)| combine(total, pixel, point))
    }

    /// [`reduce()`](Self::reduce) for accumulators that may be absent.
    ///
    /// Fails with [`GridError::MissingAccumulator`] when `initial` is `None`.
    pub fn reduce_with<T, F>(&self, initial: Option<T>, combine: F) -> Result<T>
    where
        F: FnMut(T, Rgba, Point) -> T,
    {
        let initial = initial.ok_or(GridError::MissingAccumulator)?;
        Ok(self.reduce(initial, combine))
    }

    #[inline]
    fn normalize(&self, point: Point) -> NormalizedPoint {
        NormalizedPoint::new(
            point.x as f64 / self.width() as f64,
            point.y as f64 / self.height() as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_row_major() {
        let grid = PixelGrid::new(3, 2).unwrap();
        let points: Vec<_> = grid.points().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
        assert_eq!(grid.points().len(), 6);
    }

    #[test]
    fn for_each_visits_every_point_once() {
        let grid = PixelGrid::new(4, 5).unwrap();
        let mut seen = Vec::new();
        grid.for_each(|pixel, point, source| {
            assert_eq!(pixel, source.get(point).unwrap());
            seen.push(point);
        });
        assert_eq!(seen.len(), 20);
        assert_eq!(seen, grid.points().collect::<Vec<_>>());
    }

    #[test]
    fn map_leaves_source_alone() {
        let mut grid = PixelGrid::new(3, 3).unwrap();
        grid.set(Point::new(2, 1), Rgba::new(9, 9, 9, 9)).unwrap();
        let before = grid.clone();

        let mapped = grid.map(|pixel, point, _| {
            Rgba::new(point.x as u8, point.y as u8, pixel.blue, 255)
        });

        assert_eq!(grid, before);
        assert_eq!(mapped.get(Point::new(2, 1)).unwrap(), Rgba::new(2, 1, 9, 255));
    }

    #[test]
    fn try_map_reports_first_missing_pixel() {
        let grid = PixelGrid::new(3, 3).unwrap();
        let result = grid.try_map(|pixel, point, _| (point.y < 1).then_some(pixel));
        assert_eq!(
            result,
            Err(GridError::MapperContractViolation {
                point: Point::new(0, 1)
            })
        );
        assert!(grid.try_map(|pixel, _, _| Some(pixel)).is_ok());
    }

    #[test]
    fn normalized_map_rescales_points() {
        let grid = PixelGrid::new(4, 2).unwrap();
        let mut seen = Vec::new();
        let mapped = grid.normalized_map(|_, point, _| {
            seen.push(point);
            Rgba::new((point.x * 100.0) as u8, (point.y * 100.0) as u8, 0, 255)
        });

        assert_eq!(seen[1], NormalizedPoint::new(0.25, 0.0));
        assert_eq!(seen[7], NormalizedPoint::new(0.75, 0.5));
        assert!(seen.iter().all(|p| p.x < 1.0 && p.y < 1.0));
        assert_eq!(mapped.get(Point::new(3, 1)).unwrap(), Rgba::new(75, 50, 0, 255));
    }

    #[test]
    fn try_normalized_map_propagates_violation() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let result = grid.try_normalized_map(|pixel, point, _| {
            (point.x < 0.5).then_some(pixel)
        });
        assert_eq!(
            result,
            Err(GridError::MapperContractViolation {
                point: Point::new(1, 0)
            })
        );
    }

    #[test]
    fn reduce_folds_in_order() {
        let grid = PixelGrid::new(2, 2).unwrap();
        let order = grid.reduce(Vec::new(), |mut total, _, point| {
            total.push((point.x, point.y));
            total
        });
        assert_eq!(order, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn reduce_with_requires_accumulator() {
        let grid = PixelGrid::new(2, 2).unwrap();
        assert_eq!(
            grid.reduce_with(None::<u32>, |total, _, _| total + 1),
            Err(GridError::MissingAccumulator)
        );
        assert_eq!(grid.reduce_with(Some(0), |total, _, _| total + 1), Ok(4));
    }
}
