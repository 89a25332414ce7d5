//! Von Neumann and Moore neighborhoods.
//!
//! A neighborhood is a fixed, ordered set of offsets around the origin.
//! Neighbor queries add each offset to a point and keep the results that
//! fall inside the grid, in declaration order.

use crate::{PixelGrid, Point, Rgba};
use enum_dispatch::enum_dispatch;

/// The four orthogonal offsets: left, right, up, down.
pub const VON_NEUMANN_OFFSETS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// The eight orthogonal and diagonal offsets, column by column.
pub const MOORE_OFFSETS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// A fixed set of offsets relative to a point.
///
/// Offsets must be distinct and must not include the origin.
#[enum_dispatch]
pub trait Neighborhood {
    fn offsets(&self) -> &[Point];
}

/// 4-connected neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VonNeumann;

impl Neighborhood for VonNeumann {
    #[inline(always)]
    fn offsets(&self) -> &[Point] {
        &VON_NEUMANN_OFFSETS
    }
}

/// 8-connected neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Moore;

impl Neighborhood for Moore {
    #[inline(always)]
    fn offsets(&self) -> &[Point] {
        &MOORE_OFFSETS
    }
}

/// Runtime selection between the built-in neighborhoods.
///
/// # Example
///
/// ```rust
/// use pixel_grid::{Neighborhood, NeighborhoodKind, VonNeumann};
///
/// let kind = NeighborhoodKind::VonNeumann(VonNeumann);
/// assert_eq!(kind.offsets().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[enum_dispatch(Neighborhood)]
pub enum NeighborhoodKind {
    /// Orthogonal neighbors only.
    VonNeumann(VonNeumann),
    /// Orthogonal and diagonal neighbors.
    Moore(Moore),
}

impl PixelGrid {
    /// Points of `neighborhood` around `point` that lie inside the grid, in
    /// offset order.
    ///
    /// `point` itself need not be inside the grid.
    pub fn neighbors<N>(&self, point: Point, neighborhood: &N) -> Vec<Point>
    where
        N: Neighborhood + ?Sized,
    {
        neighborhood
            .offsets()
            .iter()
            .filter_map(|&offset| point.checked_add(offset))
            .filter(|&neighbor| self.contains(neighbor))
            .collect()
    }

    /// Pixels at [`neighbors()`](Self::neighbors), in the same order.
    pub fn neighboring_pixels<N>(
        &self,
        point: Point,
        neighborhood: &N,
    ) -> Vec<Rgba>
    where
        N: Neighborhood + ?Sized,
    {
        self.neighbors(point, neighborhood)
            .into_iter()
            .map(|neighbor| self.read(self.offset(neighbor)))
            .collect()
    }

    /// Up to 4 orthogonally adjacent points.
    pub fn von_neumann_neighboring_points(&self, point: Point) -> Vec<Point> {
        self.neighbors(point, &VonNeumann)
    }

    /// Pixels of the up to 4 orthogonally adjacent points.
    pub fn von_neumann_neighboring_pixels(&self, point: Point) -> Vec<Rgba> {
        self.neighboring_pixels(point, &VonNeumann)
    }

    /// Up to 8 orthogonally or diagonally adjacent points.
    pub fn moore_neighboring_points(&self, point: Point) -> Vec<Point> {
        self.neighbors(point, &Moore)
    }

    /// Pixels of the up to 8 orthogonally or diagonally adjacent points.
    pub fn moore_neighboring_pixels(&self, point: Point) -> Vec<Rgba> {
        self.neighboring_pixels(point, &Moore)
    }
}
