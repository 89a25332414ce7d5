//! Fixed-size sub-grid extraction with sentinel padding.

use crate::{GridError, PixelGrid, Point, Result, Rgba};

impl PixelGrid {
    /// Copies the `width × height` region centered on `center` into a new
    /// grid.
    ///
    /// Both sizes must be odd so the window has a unique center cell.
    /// Cells whose source point falls outside this grid are filled with
    /// [`Rgba::SENTINEL`], so filters can run right up to the border without
    /// special-casing it. The source grid is left untouched.
    ///
    /// Fails with [`GridError::InvalidWindowSize`] for an even size and
    /// [`GridError::InvalidDimensions`] if the window cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_grid::{PixelGrid, Point, Rgba};
    ///
    /// let grid = PixelGrid::new(10, 10).unwrap();
    /// let window = grid.window(Point::new(0, 0), 3, 3).unwrap();
    ///
    /// assert_eq!(window.shape(), (3, 3));
    /// assert_eq!(window.get(Point::new(0, 0)).unwrap(), Rgba::SENTINEL);
    /// assert_eq!(window.get(Point::new(1, 1)).unwrap(), Rgba::TRANSPARENT);
    /// assert!(grid.window(Point::new(0, 0), 4, 3).is_err());
    /// ```
    pub fn window(
        &self,
        center: Point,
        width: usize,
        height: usize,
    ) -> Result<PixelGrid> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(GridError::InvalidWindowSize { width, height });
        }

        tracing::trace!(%center, width, height, "extracting window");

        let x_radius = ((width - 1) / 2) as isize;
        let y_radius = ((height - 1) / 2) as isize;
        let mut window = PixelGrid::new(width, height)?;

        for dy in -y_radius..=y_radius {
            for dx in -x_radius..=x_radius {
                let pixel = match center.checked_add(Point::new(dx, dy)) {
                    Some(source) if self.contains(source) => {
                        self.read(self.offset(source))
                    }
                    _ => Rgba::SENTINEL,
                };
                let local = Point::new(dx + x_radius, dy + y_radius);
                let index = window.offset(local);
                window.write(index, pixel);
            }
        }

        Ok(window)
    }
}
