//! Filter-style use of windows and folds, the way image-filter demos drive
//! the grid.

use pixel_grid::*;

struct Kernel {
    weights: Vec<Vec<f32>>,
}

impl Kernel {
    fn width(&self) -> usize {
        self.weights[0].len()
    }

    fn height(&self) -> usize {
        self.weights.len()
    }

    fn apply(&self, window: &PixelGrid) -> Rgba {
        assert_eq!(window.shape(), (self.width(), self.height()));

        let (red, green, blue) =
            window.reduce((0.0f32, 0.0f32, 0.0f32), |sum, pixel, point| {
                let weight = self.weights[point.y as usize][point.x as usize];
                (
                    sum.0 + pixel.red as f32 * weight,
                    sum.1 + pixel.green as f32 * weight,
                    sum.2 + pixel.blue as f32 * weight,
                )
            });

        Rgba::from_clamped(
            red.round() as i32,
            green.round() as i32,
            blue.round() as i32,
            255,
        )
    }

    fn filter(&self, grid: &PixelGrid) -> Result<PixelGrid> {
        grid.try_map(|_, point, source| {
            let window = source.window(point, self.width(), self.height()).ok()?;
            Some(self.apply(&window))
        })
    }
}

fn checkerboard(width: usize, height: usize) -> PixelGrid {
    PixelGrid::new(width, height).unwrap().map(|_, point, _| {
        if (point.x + point.y) % 2 == 0 {
            Rgba::new(200, 100, 50, 255)
        } else {
            Rgba::new(0, 0, 0, 255)
        }
    })
}

#[test]
fn identity_kernel_preserves_opaque_image() {
    let kernel = Kernel {
        weights: vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ],
    };
    let grid = checkerboard(6, 5);
    assert_eq!(kernel.filter(&grid).unwrap(), grid);
}

#[test]
fn box_blur_averages_interior_and_darkens_border() {
    let kernel = Kernel {
        weights: vec![vec![1.0 / 9.0; 3]; 3],
    };
    let grid = PixelGrid::new(5, 5).unwrap().map(|_, _, _| Rgba::new(90, 90, 90, 255));
    let blurred = kernel.filter(&grid).unwrap();

    assert_eq!(
        blurred.get(Point::new(2, 2)).unwrap(),
        Rgba::new(90, 90, 90, 255)
    );
    // Five of the nine corner-window cells are sentinel black.
    assert_eq!(blurred.get(Point::ORIGIN).unwrap(), Rgba::new(40, 40, 40, 255));
    // Three of the nine edge-window cells are sentinel black.
    assert_eq!(
        blurred.get(Point::new(2, 0)).unwrap(),
        Rgba::new(60, 60, 60, 255)
    );
}

#[test]
fn even_kernel_is_a_mapper_violation() {
    let kernel = Kernel {
        weights: vec![vec![0.25; 2]; 2],
    };
    assert_eq!(
        kernel.filter(&checkerboard(3, 3)),
        Err(GridError::MapperContractViolation {
            point: Point::ORIGIN
        })
    );
}

#[test]
fn sharpen_clamps_channels() {
    let kernel = Kernel {
        weights: vec![
            vec![0.0, -1.0, 0.0],
            vec![-1.0, 5.0, -1.0],
            vec![0.0, -1.0, 0.0],
        ],
    };
    let sharpened = kernel.filter(&checkerboard(5, 5)).unwrap();

    // Bright cell surrounded by black: 5 * 200 overflows and clamps.
    assert_eq!(
        sharpened.get(Point::new(2, 2)).unwrap(),
        Rgba::new(255, 255, 250, 255)
    );
    // Black cell surrounded by bright: negative sum clamps to zero.
    assert_eq!(
        sharpened.get(Point::new(1, 2)).unwrap(),
        Rgba::new(0, 0, 0, 255)
    );
}
