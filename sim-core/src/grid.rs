//! Rectangular sample grids over a region of the plane.

use crate::error::CoreError;

/// Bounds of a view rectangle in the plane (or the complex plane, with x as
/// the real axis and y as the imaginary axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Square viewport of the given side length centered on (cx, cy).
    pub fn centered(cx: f64, cy: f64, extent: f64) -> Self {
        let half = extent * 0.5;
        Self::new(cx - half, cx + half, cy - half, cy + half)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// A fixed lattice of sample points covering a viewport. Immutable once
/// constructed; animations build a fresh grid per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    viewport: Viewport,
}

impl Grid {
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Result<Self, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            viewport,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Plane coordinates of the sample at pixel indices (ix, iy).
    ///
    /// Samples are spread endpoint-inclusive across the bounds, so the first
    /// and last rows/columns land exactly on the viewport edges. An axis with
    /// a single sample degenerates to its lower bound.
    pub fn point(&self, ix: usize, iy: usize) -> (f64, f64) {
        let x = if self.width > 1 {
            self.viewport.x_min + self.viewport.width() * ix as f64 / (self.width - 1) as f64
        } else {
            self.viewport.x_min
        };
        let y = if self.height > 1 {
            self.viewport.y_min + self.viewport.height() * iy as f64 / (self.height - 1) as f64
        } else {
            self.viewport.y_min
        };
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_land_on_bounds() {
        let grid = Grid::new(4, 3, Viewport::new(-2.0, 1.0, -1.5, 1.5)).unwrap();
        assert_eq!(grid.point(0, 0), (-2.0, -1.5));
        assert_eq!(grid.point(3, 2), (1.0, 1.5));
    }

    #[test]
    fn test_single_point_grid_is_valid() {
        let grid = Grid::new(1, 1, Viewport::new(-2.0, 1.0, -1.5, 1.5)).unwrap();
        assert_eq!(grid.point(0, 0), (-2.0, -1.5));
    }

    #[test]
    fn test_empty_grid_rejected() {
        let err = Grid::new(0, 5, Viewport::new(0.0, 1.0, 0.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            CoreError::EmptyGrid {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_centered_viewport() {
        let view = Viewport::centered(-0.75, 0.25, 3.0);
        assert_eq!(view.x_min, -2.25);
        assert_eq!(view.x_max, 0.75);
        assert_eq!(view.width(), 3.0);
        assert_eq!(view.height(), 3.0);
    }
}
