//! Escape-time iteration for the Mandelbrot set.
//!
//! Shared by the static renderer and the zoom animation. Each grid point c
//! iterates z <- z^2 + c from z = 0 and records the step at which |z| first
//! exceeds the escape radius, or that it stayed bounded for the whole budget.
//! The two outcomes are distinct values; `Escaped(0)` is not conflated with
//! "never escaped".

use rayon::prelude::*;

use crate::error::CoreError;
use crate::grid::Grid;

/// Magnitude beyond which an orbit is considered to have left the set.
pub const ESCAPE_RADIUS: f64 = 2.0;

const ESCAPE_RADIUS_SQ: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

/// Outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// The orbit left the escape radius on this 0-based iteration step.
    Escaped(u32),
    /// The orbit stayed within the radius for the whole iteration budget.
    Bounded,
}

impl Escape {
    pub fn is_bounded(&self) -> bool {
        matches!(self, Escape::Bounded)
    }
}

/// Iteration budget, checked at construction (a budget of 0 would classify
/// every point as bounded without iterating).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeParams {
    max_iter: u32,
}

impl EscapeParams {
    pub fn new(max_iter: u32) -> Result<Self, CoreError> {
        if max_iter == 0 {
            return Err(CoreError::ZeroIterationBudget);
        }
        Ok(Self { max_iter })
    }

    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }
}

/// Iterate a single point of the complex plane.
pub fn escape_time(cx: f64, cy: f64, max_iter: u32) -> Escape {
    let mut zx = 0.0f64;
    let mut zy = 0.0f64;
    for i in 0..max_iter {
        // (zx + i zy)^2 + c
        let xtemp = zx * zx - zy * zy + cx;
        zy = 2.0 * zx * zy + cy;
        zx = xtemp;
        if zx * zx + zy * zy > ESCAPE_RADIUS_SQ {
            return Escape::Escaped(i);
        }
    }
    Escape::Bounded
}

/// Escape outcomes for every point of a grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    width: usize,
    height: usize,
    cells: Vec<Escape>,
}

impl EscapeField {
    /// Run the escape-time iteration over the whole grid. Rows are computed
    /// in parallel; the result is deterministic for identical inputs.
    pub fn compute(grid: &Grid, params: EscapeParams) -> Self {
        let width = grid.width();
        let height = grid.height();
        let max_iter = params.max_iter();
        let mut cells = vec![Escape::Bounded; width * height];
        cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(iy, row)| {
                for (ix, cell) in row.iter_mut().enumerate() {
                    let (cx, cy) = grid.point(ix, iy);
                    *cell = escape_time(cx, cy, max_iter);
                }
            });
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, ix: usize, iy: usize) -> Escape {
        self.cells[iy * self.width + ix]
    }

    /// Row-major cell slice, one entry per grid point.
    pub fn cells(&self) -> &[Escape] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Viewport;

    #[test]
    fn test_origin_never_escapes() {
        // z stays at 0 forever for c = 0
        assert_eq!(escape_time(0.0, 0.0, 10_000), Escape::Bounded);
    }

    #[test]
    fn test_point_outside_radius_escapes_immediately() {
        // |c| > 2, so |z_1| = |c| > 2 after the first update
        assert_eq!(escape_time(3.0, 0.0, 100), Escape::Escaped(0));
        assert_eq!(escape_time(0.0, -2.5, 100), Escape::Escaped(0));
    }

    #[test]
    fn test_escape_index_below_budget_for_outside_points() {
        let grid = Grid::new(5, 5, Viewport::new(2.1, 4.0, 2.1, 4.0)).unwrap();
        let field = EscapeField::compute(&grid, EscapeParams::new(50).unwrap());
        for cell in field.cells() {
            match cell {
                Escape::Escaped(i) => assert!(*i < 50),
                Escape::Bounded => panic!("point with |c| > 2 must escape"),
            }
        }
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert_eq!(
            EscapeParams::new(0).unwrap_err(),
            CoreError::ZeroIterationBudget
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let grid = Grid::new(33, 17, Viewport::new(-2.0, 1.0, -1.5, 1.5)).unwrap();
        let params = EscapeParams::new(64).unwrap();
        let a = EscapeField::compute(&grid, params);
        let b = EscapeField::compute(&grid, params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_three_by_three_scenario() {
        // 3x3 over [-2,1]x[-1.5,1.5]: the corner nearest (1, 1.5) escapes
        // within the first few iterations, the point nearest 0 stays bounded.
        let grid = Grid::new(3, 3, Viewport::new(-2.0, 1.0, -1.5, 1.5)).unwrap();
        let field = EscapeField::compute(&grid, EscapeParams::new(10).unwrap());
        match field.get(2, 2) {
            Escape::Escaped(i) => assert!(i < 3, "corner escaped at {i}"),
            Escape::Bounded => panic!("corner (1, 1.5) must escape"),
        }
        // center column, middle row: c = (-0.5, 0.0), inside the cardioid
        assert_eq!(field.get(1, 1), Escape::Bounded);
    }

    #[test]
    fn test_single_point_grid() {
        let grid = Grid::new(1, 1, Viewport::new(0.0, 0.0, 0.0, 0.0)).unwrap();
        let field = EscapeField::compute(&grid, EscapeParams::new(5).unwrap());
        assert_eq!(field.get(0, 0), Escape::Bounded);
    }
}
