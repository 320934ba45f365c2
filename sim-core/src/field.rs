//! Coulomb field superposition over a fixed observation grid.

use rayon::prelude::*;

use crate::grid::Grid;

/// Coulomb constant, unitless here (the scenes only care about direction and
/// relative magnitude).
pub const COULOMB_K: f64 = 1.0;

/// Squared-distance floor for observation points that coincide with a charge.
/// Charges sweep continuously through the grid every frame, so an exact hit
/// is clamped to a small softening distance instead of producing inf/NaN.
pub const SOFTENING_SQ: f64 = 1e-6;

/// A point charge: scalar magnitude (sign matters) and a 2D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    pub q: f64,
    pub x: f64,
    pub y: f64,
}

impl Charge {
    pub const fn new(q: f64, x: f64, y: f64) -> Self {
        Self { q, x, y }
    }
}

/// Two charges of opposite sign, diametrically opposite on a circle of the
/// given radius at angle `t`.
pub fn orbiting_pair(q: f64, radius: f64, t: f64) -> [Charge; 2] {
    let x = radius * t.cos();
    let y = radius * t.sin();
    [Charge::new(q, x, y), Charge::new(-q, -x, -y)]
}

/// Field vector (Ex, Ey) at one observation point: each charge contributes
/// E = k q / r^2 directed radially away from it, contributions summed
/// component-wise. Always finite (see `SOFTENING_SQ`).
pub fn field_at(charges: &[Charge], px: f64, py: f64) -> (f64, f64) {
    let mut ex = 0.0;
    let mut ey = 0.0;
    for c in charges {
        let rx = px - c.x;
        let ry = py - c.y;
        let r_sq = (rx * rx + ry * ry).max(SOFTENING_SQ);
        let r = r_sq.sqrt();
        let e = COULOMB_K * c.q / r_sq;
        ex += e * rx / r;
        ey += e * ry / r;
    }
    (ex, ey)
}

/// Field vectors sampled at every point of a grid, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    width: usize,
    height: usize,
    vectors: Vec<(f64, f64)>,
}

impl FieldGrid {
    pub fn sample(charges: &[Charge], grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let mut vectors = vec![(0.0, 0.0); width * height];
        vectors
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(iy, row)| {
                for (ix, v) in row.iter_mut().enumerate() {
                    let (px, py) = grid.point(ix, iy);
                    *v = field_at(charges, px, py);
                }
            });
        Self {
            width,
            height,
            vectors,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn vector(&self, ix: usize, iy: usize) -> (f64, f64) {
        self.vectors[iy * self.width + ix]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Viewport;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_charge_inverse_square() {
        let charges = [Charge::new(1.0, 0.0, 0.0)];
        let (ex, ey) = field_at(&charges, 2.0, 0.0);
        // k q / r^2 = 1/4, pointing along +x
        assert!((ex - 0.25).abs() < EPS);
        assert!(ey.abs() < EPS);
    }

    #[test]
    fn test_dipole_sum_at_origin() {
        // +q at (2, 0) and -q at (-2, 0): both contributions at the origin
        // point along -x with magnitude 1/4, so the sum is (-1/2, 0).
        let charges = orbiting_pair(1.0, 2.0, 0.0);
        let (ex, ey) = field_at(&charges, 0.0, 0.0);
        assert!((ex + 0.5).abs() < EPS);
        assert!(ey.abs() < EPS);
    }

    #[test]
    fn test_equal_charges_cancel_at_midpoint() {
        // Two charges of the same sign, symmetric about the origin: their
        // contributions at the midpoint are equal and opposite.
        let charges = [Charge::new(1.0, 3.0, 0.0), Charge::new(1.0, -3.0, 0.0)];
        let (ex, ey) = field_at(&charges, 0.0, 0.0);
        assert!(ex.abs() < EPS);
        assert!(ey.abs() < EPS);
    }

    #[test]
    fn test_coincident_point_stays_finite() {
        let charges = [Charge::new(1.0, 0.5, -0.5)];
        let (ex, ey) = field_at(&charges, 0.5, -0.5);
        assert!(ex.is_finite());
        assert!(ey.is_finite());
    }

    #[test]
    fn test_orbiting_pair_is_diametrically_opposite() {
        let t = 1.234;
        let [a, b] = orbiting_pair(1.0, 2.0, t);
        assert!((a.x + b.x).abs() < EPS);
        assert!((a.y + b.y).abs() < EPS);
        assert_eq!(a.q, -b.q);
        assert!((a.x * a.x + a.y * a.y - 4.0).abs() < EPS);
    }

    #[test]
    fn test_grid_sampling_matches_pointwise() {
        let grid = Grid::new(8, 8, Viewport::new(-5.0, 5.0, -5.0, 5.0)).unwrap();
        let charges = orbiting_pair(1.0, 2.0, 0.7);
        let sampled = FieldGrid::sample(&charges, &grid);
        let (px, py) = grid.point(3, 6);
        assert_eq!(sampled.vector(3, 6), field_at(&charges, px, py));
    }
}
