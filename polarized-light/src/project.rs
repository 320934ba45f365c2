//! Fixed orthographic 3D -> 2D projection for the wave scene.
//!
//! World axes: x and y are the transverse wave components, z is the
//! propagation axis and points up on screen. The camera direction is fixed
//! (no interaction), so the projection is just two constant rotations and a
//! scale.

/// Camera azimuth around the z axis, radians.
const AZIMUTH: f64 = -0.9;
/// Camera elevation above the x/y plane, radians.
const ELEVATION: f64 = 0.45;

/// World units per pixel scale factors for the transverse and propagation
/// axes (the z range [0, 2pi] is much longer than the +-1.5 transverse span).
const TRANSVERSE_SCALE: f64 = 110.0;
const AXIAL_SCALE: f64 = 64.0;

pub struct Projector {
    canvas: u32,
    sin_az: f64,
    cos_az: f64,
    sin_el: f64,
    cos_el: f64,
}

impl Projector {
    pub fn new(canvas: u32) -> Self {
        Self {
            canvas,
            sin_az: AZIMUTH.sin(),
            cos_az: AZIMUTH.cos(),
            sin_el: ELEVATION.sin(),
            cos_el: ELEVATION.cos(),
        }
    }

    /// Project a world point to canvas pixel coordinates.
    pub fn project(&self, x: f64, y: f64, z: f64) -> (i32, i32) {
        // rotate around the propagation axis, then tilt toward the camera
        let u = x * self.cos_az - y * self.sin_az;
        let depth = x * self.sin_az + y * self.cos_az;
        let v = z * self.cos_el - depth * self.sin_el * 1.2;

        let cx = self.canvas as f64 * 0.5;
        let cy = self.canvas as f64 * 0.82;
        let sx = cx + u * TRANSVERSE_SCALE;
        let sy = cy - v * AXIAL_SCALE;
        (sx.round() as i32, sy.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_origin_projects_near_canvas_bottom_center() {
        let p = Projector::new(600);
        let (sx, sy) = p.project(0.0, 0.0, 0.0);
        assert_eq!(sx, 300);
        assert!(sy > 400, "z = 0 should sit low on screen, got {sy}");
    }

    #[test]
    fn test_propagation_axis_goes_up_screen() {
        let p = Projector::new(600);
        let (_, y0) = p.project(0.0, 0.0, 0.0);
        let (_, y1) = p.project(0.0, 0.0, 2.0 * PI);
        assert!(y1 < y0, "larger z must project higher on screen");
    }
}
