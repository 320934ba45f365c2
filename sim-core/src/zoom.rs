//! Geometric zoom trajectories for the animated renderer.

use crate::error::CoreError;
use crate::grid::Viewport;

/// Side length of the view box at zoom factor 1.0.
pub const BASE_EXTENT: f64 = 3.0;

/// A zoom that grows geometrically from `zoom_start` to `zoom_end` across a
/// fixed number of frames, always centered on the same point. Geometric
/// growth makes the zoom feel even on a log scale instead of stalling at the
/// deep end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTrajectory {
    center: (f64, f64),
    zoom_start: f64,
    zoom_end: f64,
    frames: u32,
}

impl ZoomTrajectory {
    pub fn new(
        center: (f64, f64),
        zoom_start: f64,
        zoom_end: f64,
        frames: u32,
    ) -> Result<Self, CoreError> {
        if frames < 2 {
            return Err(CoreError::TooFewFrames(frames));
        }
        if zoom_start <= 0.0 || zoom_end <= 0.0 {
            return Err(CoreError::NonPositiveZoom {
                start: zoom_start,
                end: zoom_end,
            });
        }
        Ok(Self {
            center,
            zoom_start,
            zoom_end,
            frames,
        })
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Zoom factor at a frame index in [0, frames). Frame 0 is exactly
    /// `zoom_start`, the last frame exactly `zoom_end`.
    pub fn zoom_at(&self, frame: u32) -> f64 {
        debug_assert!(frame < self.frames);
        let t = frame as f64 / (self.frames - 1) as f64;
        self.zoom_start * (self.zoom_end / self.zoom_start).powf(t)
    }

    /// View box for a frame: `BASE_EXTENT / zoom` on a side, centered on the
    /// trajectory's center.
    pub fn viewport_at(&self, frame: u32) -> Viewport {
        let extent = BASE_EXTENT / self.zoom_at(frame);
        Viewport::centered(self.center.0, self.center.1, extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        let traj = ZoomTrajectory::new((-1.05, 0.25), 1.0, 50_000.0, 30).unwrap();
        assert_eq!(traj.zoom_at(0), 1.0);
        assert_eq!(traj.zoom_at(29), 50_000.0);
    }

    #[test]
    fn test_zoom_strictly_increases() {
        let traj = ZoomTrajectory::new((0.0, 0.0), 1.0, 1000.0, 20).unwrap();
        let mut prev = traj.zoom_at(0);
        for frame in 1..20 {
            let z = traj.zoom_at(frame);
            assert!(z > prev, "zoom must grow monotonically, frame {frame}");
            prev = z;
        }
    }

    #[test]
    fn test_viewport_shrinks_around_center() {
        let traj = ZoomTrajectory::new((-1.0, 0.5), 1.0, 100.0, 10).unwrap();
        let first = traj.viewport_at(0);
        let last = traj.viewport_at(9);
        assert_eq!(first.width(), BASE_EXTENT);
        assert!((last.width() - BASE_EXTENT / 100.0).abs() < 1e-12);
        // both boxes share the center
        assert!((first.x_min + first.x_max - last.x_min - last.x_max).abs() < 1e-12);
    }

    #[test]
    fn test_too_few_frames_rejected() {
        assert_eq!(
            ZoomTrajectory::new((0.0, 0.0), 1.0, 10.0, 1).unwrap_err(),
            CoreError::TooFewFrames(1)
        );
    }

    #[test]
    fn test_non_positive_zoom_rejected() {
        assert!(matches!(
            ZoomTrajectory::new((0.0, 0.0), 0.0, 10.0, 5).unwrap_err(),
            CoreError::NonPositiveZoom { .. }
        ));
    }
}
