//! Color mapping for the renderers.

use std::f64::consts::PI;

use crate::escape::Escape;

/// Precomputed gradient keyed by escape iteration. Bounded cells (the set
/// interior) map to black.
#[derive(Debug, Clone)]
pub struct Palette {
    gradient: Vec<[u8; 3]>,
}

impl Palette {
    /// One gradient entry per possible escape index in [0, max_iter).
    pub fn new(max_iter: u32) -> Self {
        let entries = max_iter.max(1) as usize;
        let gradient = (0..entries)
            .map(|i| {
                let t = if entries > 1 {
                    i as f64 / (entries - 1) as f64
                } else {
                    0.0
                };
                hsv_to_rgb(360.0 * t, 0.9, (0.4 + 0.6 * t).min(0.9))
            })
            .collect();
        Self { gradient }
    }

    pub fn color(&self, cell: Escape) -> [u8; 3] {
        match cell {
            Escape::Bounded => [0, 0, 0],
            Escape::Escaped(i) => {
                let idx = (i as usize).min(self.gradient.len() - 1);
                self.gradient[idx]
            }
        }
    }
}

/// Hue wheel for a direction angle in radians; the angle is wrapped into
/// [0, 2pi) and spread over the full 360 degrees of hue.
pub fn angle_color(angle: f64) -> [u8; 3] {
    let wrapped = angle.rem_euclid(2.0 * PI);
    hsv_to_rgb(wrapped / (2.0 * PI) * 360.0, 1.0, 1.0)
}

pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [u8; 3] {
    let c = v * s;
    let h_prime = (h / 60.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
        (c, x, 0.0)
    } else if (1.0..2.0).contains(&h_prime) {
        (x, c, 0.0)
    } else if (2.0..3.0).contains(&h_prime) {
        (0.0, c, x)
    } else if (3.0..4.0).contains(&h_prime) {
        (0.0, x, c)
    } else if (4.0..5.0).contains(&h_prime) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = v - c;
    [
        ((r1 + m) * 255.0) as u8,
        ((g1 + m) * 255.0) as u8,
        ((b1 + m) * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_is_black() {
        let palette = Palette::new(200);
        assert_eq!(palette.color(Escape::Bounded), [0, 0, 0]);
    }

    #[test]
    fn test_escaped_indices_stay_in_gradient() {
        let palette = Palette::new(16);
        // indices at and past max_iter clamp to the last entry
        assert_eq!(palette.color(Escape::Escaped(15)), palette.color(Escape::Escaped(99)));
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), [0, 0, 255]);
    }

    #[test]
    fn test_angle_color_wraps() {
        assert_eq!(angle_color(0.5), angle_color(0.5 + 2.0 * PI));
    }
}
