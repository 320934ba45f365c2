//! Sampling of a polarized light wave passing through a filter.
//!
//! The wave propagates along z. Below the polarizer frame it is elliptically
//! polarized (both transverse components oscillate, phase-shifted by pi/3);
//! from that frame on, the filter kills the y component and the wave is
//! linearly polarized. The switch is one-way and driven purely by the frame
//! index.

use std::f64::consts::PI;

/// Number of z samples across one full period of the scene.
pub const WAVE_SAMPLES: usize = 200;

/// Angular frequency of the wave.
pub const OMEGA: f64 = 10.0;

/// Phase offset between the transverse components while elliptical.
pub const PHASE_OFFSET: f64 = PI / 3.0;

/// Frame index at which the polarizer takes effect.
pub const POLARIZER_FRAME: usize = 100;

/// Filter-plane opacity before and after the polarizer kicks in.
pub const PLANE_ALPHA_OFF: f32 = 0.05;
pub const PLANE_ALPHA_ON: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarization {
    Elliptical,
    Linear,
}

/// Polarization state for a frame index. One-way: every frame at or past
/// `POLARIZER_FRAME` is linear.
pub fn polarization_at(frame: usize) -> Polarization {
    if frame < POLARIZER_FRAME {
        Polarization::Elliptical
    } else {
        Polarization::Linear
    }
}

/// One point on the wave's trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Wave trajectory plus scene parameters for one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveFrame {
    pub samples: Vec<WaveSample>,
    pub polarization: Polarization,
    pub filter_alpha: f32,
}

/// Build the trajectory for a frame: the first `frame` samples of the z range
/// [0, 2pi], so the wave grows out of the origin as the animation advances.
pub fn wave_frame(frame: usize) -> WaveFrame {
    let polarization = polarization_at(frame);
    let step = 2.0 * PI / (WAVE_SAMPLES - 1) as f64;
    let count = frame.min(WAVE_SAMPLES);
    let samples = (0..count)
        .map(|i| {
            let z = i as f64 * step;
            let x = (OMEGA * z).sin();
            let y = match polarization {
                Polarization::Elliptical => (OMEGA * z + PHASE_OFFSET).sin(),
                Polarization::Linear => 0.0,
            };
            WaveSample { x, y, z }
        })
        .collect();
    let filter_alpha = match polarization {
        Polarization::Elliptical => PLANE_ALPHA_OFF,
        Polarization::Linear => PLANE_ALPHA_ON,
    };
    WaveFrame {
        samples,
        polarization,
        filter_alpha,
    }
}
