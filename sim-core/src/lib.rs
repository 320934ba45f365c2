//! Shared math for the visualization binaries.
//!
//! Everything here is pure computation: complex-plane grids, the Mandelbrot
//! escape-time iteration, zoom trajectories, Coulomb field superposition and
//! polarized-wave sampling. Windowing and drawing live in the binaries.

pub mod error;
pub mod escape;
pub mod field;
pub mod grid;
pub mod palette;
pub mod wave;
pub mod zoom;

pub use error::CoreError;
pub use escape::{Escape, EscapeField, EscapeParams};
pub use field::{Charge, FieldGrid};
pub use grid::{Grid, Viewport};
pub use palette::Palette;
pub use wave::{Polarization, WaveFrame, WaveSample};
pub use zoom::ZoomTrajectory;

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
