use thiserror::Error;

/// Precondition violations surfaced by the core types.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("iteration budget must be at least 1")]
    ZeroIterationBudget,

    #[error("zoom animation needs at least 2 frames, got {0}")]
    TooFewFrames(u32),

    #[error("zoom factors must be positive (start {start}, end {end})")]
    NonPositiveZoom { start: f64, end: f64 },

    #[error("grid dimensions must be nonzero ({width}x{height})")]
    EmptyGrid { width: usize, height: usize },
}
