use thiserror::Error;

use crate::core::data::cubic_grid::CubicGridError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbulbError {
    #[error("invalid sampling grid: {0}")]
    Grid(#[from] CubicGridError),
    #[error("power must be finite, got {power}")]
    NonFinitePower { power: f64 },
    #[error("divergence threshold must be a number")]
    NanThreshold,
}
