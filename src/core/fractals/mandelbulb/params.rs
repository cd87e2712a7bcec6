use crate::core::data::cubic_grid::CubicGrid;
use crate::core::fractals::mandelbulb::errors::MandelbulbError;

pub const DEFAULT_GRID_SIZE: u32 = 201;
pub const DEFAULT_ITERATION_COUNT: u32 = 3;
pub const DEFAULT_POWER: f64 = 8.0;
/// `1000^30`.
pub const DEFAULT_DIVERGENCE_THRESHOLD: f64 = 1.0e90;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbulbParams {
    grid: CubicGrid,
    iteration_count: u32,
    power: f64,
    divergence_threshold: f64,
}

impl Default for MandelbulbParams {
    fn default() -> Self {
        Self {
            grid: CubicGrid::new(DEFAULT_GRID_SIZE).expect("default grid size is valid"),
            iteration_count: DEFAULT_ITERATION_COUNT,
            power: DEFAULT_POWER,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
        }
    }
}

impl MandelbulbParams {
    pub fn new(
        grid_size: u32,
        iteration_count: u32,
        power: f64,
        divergence_threshold: f64,
    ) -> Result<Self, MandelbulbError> {
        let grid = CubicGrid::new(grid_size)?;

        if !power.is_finite() {
            return Err(MandelbulbError::NonFinitePower { power });
        }

        if divergence_threshold.is_nan() {
            return Err(MandelbulbError::NanThreshold);
        }

        Ok(Self {
            grid,
            iteration_count,
            power,
            divergence_threshold,
        })
    }

    pub fn display_name(&self) -> &str {
        "Mandelbulb"
    }

    pub fn grid(&self) -> CubicGrid {
        self.grid
    }

    pub fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    pub fn iteration_count(&self) -> u32 {
        self.iteration_count
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn divergence_threshold(&self) -> f64 {
        self.divergence_threshold
    }
}
