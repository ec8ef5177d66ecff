#![no_std]

extern crate alloc;

use serde::Serialize;

pub use engine::*;
pub use error::*;
pub use grid::*;
pub use gravity::*;
pub use matching::*;
pub use render::*;
pub use score::*;
pub use selection::SelectOutcome;
pub use shape::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod gravity;
mod grid;
mod matching;
mod render;
mod score;
pub mod selection;
mod shape;
mod snapshot;
mod types;

/// Board size and tick loop timing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GameConfig {
    size: Coord2,
    step: f64,
    threshold: f64,
    min_group_size: usize,
}

impl GameConfig {
    /// Phase timer increment per tick.
    pub const DEFAULT_STEP: f64 = 1.0 / 60.0;
    /// Phase timer value at which the current phase runs.
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        Ok(Self {
            size,
            ..Self::default()
        })
    }

    /// Overrides the tick timing; both values must be positive and finite.
    pub fn with_timing(self, step: f64, threshold: f64) -> Result<Self> {
        let valid = |value: f64| value.is_finite() && value > 0.0;
        if !valid(step) || !valid(threshold) {
            return Err(GameError::InvalidTiming);
        }
        Ok(Self {
            step,
            threshold,
            ..self
        })
    }

    pub fn with_min_group_size(self, min_group_size: usize) -> Result<Self> {
        if min_group_size == 0 {
            return Err(GameError::InvalidGroupSize);
        }
        Ok(Self {
            min_group_size,
            ..self
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn step(&self) -> f64 {
        self.step
    }

    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    pub const fn min_group_size(&self) -> usize {
        self.min_group_size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: (8, 8),
            step: Self::DEFAULT_STEP,
            threshold: Self::DEFAULT_THRESHOLD,
            min_group_size: MIN_GROUP_SIZE,
        }
    }
}
