use core::fmt;

use crate::grid::{Cell, Grid};

const MAX_CELLS_PER_AXIS: u16 = i16::MAX as u16;

/// Compile-time game settings.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub grid: Grid,
    /// Where the snake appears at start and after every revival.
    pub spawn: Cell,
    /// Game updates per second, higher is harder.
    pub tick_hz: u32,
    /// A reading below this many centimetres is a turn event.
    pub turn_threshold_cm: f32,
    /// Readings beyond this are treated as sensor faults.
    pub max_range_cm: f32,
}

impl GameConfig {
    /// 128x32 SSD1306 panel with 4 pixel cells.
    pub const OLED_128X32: Self = Self::with_grid(Grid::new(32, 8, 4));

    /// Default timing and sensor settings on `grid`, spawning at
    /// `(width / 2, height / 2 + 1)`.
    pub const fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            spawn: Cell::new((grid.width() / 2) as i16, (grid.height() / 2 + 1) as i16),
            tick_hz: 2,
            turn_threshold_cm: 10.0,
            max_range_cm: 400.0,
        }
    }

    pub const fn with_spawn(mut self, spawn: Cell) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn tick_period_ms(&self) -> u64 {
        1000 / self.tick_hz.max(1) as u64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.cell_count() == 0 || self.grid.cell_size() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        // cells are addressed with i16 coordinates
        if self.grid.width() > MAX_CELLS_PER_AXIS || self.grid.height() > MAX_CELLS_PER_AXIS {
            return Err(ConfigError::GridTooLarge);
        }
        if !self.grid.is_in_bounds(self.spawn) {
            return Err(ConfigError::SpawnOutOfBounds(self.spawn));
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if !(self.turn_threshold_cm > 0.0 && self.turn_threshold_cm <= self.max_range_cm) {
            return Err(ConfigError::InvalidThreshold);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::OLED_128X32
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    EmptyGrid,
    /// A side is longer than a cell coordinate can address.
    GridTooLarge,
    SpawnOutOfBounds(Cell),
    ZeroTickRate,
    InvalidThreshold,
    /// Snake storage holds fewer segments than the grid has cells.
    CapacityTooSmall { capacity: usize, cells: usize },
    FoodOnSnake(Cell),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid has no cells"),
            ConfigError::GridTooLarge => {
                write!(f, "grid sides are limited to {MAX_CELLS_PER_AXIS} cells")
            }
            ConfigError::SpawnOutOfBounds(cell) => {
                write!(f, "spawn ({}, {}) lies outside the grid", cell.x, cell.y)
            }
            ConfigError::ZeroTickRate => write!(f, "tick rate must be at least 1 Hz"),
            ConfigError::InvalidThreshold => {
                write!(f, "turn threshold must be positive and within sensor range")
            }
            ConfigError::CapacityTooSmall { capacity, cells } => write!(
                f,
                "snake capacity {capacity} is smaller than the {cells} cells of the grid"
            ),
            ConfigError::FoodOnSnake(cell) => {
                write!(f, "food at ({}, {}) overlaps the snake", cell.x, cell.y)
            }
        }
    }
}

impl core::error::Error for ConfigError {}
