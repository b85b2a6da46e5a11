//! Core of a proximity-steered snake game for small monochrome panels.
//!
//! The model (grid, snake, food) is driven one tick at a time by
//! [`session::GameSession`]. Hardware stays behind two seams: a
//! [`sensor::DistanceSensor`] that produces turn events and a
//! [`render::Present`] draw target that receives cell-sized drawing calls.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod direction;
pub mod food;
pub mod grid;
pub mod render;
pub mod sensor;
pub mod session;
pub mod snake;
mod utils;

pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use food::place_food;
pub use grid::{Cell, Grid, Occupancy};
pub use render::{CellRenderer, Present, Renderer};
pub use sensor::{DistanceSensor, ProximityTrigger, TurnInput, median_cm};
pub use session::{GameSession, GameState, TickOutcome};
pub use snake::{AdvanceResult, Snake};
