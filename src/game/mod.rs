//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Randomness is injected through the engine so every rule can be tested deterministically.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, MAX_GRID_SIDE, MIN_GRID_SIDE, Palette, Rgb};
pub use direction::{Direction, InvalidDirection};
pub use engine::{GameEngine, TickOutcome};
pub use food::Food;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GameOverReason, GameState, Phase};
