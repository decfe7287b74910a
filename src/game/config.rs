use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::grid::Grid;

/// Smallest grid side that leaves room for a snake and a food
pub const MIN_GRID_SIDE: u32 = 2;
/// Largest grid side accepted
pub const MAX_GRID_SIDE: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid {width}x{height} is outside {MIN_GRID_SIDE}..={MAX_GRID_SIDE} cells per side")]
    GridSize { width: u32, height: u32 },
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("drawing surface of {width}x{height} cells at {cell_size}px does not fit in u32")]
    SurfaceTooLarge {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("tick rate must be at least one per second")]
    ZeroTickRate,
    #[error("initial snake of {length} cells does not fit left of the centre of a {width}-wide grid")]
    SnakeLength { length: usize, width: u32 },
    #[error("no free cell left for the first food")]
    NoRoomForFood,
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub grid: Rgb,
    pub text: Rgb,
    /// Border drawn around each snake segment
    pub outline: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(218, 41, 28),
            snake: Rgb(255, 199, 44),
            grid: Rgb(60, 65, 72),
            text: Rgb(255, 255, 255),
            outline: Rgb(0, 0, 0),
        }
    }
}

/// Food sprites shipped with the game, in variant order
pub const DEFAULT_FOOD_ASSETS: [&str; 4] = [
    "foods/ice-cream.json",
    "foods/potato-cake.json",
    "foods/hamburger.json",
    "foods/chips.json",
];

/// Looping background track, relative to the assets directory
pub const DEFAULT_MUSIC: &str = "sounds/background.ogg";

/// Configuration for the game, fixed for the length of a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: u32,
    /// Height of the game grid in cells
    pub grid_height: u32,
    /// Edge of one cell in surface pixels
    pub cell_size: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Length of the snake at game start
    pub initial_snake_length: usize,
    pub palette: Palette,
    /// Food sprite files, one per visual variant
    pub food_assets: Vec<PathBuf>,
    /// Background music track
    pub music: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_assets_dir("assets")
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Default configuration resolving assets under `dir`
    pub fn with_assets_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            grid_width: 20,
            grid_height: 15,
            cell_size: 40,
            tick_rate: 5,
            initial_snake_length: 1,
            palette: Palette::default(),
            food_assets: DEFAULT_FOOD_ASSETS.iter().map(|p| dir.join(p)).collect(),
            music: dir.join(DEFAULT_MUSIC),
        }
    }

    /// Check that a game can be built and drawn from this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.grid_width, self.grid_height);
        let side = MIN_GRID_SIDE..=MAX_GRID_SIDE;
        if !side.contains(&width) || !side.contains(&height) {
            return Err(ConfigError::GridSize { width, height });
        }

        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.cell_size.checked_mul(width).is_none() || self.cell_size.checked_mul(height).is_none() {
            return Err(ConfigError::SurfaceTooLarge {
                width,
                height,
                cell_size: self.cell_size,
            });
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        // The snake starts at the centre and trails towards the left wall
        let room = (width / 2) as usize + 1;
        if self.initial_snake_length == 0 || self.initial_snake_length > room {
            return Err(ConfigError::SnakeLength {
                length: self.initial_snake_length,
                width,
            });
        }

        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    /// Delay between two ticks
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Drawing surface size in pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.cell_size.saturating_mul(self.grid_width),
            self.cell_size.saturating_mul(self.grid_height),
        )
    }
}
