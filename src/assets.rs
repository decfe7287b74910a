//! Food sprite loading
//!
//! Every sprite is a small JSON file:
//!
//! ```json
//! { "name": "hamburger", "glyph": "🍔", "color": [200, 120, 40] }
//! ```
//!
//! All files are read concurrently and the whole set either loads or fails.

use futures::future::try_join_all;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::game::Rgb;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("no food sprites configured")]
    Empty,
    #[error("failed to read sprite {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed sprite {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite {path} has an empty glyph")]
    EmptyGlyph { path: PathBuf },
}

/// One food appearance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FoodSprite {
    pub name: String,
    /// Text drawn in the food cell, at most two columns wide
    pub glyph: String,
    pub color: Rgb,
}

/// Loaded food sprites, addressable by variant index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodSprites {
    sprites: Vec<FoodSprite>,
}

impl FoodSprites {
    pub fn new(sprites: Vec<FoodSprite>) -> Result<Self, AssetError> {
        if sprites.is_empty() {
            return Err(AssetError::Empty);
        }
        Ok(Self { sprites })
    }

    pub fn get(&self, variant: usize) -> Option<&FoodSprite> {
        self.sprites.get(variant)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Load every sprite in `paths`, keeping their order as variant indices
pub async fn load_food_sprites(paths: &[PathBuf]) -> Result<FoodSprites, AssetError> {
    let sprites = try_join_all(paths.iter().map(|path| load_sprite(path))).await?;
    FoodSprites::new(sprites)
}

async fn load_sprite(path: &Path) -> Result<FoodSprite, AssetError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let sprite: FoodSprite = serde_json::from_str(&raw).map_err(|source| AssetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if sprite.glyph.trim().is_empty() {
        return Err(AssetError::EmptyGlyph {
            path: path.to_path_buf(),
        });
    }

    Ok(sprite)
}
