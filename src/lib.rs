//! Snack - a single-screen grid snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module), free of I/O
//! - Game lifecycle: tick scheduling, game over, restart (lifecycle module)
//! - Scene projection and the terminal surface (render module)
//! - Keyboard mapping (input module)
//! - Collaborators: food sprite loading (assets) and background music (audio)
//! - The interactive terminal mode (modes module)

pub mod assets;
pub mod audio;
pub mod game;
pub mod input;
pub mod lifecycle;
pub mod modes;
pub mod render;
