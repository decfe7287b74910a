//! Game lifecycle: start, tick scheduling, game over and restart

pub mod controller;
pub mod scheduler;

pub use controller::{Controller, GameOverOverlay};
pub use scheduler::TickScheduler;
