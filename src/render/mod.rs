//! Drawing: pure scene projection plus the terminal surface it is painted on

pub mod canvas;
pub mod overlay;
pub mod renderer;

pub use canvas::Canvas;
pub use renderer::{DrawCommand, PixelRect, Renderer, Scene};
