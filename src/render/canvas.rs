//! Terminal drawing surface
//!
//! Rasterizes a [`Scene`] into a ratatui buffer. One grid cell becomes two
//! terminal columns by one row, which keeps cells roughly square.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::renderer::{DrawCommand, PixelRect, Scene};
use crate::assets::FoodSprites;
use crate::game::Rgb;

/// Terminal columns per grid cell
pub const COLUMNS_PER_CELL: u32 = 2;

const GRID_SYMBOL: &str = "·";

pub struct Canvas<'a> {
    scene: &'a Scene,
    sprites: &'a FoodSprites,
}

impl<'a> Canvas<'a> {
    pub fn new(scene: &'a Scene, sprites: &'a FoodSprites) -> Self {
        Self { scene, sprites }
    }

    /// Columns and rows needed to show the whole scene
    pub fn size(&self) -> (u16, u16) {
        (
            clamp_u16(self.col(self.scene.width)),
            clamp_u16(self.row(self.scene.height)),
        )
    }

    fn col(&self, px: u32) -> u32 {
        px * COLUMNS_PER_CELL / self.scene.cell_size.max(1)
    }

    fn row(&self, py: u32) -> u32 {
        py / self.scene.cell_size.max(1)
    }

    /// Terminal column and row spans covered by a pixel rectangle
    fn span(&self, rect: PixelRect) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
        (
            self.col(rect.x)..self.col(rect.x + rect.width),
            self.row(rect.y)..self.row(rect.y + rect.height),
        )
    }
}

impl Widget for Canvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = Surface { area, buf };

        for command in &self.scene.commands {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    let (cols, rows) = self.span(*rect);
                    for row in rows {
                        for col in cols.clone() {
                            if let Some(cell) = surface.cell(col, row) {
                                cell.set_symbol(" ").set_bg(rgb(*color));
                            }
                        }
                    }
                }
                DrawCommand::StrokeRect { rect, color } => {
                    let (cols, rows) = self.span(*rect);
                    if cols.is_empty() {
                        continue;
                    }
                    let (left, right) = (cols.start, cols.end - 1);
                    for row in rows {
                        if left == right {
                            if let Some(cell) = surface.cell(left, row) {
                                cell.set_symbol("□").set_fg(rgb(*color));
                            }
                            continue;
                        }
                        if let Some(cell) = surface.cell(left, row) {
                            cell.set_symbol("[").set_fg(rgb(*color));
                        }
                        if let Some(cell) = surface.cell(right, row) {
                            cell.set_symbol("]").set_fg(rgb(*color));
                        }
                    }
                }
                DrawCommand::Line { from, to, color } => {
                    // Rows have no gap between them, so only vertical rules show up
                    if from.0 != to.0 {
                        continue;
                    }
                    let col = self.col(from.0);
                    let (top, bottom) = (from.1.min(to.1), from.1.max(to.1));
                    for row in self.row(top)..self.row(bottom) {
                        if let Some(cell) = surface.cell(col, row) {
                            cell.set_symbol(GRID_SYMBOL).set_fg(rgb(*color));
                        }
                    }
                }
                DrawCommand::Image { variant, rect } => {
                    let Some(sprite) = self.sprites.get(*variant) else {
                        continue;
                    };
                    let (cols, rows) = self.span(*rect);
                    let style = Style::default().fg(rgb(sprite.color));
                    surface.text(cols.start, rows.start, &sprite.glyph, cols.len(), style);
                }
                DrawCommand::Text { text, x, y, color } => {
                    let style = Style::default().fg(rgb(*color));
                    surface.text(self.col(*x), self.row(*y), text, usize::MAX, style);
                }
            }
        }
    }
}

/// Clipped view of the target buffer
struct Surface<'b> {
    area: Rect,
    buf: &'b mut Buffer,
}

impl Surface<'_> {
    fn cell(&mut self, col: u32, row: u32) -> Option<&mut ratatui::buffer::Cell> {
        if col >= self.area.width as u32 || row >= self.area.height as u32 {
            return None;
        }
        self.buf
            .cell_mut((self.area.x + col as u16, self.area.y + row as u16))
    }

    fn text(&mut self, col: u32, row: u32, text: &str, max_width: usize, style: Style) {
        if col >= self.area.width as u32 || row >= self.area.height as u32 {
            return;
        }
        let room = (self.area.width as u32 - col) as usize;
        self.buf.set_stringn(
            self.area.x + col as u16,
            self.area.y + row as u16,
            text,
            max_width.min(room),
            style,
        );
    }
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn clamp_u16(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FoodSprite;
    use crate::game::{Cell, Direction, Food, GameConfig, GameState, Grid, Snake};
    use crate::render::Renderer;

    fn sprites() -> FoodSprites {
        FoodSprites::new(vec![FoodSprite {
            name: "apple".to_string(),
            glyph: "()".to_string(),
            color: Rgb(0, 255, 0),
        }])
        .unwrap()
    }

    fn rasterize(state: &GameState, config: &GameConfig) -> Buffer {
        let scene = Renderer::new(config).scene(state);
        let sprites = sprites();
        let canvas = Canvas::new(&scene, &sprites);
        let (cols, rows) = canvas.size();
        let area = Rect::new(0, 0, cols, rows);
        let mut buf = Buffer::empty(area);
        canvas.render(area, &mut buf);
        buf
    }

    fn state() -> GameState {
        GameState::new(
            Grid::new(6, 4),
            Snake::from_body(vec![Cell::new(3, 2), Cell::new(2, 2)], Direction::Right).unwrap(),
            Food {
                position: Cell::new(5, 3),
                variant: 0,
            },
        )
    }

    fn symbol(buf: &Buffer, x: u16, y: u16) -> &str {
        buf.cell((x, y)).unwrap().symbol()
    }

    #[test]
    fn test_canvas_size() {
        let config = GameConfig::new(6, 4);
        let scene = Renderer::new(&config).scene(&state());
        let sprites = sprites();
        assert_eq!(Canvas::new(&scene, &sprites).size(), (12, 4));
    }

    #[test]
    fn test_snake_segments_are_outlined() {
        let config = GameConfig::new(6, 4);
        let buf = rasterize(&state(), &config);

        assert_eq!(symbol(&buf, 6, 2), "[");
        assert_eq!(symbol(&buf, 7, 2), "]");
        assert_eq!(symbol(&buf, 4, 2), "[");
        assert_eq!(buf.cell((6, 2)).unwrap().bg, rgb(config.palette.snake));
        assert_eq!(buf.cell((6, 2)).unwrap().fg, rgb(config.palette.outline));
    }

    #[test]
    fn test_food_uses_sprite() {
        let config = GameConfig::new(6, 4);
        let buf = rasterize(&state(), &config);

        assert_eq!(symbol(&buf, 10, 3), "(");
        assert_eq!(symbol(&buf, 11, 3), ")");
        assert_eq!(buf.cell((10, 3)).unwrap().fg, Color::Rgb(0, 255, 0));
        assert_eq!(buf.cell((10, 3)).unwrap().bg, rgb(config.palette.background));
    }

    #[test]
    fn test_grid_and_background() {
        let config = GameConfig::new(6, 4);
        let buf = rasterize(&state(), &config);

        // Left column of an empty cell carries the grid rule
        assert_eq!(symbol(&buf, 2, 1), GRID_SYMBOL);
        assert_eq!(symbol(&buf, 3, 1), " ");
        assert_eq!(buf.cell((3, 1)).unwrap().bg, rgb(config.palette.background));
    }

    #[test]
    fn test_score_overlays_first_row() {
        let config = GameConfig::new(6, 4);
        let mut state = state();
        state.score = 4;
        let buf = rasterize(&state, &config);

        let row: String = (0..8).map(|x| symbol(&buf, x, 0).to_string()).collect();
        assert_eq!(row, "Score: 4");
    }

    #[test]
    fn test_small_area_clips() {
        let config = GameConfig::new(6, 4);
        let scene = Renderer::new(&config).scene(&state());
        let sprites = sprites();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);

        Canvas::new(&scene, &sprites).render(area, &mut buf);
        assert_eq!(buf.area, area);
    }
}
