use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use super::canvas::Canvas;
use super::overlay;
use crate::assets::FoodSprites;
use crate::game::{Cell, GameConfig, GameState, Palette, Rgb};
use crate::lifecycle::GameOverOverlay;

/// Pixel position of the score text baseline
pub const SCORE_ORIGIN: (u32, u32) = (10, 30);

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single draw call against the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: PixelRect, color: Rgb },
    StrokeRect { rect: PixelRect, color: Rgb },
    Line { from: (u32, u32), to: (u32, u32), color: Rgb },
    /// Food sprite `variant` scaled into `rect`
    Image { variant: usize, rect: PixelRect },
    Text { text: String, x: u32, y: u32, color: Rgb },
}

/// One frame worth of draw calls, in paint order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub commands: Vec<DrawCommand>,
}

pub struct Renderer {
    cell_size: u32,
    palette: Palette,
    show_grid: bool,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size.max(1),
            palette: config.palette.clone(),
            show_grid: true,
        }
    }

    /// Skip the cosmetic grid lines
    pub fn without_grid(mut self) -> Self {
        self.show_grid = false;
        self
    }

    /// Project the game state onto draw calls. Nothing carries over between frames.
    pub fn scene(&self, state: &GameState) -> Scene {
        let size = self.cell_size;
        let width = size.saturating_mul(state.grid.width);
        let height = size.saturating_mul(state.grid.height);
        let mut commands = Vec::with_capacity(state.snake.len() * 2 + 64);

        commands.push(DrawCommand::FillRect {
            rect: PixelRect::new(0, 0, width, height),
            color: self.palette.background,
        });

        if self.show_grid {
            for x in (0..=width).step_by(size as usize) {
                commands.push(DrawCommand::Line {
                    from: (x, 0),
                    to: (x, height),
                    color: self.palette.grid,
                });
            }
            for y in (0..=height).step_by(size as usize) {
                commands.push(DrawCommand::Line {
                    from: (0, y),
                    to: (width, y),
                    color: self.palette.grid,
                });
            }
        }

        commands.push(DrawCommand::Image {
            variant: state.food.variant,
            rect: self.cell_rect(state.food.position),
        });

        // A head that just left the grid has nowhere to be drawn
        for segment in state.snake.body().iter().filter(|c| state.grid.in_bounds(**c)) {
            let rect = self.cell_rect(*segment);
            commands.push(DrawCommand::FillRect {
                rect,
                color: self.palette.snake,
            });
            commands.push(DrawCommand::StrokeRect {
                rect,
                color: self.palette.outline,
            });
        }

        commands.push(DrawCommand::Text {
            text: format!("Score: {}", state.score),
            x: SCORE_ORIGIN.0,
            y: SCORE_ORIGIN.1,
            color: self.palette.text,
        });

        Scene {
            width,
            height,
            cell_size: size,
            commands,
        }
    }

    /// Lay out and draw a whole terminal frame
    pub fn draw(
        &self,
        frame: &mut Frame,
        state: &GameState,
        sprites: &FoodSprites,
        game_over: &GameOverOverlay,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let scene = self.scene(state);
        let canvas = Canvas::new(&scene, sprites);
        let (cols, rows) = canvas.size();

        let board = centered(chunks[0], cols.saturating_add(2), rows.saturating_add(2));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snack ");
        let inner = block.inner(board);
        frame.render_widget(block, board);
        frame.render_widget(canvas, inner);

        if game_over.is_visible() {
            let popup = centered(board, 34, 7);
            frame.render_widget(Clear, popup);
            frame.render_widget(overlay::game_over(game_over.final_score()), popup);
        }

        frame.render_widget(overlay::controls(), chunks[1]);
    }

    fn cell_rect(&self, cell: Cell) -> PixelRect {
        let x = (cell.x.max(0) as u32).saturating_mul(self.cell_size);
        let y = (cell.y.max(0) as u32).saturating_mul(self.cell_size);
        PixelRect::new(x, y, self.cell_size, self.cell_size)
    }
}

/// Rect of at most `width` x `height` centred in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Food, Grid, Snake};

    fn state() -> GameState {
        let mut state = GameState::new(
            Grid::new(20, 15),
            Snake::from_body(vec![Cell::new(5, 5), Cell::new(4, 5)], Direction::Right).unwrap(),
            Food {
                position: Cell::new(2, 3),
                variant: 3,
            },
        );
        state.score = 7;
        state
    }

    #[test]
    fn test_scene_size() {
        let scene = Renderer::new(&GameConfig::default()).scene(&state());
        assert_eq!((scene.width, scene.height), (800, 600));
        assert_eq!(scene.cell_size, 40);
    }

    #[test]
    fn test_oversized_grid_saturates() {
        let state = GameState::new(
            Grid::new(200_000_000, 2),
            Snake::from_body(vec![Cell::new(199_999_999, 1)], Direction::Right).unwrap(),
            Food {
                position: Cell::new(0, 0),
                variant: 0,
            },
        );

        let scene = Renderer::new(&GameConfig::default()).without_grid().scene(&state);

        assert_eq!((scene.width, scene.height), (u32::MAX, 80));
        assert!(scene.commands.iter().any(|c| matches!(
            c,
            DrawCommand::FillRect { rect, .. } if rect.x == u32::MAX
        )));
    }

    #[test]
    fn test_draw_order() {
        let scene = Renderer::new(&GameConfig::default()).scene(&state());
        let commands = &scene.commands;

        assert!(matches!(
            commands.first(),
            Some(DrawCommand::FillRect { rect, .. }) if *rect == PixelRect::new(0, 0, 800, 600)
        ));

        let first_image = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Image { .. }))
            .unwrap();
        let last_line = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Line { .. }))
            .unwrap();
        let first_stroke = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .unwrap();

        assert!(last_line < first_image);
        assert!(first_image < first_stroke);
        assert!(matches!(commands.last(), Some(DrawCommand::Text { .. })));
    }

    #[test]
    fn test_grid_lines_cover_both_edges() {
        let scene = Renderer::new(&GameConfig::default()).scene(&state());
        let lines = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();

        // 21 vertical + 16 horizontal
        assert_eq!(lines, 37);

        let plain = Renderer::new(&GameConfig::default())
            .without_grid()
            .scene(&state());
        assert!(!plain
            .commands
            .iter()
            .any(|c| matches!(c, DrawCommand::Line { .. })));
    }

    #[test]
    fn test_food_and_snake_geometry() {
        let palette = Palette::default();
        let scene = Renderer::new(&GameConfig::default()).scene(&state());

        assert!(scene.commands.contains(&DrawCommand::Image {
            variant: 3,
            rect: PixelRect::new(80, 120, 40, 40),
        }));
        assert!(scene.commands.contains(&DrawCommand::FillRect {
            rect: PixelRect::new(200, 200, 40, 40),
            color: palette.snake,
        }));
        assert!(scene.commands.contains(&DrawCommand::StrokeRect {
            rect: PixelRect::new(160, 200, 40, 40),
            color: palette.outline,
        }));
    }

    #[test]
    fn test_score_text() {
        let scene = Renderer::new(&GameConfig::default()).scene(&state());

        assert_eq!(
            scene.commands.last(),
            Some(&DrawCommand::Text {
                text: "Score: 7".to_string(),
                x: 10,
                y: 30,
                color: Rgb(255, 255, 255),
            })
        );
    }

    #[test]
    fn test_off_grid_head_is_skipped() {
        let mut state = state();
        state.snake = Snake::from_body(vec![Cell::new(-1, 5), Cell::new(0, 5)], Direction::Left).unwrap();
        let scene = Renderer::new(&GameConfig::default()).scene(&state);

        let segments = scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRect { .. }))
            .count();
        assert_eq!(segments, 1);
    }

    #[test]
    fn test_scene_is_pure() {
        let renderer = Renderer::new(&GameConfig::default());
        let state = state();
        assert_eq!(renderer.scene(&state), renderer.scene(&state));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(centered(area, 40, 20), area);
    }
}
