use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use super::{
    config::{ConfigError, GameConfig},
    direction::Direction,
    food::Food,
    grid::Cell,
    snake::Snake,
    state::{GameOverReason, GameState, Phase},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not active, nothing changed
    Idle,
    /// The snake moved onto an empty cell
    Moved,
    /// The snake ate the food and will grow on its next move
    Ate { score: u32 },
    /// The game just ended
    GameOver { reason: GameOverReason, score: u32 },
}

/// The game engine that handles all game logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    food_variants: usize,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig, food_variants: usize) -> Result<Self, ConfigError> {
        Self::with_rng(config, food_variants, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, food_variants: usize, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            food_variants,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh game: centred snake heading right, score zero
    pub fn new_game(&mut self) -> Result<GameState, ConfigError> {
        let grid = self.config.grid();
        let snake = Snake::new(
            grid.center(),
            Direction::Right,
            self.config.initial_snake_length,
        );

        let food = Food::spawn(&mut self.rng, grid, snake.body(), self.food_variants)
            .ok_or(ConfigError::NoRoomForFood)?;

        Ok(GameState::new(grid, snake, food))
    }

    /// Execute one tick: move, check collisions, then check consumption
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Idle;
        }

        let head = state.snake.advance();

        if let Some(reason) = Self::check_collision(state, head) {
            return Self::end(state, reason);
        }

        if head != state.food.position {
            return TickOutcome::Moved;
        }

        state.snake.grow();
        state.score += 1;
        debug!(score = state.score, x = head.x, y = head.y, "food eaten");

        let placed = state.food.respawn(
            &mut self.rng,
            state.grid,
            state.snake.body(),
            self.food_variants,
        );
        if !placed {
            return Self::end(state, GameOverReason::BoardFilled);
        }

        TickOutcome::Ate { score: state.score }
    }

    /// Check if the freshly moved head causes a collision
    fn check_collision(state: &GameState, head: Cell) -> Option<GameOverReason> {
        if !state.grid.in_bounds(head) {
            return Some(GameOverReason::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(GameOverReason::SelfCollision);
        }

        None
    }

    fn end(state: &mut GameState, reason: GameOverReason) -> TickOutcome {
        state.phase = Phase::GameOver(reason);

        TickOutcome::GameOver {
            reason,
            score: state.score,
        }
    }
}
