use super::food::Food;
use super::grid::Grid;
use super::snake::Snake;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
    /// No free cell was left for the next food
    BoardFilled,
}

/// Phase of the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver(GameOverReason),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a fresh, active game state
    pub fn new(grid: Grid, snake: Snake, food: Food) -> Self {
        Self {
            grid,
            snake,
            food,
            score: 0,
            phase: Phase::Active,
        }
    }

    /// True while ticks should be processed
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            Phase::Active => None,
            Phase::GameOver(reason) => Some(reason),
        }
    }
}
