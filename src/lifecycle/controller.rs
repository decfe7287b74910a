use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info, warn};

use super::scheduler::TickScheduler;
use crate::game::{ConfigError, GameEngine, GameState, TickOutcome};
use crate::input::KeyAction;

/// Visibility of the game-over presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOverOverlay {
    visible: bool,
    final_score: u32,
}

impl GameOverOverlay {
    pub fn show(&mut self, final_score: u32) {
        self.visible = true;
        self.final_score = final_score;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn final_score(&self) -> u32 {
        self.final_score
    }
}

/// Owns one game and drives it: ticks, key commands, start and restart
pub struct Controller<R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    scheduler: TickScheduler,
    overlay: GameOverOverlay,
    should_quit: bool,
}

impl<R: Rng> Controller<R> {
    /// Build the first game and start ticking
    pub fn new(mut engine: GameEngine<R>) -> Result<Self, ConfigError> {
        let state = engine.new_game()?;
        let mut scheduler = TickScheduler::new(engine.config().tick_period());
        scheduler.start();

        info!(
            width = state.grid.width,
            height = state.grid.height,
            "game started"
        );

        Ok(Self {
            engine,
            state,
            scheduler,
            overlay: GameOverOverlay::default(),
            should_quit: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn overlay(&self) -> &GameOverOverlay {
        &self.overlay
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Wait until the next tick is due
    pub async fn next_tick(&mut self) {
        self.scheduler.tick().await
    }

    /// Run one tick; entering game over stops the scheduler and shows the overlay
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick(&mut self.state);

        if let TickOutcome::GameOver { reason, score } = outcome {
            self.scheduler.stop();
            self.overlay.show(score);
            info!(?reason, score, "game over");
        }

        outcome
    }

    /// Apply a key command. Returns true when the screen needs a redraw.
    pub fn handle(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Steer(direction) => {
                // Takes effect on the next tick, nothing to redraw yet
                if self.state.is_running() && !self.state.snake.set_direction(direction) {
                    debug!(?direction, "reversal rejected");
                }
                false
            }
            KeyAction::Restart => {
                if self.state.is_running() {
                    return false;
                }
                self.restart()
            }
            KeyAction::Dismiss => {
                if self.state.is_running() || !self.overlay.is_visible() {
                    return false;
                }
                self.overlay.hide();
                true
            }
            KeyAction::Quit => {
                self.should_quit = true;
                false
            }
            KeyAction::None => false,
        }
    }

    fn restart(&mut self) -> bool {
        match self.engine.new_game() {
            Ok(state) => {
                self.state = state;
                self.overlay.hide();
                self.scheduler.start();
                info!("game restarted");
                true
            }
            Err(err) => {
                warn!(error = %err, "restart failed, staying on the game-over screen");
                false
            }
        }
    }
}
