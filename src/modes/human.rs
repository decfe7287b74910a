use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tracing::{debug, info};

use crate::assets::FoodSprites;
use crate::audio::BackgroundMusic;
use crate::game::{GameConfig, GameEngine};
use crate::input::InputHandler;
use crate::lifecycle::Controller;
use crate::render::Renderer;

/// Keyboard play in the terminal
pub struct HumanMode {
    controller: Controller,
    renderer: Renderer,
    input_handler: InputHandler,
    sprites: FoodSprites,
    music: BackgroundMusic,
}

impl HumanMode {
    pub fn new(config: GameConfig, sprites: FoodSprites, music: BackgroundMusic) -> Result<Self> {
        let renderer = Renderer::new(&config);
        let engine = GameEngine::new(config, sprites.len()).context("Invalid game configuration")?;
        let controller = Controller::new(engine).context("Failed to start the first game")?;

        Ok(Self {
            controller,
            renderer,
            input_handler: InputHandler::new(),
            sprites,
            music,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.music.start();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => break,
                    }
                }

                // Game tick, only scheduled while the game is active
                _ = self.controller.next_tick() => {
                    let outcome = self.controller.on_tick();
                    debug!(?outcome, "tick");
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }

            if self.controller.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Returns true when the frame must be redrawn
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                self.music.rearm();
                let action = self.input_handler.handle_key_event(key);
                self.controller.handle(action)
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.draw(
                    frame,
                    self.controller.state(),
                    &self.sprites,
                    self.controller.overlay(),
                );
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
