//! Frame loop
//!
//! [`Game`] owns one session plus its held-key state. A host calls
//! [`Game::frame`] once per repaint and forwards key events to
//! [`Game::handle_key`]; the game asks the host's [`FrameScheduler`] for the
//! next frame at the end of every call.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::{InputState, KeyEvent};
use crate::renderer::{DrawSurface, Palette, draw_overlay, draw_scene};
use crate::sim::{GamePhase, GameState, TickInput, TickOutcome, tick};

/// Host hook that arranges for the next frame to run
pub trait FrameScheduler {
    fn request_next_frame(&mut self);
}

/// A running game session
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub palette: Palette,
    /// Frames drawn, including frozen ones
    pub frames: u64,
}

impl Game {
    /// Validate the config and build a game in the Waiting phase
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "Playfield {}x{}, {}x{} blocks",
            config.playfield_width,
            config.playfield_height,
            config.rows,
            config.cols
        );
        Ok(Self {
            state: GameState::new(config),
            input: InputState::default(),
            palette: Palette::default(),
            frames: 0,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Update held keys; a press also starts or restarts the game
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.input.apply(event);

        if let KeyEvent::Pressed(_) = event {
            let result = match self.state.phase {
                GamePhase::Waiting => self.state.start(),
                GamePhase::GameOver | GamePhase::Clear => self.state.restart(),
                GamePhase::Playing => Ok(()),
            };
            if let Err(e) = result {
                log::warn!("Key press ignored: {}", e);
            }
        }
    }

    /// Advance the simulation one step using the current held keys
    pub fn advance(&mut self) -> TickOutcome {
        let input = self.input.to_tick_input();
        tick(&mut self.state, &input)
    }

    /// Run one full frame: redraw, overlay or tick, then schedule the next frame
    pub fn frame(
        &mut self,
        surface: &mut impl DrawSurface,
        scheduler: &mut impl FrameScheduler,
    ) -> TickOutcome {
        self.frames += 1;
        draw_scene(&self.state, &self.palette, surface);

        let outcome = if self.state.phase.is_active() {
            self.advance()
        } else {
            draw_overlay(self.state.phase, &self.state.config, &self.palette, surface);
            TickOutcome::Frozen(self.state.phase)
        };

        scheduler.request_next_frame();
        outcome
    }
}

/// Steer the paddle toward the ball's x position
///
/// Used for demo runs: holds whichever key moves the paddle center toward
/// the ball, and nothing once within half a step.
pub fn autopilot_input(state: &GameState) -> TickInput {
    let paddle = &state.paddle;
    let center = paddle.x + paddle.width / 2.0;
    let offset = state.ball.pos.x - center;
    let dead_zone = paddle.speed / 2.0;
    TickInput {
        left: offset < -dead_zone,
        right: offset > dead_zone,
    }
}
