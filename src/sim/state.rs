//! Game state and core simulation types
//!
//! Everything a session needs lives in [`GameState`]; there is no global
//! state, so independent sessions can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::BlockGrid;
use crate::config::GameConfig;
use crate::error::PhaseError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scene frozen until the first key press
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
    /// Ball fell past the paddle
    GameOver,
    /// Every block destroyed
    Clear,
}

impl GamePhase {
    /// Whether physics runs in this phase
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether a key press restarts the game from this phase
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::GameOver | Self::Clear)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Where the ball would be after one more tick at its current velocity
    #[inline]
    pub fn next_pos(&self) -> Vec2 {
        self.pos + self.vel
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed for the lifetime of the game)
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
}

impl Paddle {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            x: config.paddle_start_x(),
            top: config.paddle_top(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether an x coordinate lies over the paddle (edges inclusive)
    #[inline]
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x <= self.right()
    }

    /// Apply one tick of held-key movement, staying inside `[0, playfield_width - width]`
    ///
    /// Both directions held apply both deltas, which cancel out.
    pub fn steer(&mut self, left: bool, right: bool, playfield_width: f32) {
        if right && self.right() < playfield_width {
            self.x += self.speed;
        }
        if left && self.x > 0.0 {
            self.x -= self.speed;
        }
        self.x = self.x.clamp(0.0, playfield_width - self.width);
    }
}

/// Complete state of one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Blocks destroyed this game
    pub score: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BlockGrid,
    /// Ticks simulated in the current round
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh state in the Waiting phase. The config is expected to be validated.
    pub fn new(config: GameConfig) -> Self {
        let ball = Ball::new(
            config.ball_start(),
            config.ball_start_velocity(),
            config.ball_radius,
        );
        let paddle = Paddle::from_config(&config);
        let grid = BlockGrid::new(config.grid_layout());
        Self {
            config,
            phase: GamePhase::Waiting,
            score: 0,
            ball,
            paddle,
            grid,
            time_ticks: 0,
        }
    }

    /// Total blocks in the grid
    pub fn block_count(&self) -> u32 {
        self.config.block_count()
    }

    /// Waiting -> Playing
    pub fn start(&mut self) -> Result<(), PhaseError> {
        self.expect_phase("start", |p| p == GamePhase::Waiting)?;
        self.phase = GamePhase::Playing;
        log::info!("Game started");
        Ok(())
    }

    /// GameOver | Clear -> Playing, with a full reset of ball, paddle, grid and score
    pub fn restart(&mut self) -> Result<(), PhaseError> {
        self.expect_phase("restart", |p| p.is_finished())?;
        self.reset_round();
        self.phase = GamePhase::Playing;
        log::info!("Game restarted");
        Ok(())
    }

    /// Playing -> Clear
    pub fn finish_clear(&mut self) -> Result<(), PhaseError> {
        self.expect_phase("clear", |p| p == GamePhase::Playing)?;
        self.phase = GamePhase::Clear;
        log::info!("All {} blocks cleared", self.score);
        Ok(())
    }

    /// Playing -> GameOver
    pub fn finish_game_over(&mut self) -> Result<(), PhaseError> {
        self.expect_phase("end the game", |p| p == GamePhase::Playing)?;
        self.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", self.score);
        Ok(())
    }

    /// Put ball, paddle, grid and score back to their starting values
    fn reset_round(&mut self) {
        self.score = 0;
        self.time_ticks = 0;
        self.ball = Ball::new(
            self.config.ball_start(),
            self.config.ball_start_velocity(),
            self.config.ball_radius,
        );
        self.paddle = Paddle::from_config(&self.config);
        self.grid.reset();
    }

    fn expect_phase(
        &self,
        action: &'static str,
        allowed: impl Fn(GamePhase) -> bool,
    ) -> Result<(), PhaseError> {
        if allowed(self.phase) {
            Ok(())
        } else {
            log::warn!("Rejected transition: cannot {} while {:?}", action, self.phase);
            Err(PhaseError {
                action,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            x,
            ..Paddle::from_config(&GameConfig::default())
        }
    }

    #[test]
    fn test_new_state_waiting() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(240.0, 290.0));
        assert_eq!(state.ball.vel, Vec2::new(3.0, -3.0));
        assert_eq!(state.paddle.x, 200.0);
        assert_eq!(state.paddle.top, 300.0);
        assert_eq!(state.grid.remaining(), 24);
    }

    #[test]
    fn test_transitions_reject_wrong_phase() {
        let mut state = GameState::new(GameConfig::default());
        assert_eq!(
            state.restart(),
            Err(PhaseError {
                action: "restart",
                phase: GamePhase::Waiting
            })
        );
        assert!(state.finish_clear().is_err());
        assert!(state.finish_game_over().is_err());

        state.start().unwrap();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.start().is_err());
        assert!(state.restart().is_err());

        state.finish_game_over().unwrap();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.finish_clear().is_err());
        assert!(state.start().is_err());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(GameConfig::default());
        state.start().unwrap();
        state.grid.kill(0);
        state.grid.kill(5);
        state.score = 2;
        state.ball.pos = Vec2::new(10.0, 10.0);
        state.ball.vel = Vec2::new(-3.0, 3.0);
        state.paddle.x = 0.0;
        state.finish_game_over().unwrap();

        state.restart().unwrap();
        let mut fresh = GameState::new(GameConfig::default());
        fresh.phase = GamePhase::Playing;
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_steer_moves_and_clamps() {
        let mut paddle = paddle_at(200.0);
        paddle.steer(false, true, 480.0);
        assert_eq!(paddle.x, 206.0);
        paddle.steer(true, false, 480.0);
        assert_eq!(paddle.x, 200.0);

        // 398 + 6 would overshoot the right wall at 400
        let mut paddle = paddle_at(398.0);
        paddle.steer(false, true, 480.0);
        assert_eq!(paddle.x, 400.0);
        paddle.steer(false, true, 480.0);
        assert_eq!(paddle.x, 400.0);

        let mut paddle = paddle_at(2.0);
        paddle.steer(true, false, 480.0);
        assert_eq!(paddle.x, 0.0);
        paddle.steer(true, false, 480.0);
        assert_eq!(paddle.x, 0.0);
    }

    #[test]
    fn test_steer_both_keys_cancel() {
        let mut paddle = paddle_at(123.0);
        paddle.steer(true, true, 480.0);
        assert_eq!(paddle.x, 123.0);
    }

    #[test]
    fn test_paddle_spans_inclusive() {
        let paddle = paddle_at(100.0);
        assert!(paddle.spans(100.0));
        assert!(paddle.spans(180.0));
        assert!(!paddle.spans(99.9));
        assert!(!paddle.spans(180.1));
    }
}
