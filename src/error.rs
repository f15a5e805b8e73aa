//! Error types
//!
//! The simulation itself is total over its state space; errors only arise
//! from bad configuration, from the host failing to provide a surface or
//! scheduler, or from asking the state machine for a transition that does
//! not apply to the current phase.

use thiserror::Error;

use crate::sim::GamePhase;

/// Invalid startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Grid must have at least one row and one column
    #[error("block grid must be at least 1x1 (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },
    /// A length, speed or radius is zero, negative or not finite
    #[error("{name} must be positive and finite (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    /// Ball start velocity component is not finite
    #[error("ball start velocity must be finite (got {dx}, {dy})")]
    NonFiniteVelocity { dx: f32, dy: f32 },
    /// Ball would never move
    #[error("ball start velocity must not be zero")]
    StationaryBall,
    /// Grid does not fit horizontally
    #[error("block grid is {grid_width} wide but the playfield is only {playfield_width}")]
    GridTooWide { grid_width: f32, playfield_width: f32 },
    /// Grid reaches down into the paddle lane
    #[error("block grid bottom ({grid_bottom}) overlaps the paddle lane (top {paddle_top})")]
    GridOverlapsPaddle { grid_bottom: f32, paddle_top: f32 },
    /// Paddle does not fit in the playfield
    #[error("paddle is {paddle_width} wide but the playfield is only {playfield_width}")]
    PaddleTooWide { paddle_width: f32, playfield_width: f32 },
    /// Paddle lane sits outside the playfield
    #[error("paddle top ({paddle_top}) lies outside the playfield")]
    PaddleOutOfBounds { paddle_top: f32 },
    /// Ball spawn point lies outside the playfield walls
    #[error("ball start ({x}, {y}) lies outside the playfield")]
    BallStartOutOfBounds { x: f32, y: f32 },
    /// Ball spawns below the paddle lane and can never be caught
    #[error("ball start bottom ({ball_bottom}) lies below the paddle top ({paddle_top})")]
    BallStartBelowPaddle { ball_bottom: f32, paddle_top: f32 },
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Host integration failures, reported once at startup
#[derive(Debug, Error)]
pub enum HostError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("frame scheduler unavailable: {0}")]
    SchedulerUnavailable(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A phase transition requested from a phase it does not apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} while {phase:?}")]
pub struct PhaseError {
    pub action: &'static str,
    pub phase: GamePhase,
}
