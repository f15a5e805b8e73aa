//! Block Breaker - A single-screen block breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `game`: Frame loop tying input, simulation and drawing together
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `input`: Logical keys and held-key state
//! - `config`: Validated game configuration

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, HostError, PhaseError};
pub use game::{FrameScheduler, Game, autopilot_input};
pub use input::{InputState, Key, KeyEvent};
