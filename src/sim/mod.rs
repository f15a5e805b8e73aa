//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame
//! - Stable iteration order (blocks row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{WallBounce, falls_out, paddle_contact, point_in_rect, wall_bounce};
pub use grid::{Block, BlockGrid};
pub use state::{Ball, GamePhase, GameState, Paddle};
pub use tick::{TickInput, TickOutcome, tick};
