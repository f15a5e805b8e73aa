//! Simulation tick
//!
//! One call advances a Playing game by exactly one frame. Order matters:
//! blocks (current position) -> walls -> paddle or game over (next
//! position) -> integrate -> paddle movement.

use super::collision;
use super::state::{GamePhase, GameState};

/// Held-key snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// What a call to [`tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Frozen(GamePhase),
    /// Normal step
    Running { blocks_hit: u32, paddle_hit: bool },
    /// Last block destroyed; the rest of the step still ran and the game
    /// is now Clear
    Cleared,
    /// Ball left through the bottom; game is now GameOver
    GameOver,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    if !state.phase.is_active() {
        return TickOutcome::Frozen(state.phase);
    }
    state.time_ticks += 1;

    // --- Blocks ---
    let blocks_hit = collide_blocks(state);
    let cleared = blocks_hit > 0 && state.grid.all_cleared();
    if cleared && let Err(e) = state.finish_clear() {
        log::error!("Grid cleared but phase not updated: {}", e);
    }

    // --- Walls ---
    let bounce = collision::wall_bounce(&state.ball, state.config.playfield_width);
    state.ball.vel = bounce.apply(state.ball.vel);

    // --- Paddle / bottom edge ---
    // A cleared grid outranks a fall on the same tick
    let paddle_hit = collision::paddle_contact(&state.ball, &state.paddle);
    if paddle_hit {
        state.ball.vel.y = -state.ball.vel.y.abs();
    } else if !cleared && collision::falls_out(&state.ball, state.config.playfield_height) {
        if let Err(e) = state.finish_game_over() {
            log::error!("Ball lost but phase not updated: {}", e);
        }
        return TickOutcome::GameOver;
    }

    state.ball.integrate();

    state
        .paddle
        .steer(input.left, input.right, state.config.playfield_width);

    if cleared {
        return TickOutcome::Cleared;
    }
    TickOutcome::Running {
        blocks_hit,
        paddle_hit,
    }
}

/// Destroy every alive block containing the ball center. Each hit scores
/// once and flips vertical velocity.
fn collide_blocks(state: &mut GameState) -> u32 {
    let size = state.grid.block_size();
    let mut hits = 0;

    for index in 0..state.grid.len() {
        let inside = {
            let block = &state.grid.blocks()[index];
            block.alive && collision::point_in_rect(state.ball.pos, block.pos, size)
        };
        if inside && state.grid.kill(index) {
            state.score += 1;
            state.ball.vel.y = -state.ball.vel.y;
            hits += 1;
            log::debug!("Block {} destroyed, score {}", index, state.score);
        }
    }

    hits
}
