//! Scene drawing
//!
//! Draws the playfield contents every frame, plus a dimmed overlay with a
//! headline whenever the game is not being played.

use glam::Vec2;

use super::surface::{Color, DrawSurface, Font, Rect, TextAlign};
use crate::config::GameConfig;
use crate::sim::{GamePhase, GameState};

/// Colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub block: Color,
    pub ball: Color,
    pub paddle: Color,
    pub text: Color,
    pub overlay: Color,
    pub waiting: Color,
    pub game_over: Color,
    pub clear: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            block: Color::rgb(0xff, 0x66, 0x66),
            ball: Color::rgb(0xff, 0xcc, 0x00),
            paddle: Color::rgb(0x00, 0xff, 0xcc),
            text: Color::rgb(0xff, 0xff, 0xff),
            overlay: Color::rgba(0, 0, 0, 0.8),
            waiting: Color::rgb(0xff, 0xff, 0xff),
            game_over: Color::rgb(0xff, 0x33, 0x33),
            clear: Color::rgb(0x00, 0xff, 0xcc),
        }
    }
}

pub const HEADLINE_FONT: Font = Font::bold(36.0);
pub const HINT_FONT: Font = Font::regular(16.0);
pub const HUD_FONT: Font = Font::regular(14.0);

/// Prompt shown under every overlay headline
pub const RESTART_HINT: &str = "Press any key";

/// Headline for a non-playing phase
pub fn headline(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Waiting => Some(""),
        GamePhase::Playing => None,
        GamePhase::GameOver => Some("GAME OVER"),
        GamePhase::Clear => Some("CLEAR!"),
    }
}

/// Clear the surface and draw blocks, ball, paddle and (optionally) the score
pub fn draw_scene(state: &GameState, palette: &Palette, surface: &mut impl DrawSurface) {
    let config = &state.config;
    surface.clear(Rect::new(
        0.0,
        0.0,
        config.playfield_width,
        config.playfield_height,
    ));

    let size = state.grid.block_size();
    for block in state.grid.alive() {
        surface.fill_rect(
            Rect {
                origin: block.pos,
                size,
            },
            palette.block,
        );
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, palette.ball);

    let paddle = &state.paddle;
    surface.fill_rect(
        Rect::new(paddle.x, paddle.top, paddle.width, paddle.height),
        palette.paddle,
    );

    if config.show_score {
        surface.draw_text(
            &format!("Score: {}", state.score),
            Vec2::new(10.0, 20.0),
            HUD_FONT,
            palette.text,
            TextAlign::Start,
        );
    }
}

/// Dim the playfield and print the phase headline. Does nothing while playing.
pub fn draw_overlay(
    phase: GamePhase,
    config: &GameConfig,
    palette: &Palette,
    surface: &mut impl DrawSurface,
) {
    let Some(text) = headline(phase) else {
        return;
    };
    let color = match phase {
        GamePhase::GameOver => palette.game_over,
        GamePhase::Clear => palette.clear,
        _ => palette.waiting,
    };

    surface.fill_rect(
        Rect::new(0.0, 0.0, config.playfield_width, config.playfield_height),
        palette.overlay,
    );

    let center = Vec2::new(config.playfield_width / 2.0, config.playfield_height / 2.0);
    surface.draw_text(text, center, HEADLINE_FONT, color, TextAlign::Center);
    surface.draw_text(
        RESTART_HINT,
        center + Vec2::new(0.0, 40.0),
        HINT_FONT,
        color,
        TextAlign::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_scene_draws_alive_blocks_ball_paddle() {
        let mut state = GameState::new(GameConfig::default());
        state.grid.kill(0);
        state.grid.kill(1);
        let mut surface = RecordingSurface::new();

        draw_scene(&state, &Palette::default(), &mut surface);

        let commands = surface.commands();
        assert!(matches!(commands[0], DrawCommand::Clear(_)));
        let rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect(..)))
            .count();
        // 22 blocks + paddle
        assert_eq!(rects, 23);
        assert!(commands.contains(&DrawCommand::FillCircle {
            center: Vec2::new(240.0, 290.0),
            radius: 6.0,
            color: Palette::default().ball,
        }));
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn test_scene_score_hud() {
        let config = GameConfig {
            show_score: true,
            ..Default::default()
        };
        let mut state = GameState::new(config);
        state.score = 7;
        let mut surface = RecordingSurface::new();
        draw_scene(&state, &Palette::default(), &mut surface);
        assert_eq!(surface.texts(), vec!["Score: 7"]);
    }

    #[test]
    fn test_overlay_per_phase() {
        let config = GameConfig::default();
        let palette = Palette::default();

        let mut surface = RecordingSurface::new();
        draw_overlay(GamePhase::Playing, &config, &palette, &mut surface);
        assert!(surface.commands().is_empty());

        draw_overlay(GamePhase::GameOver, &config, &palette, &mut surface);
        assert_eq!(surface.texts(), vec!["GAME OVER", RESTART_HINT]);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::FillRect(Rect::new(0.0, 0.0, 480.0, 320.0), palette.overlay)
        );

        let mut surface = RecordingSurface::new();
        draw_overlay(GamePhase::Clear, &config, &palette, &mut surface);
        assert_eq!(surface.texts(), vec!["CLEAR!", RESTART_HINT]);

        let mut surface = RecordingSurface::new();
        draw_overlay(GamePhase::Waiting, &config, &palette, &mut surface);
        assert_eq!(surface.texts(), vec!["", RESTART_HINT]);
    }
}
