//! Game configuration
//!
//! All tuning lives in one serde-friendly struct. Defaults reproduce the
//! stock single-screen layout; hosts may resize the playfield to match their
//! drawing surface before validation.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Geometry of the block grid, derived from [`GameConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
    pub block_size: Vec2,
    pub padding: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

impl GridLayout {
    /// Total width of all columns including the gaps between them
    pub fn total_width(&self) -> f32 {
        self.cols as f32 * self.block_size.x + self.cols.saturating_sub(1) as f32 * self.padding
    }

    /// Total height of all rows including the gaps between them
    pub fn total_height(&self) -> f32 {
        self.rows as f32 * self.block_size.y + self.rows.saturating_sub(1) as f32 * self.padding
    }

    /// Top-left corner of the block at (row, col)
    pub fn block_origin(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            self.offset_left + col as f32 * (self.block_size.x + self.padding),
            self.offset_top + row as f32 * (self.block_size.y + self.padding),
        )
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Blocks ===
    pub rows: u32,
    pub cols: u32,
    pub block_width: f32,
    pub block_height: f32,
    pub block_padding: f32,
    /// Distance from the top edge to the first row
    pub block_offset_top: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels moved per tick while a direction is held
    pub paddle_speed: f32,
    /// Gap between the paddle's bottom edge and the playfield bottom
    pub paddle_ground_margin: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// How far above the playfield bottom the ball spawns
    pub ball_start_lift: f32,
    /// Per-tick velocity at spawn
    pub ball_start_velocity: (f32, f32),

    // === HUD ===
    /// Draw "Score: N" in the top-left corner
    pub show_score: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: 480.0,
            playfield_height: 320.0,

            rows: 4,
            cols: 6,
            block_width: 70.0,
            block_height: 20.0,
            block_padding: 10.0,
            block_offset_top: 40.0,

            paddle_width: 80.0,
            paddle_height: 10.0,
            paddle_speed: 6.0,
            paddle_ground_margin: 10.0,

            ball_radius: 6.0,
            ball_start_lift: 30.0,
            ball_start_velocity: (3.0, -3.0),

            show_score: false,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(&path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Copy of this config sized to a host surface
    pub fn with_playfield(&self, width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..self.clone()
        }
    }

    /// Number of blocks in a full grid
    pub fn block_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Centered grid geometry
    pub fn grid_layout(&self) -> GridLayout {
        let mut layout = GridLayout {
            rows: self.rows,
            cols: self.cols,
            block_size: Vec2::new(self.block_width, self.block_height),
            padding: self.block_padding,
            offset_left: 0.0,
            offset_top: self.block_offset_top,
        };
        layout.offset_left = (self.playfield_width - layout.total_width()) / 2.0;
        layout
    }

    /// Y coordinate of the paddle's top edge
    pub fn paddle_top(&self) -> f32 {
        self.playfield_height - self.paddle_height - self.paddle_ground_margin
    }

    /// Paddle x when centered
    pub fn paddle_start_x(&self) -> f32 {
        self.playfield_width / 2.0 - self.paddle_width / 2.0
    }

    /// Ball spawn position
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.playfield_width / 2.0,
            self.playfield_height - self.ball_start_lift,
        )
    }

    /// Ball spawn velocity
    pub fn ball_start_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_start_velocity.0, self.ball_start_velocity.1)
    }

    /// Reject configurations that would produce a degenerate game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        // Gaps and offsets may be zero but not negative
        let non_negative = [
            ("block_padding", self.block_padding),
            ("block_offset_top", self.block_offset_top),
            ("paddle_ground_margin", self.paddle_ground_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let (dx, dy) = self.ball_start_velocity;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ConfigError::NonFiniteVelocity { dx, dy });
        }
        if dx == 0.0 && dy == 0.0 {
            return Err(ConfigError::StationaryBall);
        }

        if self.paddle_width > self.playfield_width {
            return Err(ConfigError::PaddleTooWide {
                paddle_width: self.paddle_width,
                playfield_width: self.playfield_width,
            });
        }

        let paddle_top = self.paddle_top();
        if paddle_top <= 0.0 {
            return Err(ConfigError::PaddleOutOfBounds { paddle_top });
        }

        let layout = self.grid_layout();
        if layout.total_width() > self.playfield_width {
            return Err(ConfigError::GridTooWide {
                grid_width: layout.total_width(),
                playfield_width: self.playfield_width,
            });
        }
        let grid_bottom = layout.offset_top + layout.total_height();
        if grid_bottom >= paddle_top {
            return Err(ConfigError::GridOverlapsPaddle {
                grid_bottom,
                paddle_top,
            });
        }

        let start = self.ball_start();
        let r = self.ball_radius;
        if start.x < r
            || start.x > self.playfield_width - r
            || start.y < r
            || start.y + r > self.playfield_height
        {
            return Err(ConfigError::BallStartOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }
        if start.y + r > paddle_top {
            return Err(ConfigError::BallStartBelowPaddle {
                ball_bottom: start.y + r,
                paddle_top,
            });
        }

        Ok(())
    }
}
