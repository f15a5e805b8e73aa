//! Rendering module
//!
//! Immediate-mode 2D drawing through the [`DrawSurface`] trait.

pub mod scene;
pub mod surface;

pub use scene::{Palette, draw_overlay, draw_scene};
pub use surface::{Color, DrawCommand, DrawSurface, Font, RecordingSurface, Rect, TextAlign};
