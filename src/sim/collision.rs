//! Collision tests for an axis-aligned playfield
//!
//! Blocks are tested against where the ball *is*; walls and the paddle are
//! tested against where the ball *would be* after applying its velocity.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Which velocity components a wall contact flips
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub flip_x: bool,
    pub flip_y: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.flip_x || self.flip_y
    }

    /// Apply the flips to a velocity
    pub fn apply(&self, vel: Vec2) -> Vec2 {
        Vec2::new(
            if self.flip_x { -vel.x } else { vel.x },
            if self.flip_y { -vel.y } else { vel.y },
        )
    }
}

/// Whether a point lies strictly inside the rectangle at `origin` with `size`
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}

/// Side and top wall contacts for the ball's next position.
/// The bottom edge is open.
pub fn wall_bounce(ball: &Ball, playfield_width: f32) -> WallBounce {
    let next = ball.next_pos();
    WallBounce {
        flip_x: next.x > playfield_width - ball.radius || next.x < ball.radius,
        flip_y: next.y < ball.radius,
    }
}

/// Whether the ball lands on the paddle this tick
///
/// Requires the ball's current bottom edge to be at or above the paddle top
/// and its next bottom edge to reach it, with the next x over the paddle.
/// A ball already below the paddle plane never registers a hit.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    let next = ball.next_pos();
    next.y + ball.radius >= paddle.top && ball.bottom() <= paddle.top && paddle.spans(next.x)
}

/// Whether the ball's next bottom edge leaves through the playfield bottom
pub fn falls_out(ball: &Ball, playfield_height: f32) -> bool {
    ball.next_pos().y + ball.radius > playfield_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn ball(pos: (f32, f32), vel: (f32, f32)) -> Ball {
        Ball::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), 6.0)
    }

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            x,
            ..Paddle::from_config(&GameConfig::default())
        }
    }

    #[test]
    fn test_point_in_rect_is_strict() {
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(70.0, 20.0);
        assert!(point_in_rect(Vec2::new(40.0, 30.0), origin, size));
        // Edges do not count
        assert!(!point_in_rect(Vec2::new(10.0, 30.0), origin, size));
        assert!(!point_in_rect(Vec2::new(80.0, 30.0), origin, size));
        assert!(!point_in_rect(Vec2::new(40.0, 20.0), origin, size));
        assert!(!point_in_rect(Vec2::new(40.0, 40.0), origin, size));
    }

    #[test]
    fn test_wall_bounce_sides() {
        let right = wall_bounce(&ball((472.0, 100.0), (3.0, 3.0)), 480.0);
        assert_eq!(
            right,
            WallBounce {
                flip_x: true,
                flip_y: false
            }
        );

        let left = wall_bounce(&ball((8.0, 100.0), (-3.0, 3.0)), 480.0);
        assert!(left.flip_x);

        // Exactly touching is not past the wall
        let touching = wall_bounce(&ball((471.0, 100.0), (3.0, 3.0)), 480.0);
        assert!(!touching.any());
    }

    #[test]
    fn test_wall_bounce_top_only() {
        let top = wall_bounce(&ball((100.0, 8.0), (3.0, -3.0)), 480.0);
        assert_eq!(
            top,
            WallBounce {
                flip_x: false,
                flip_y: true
            }
        );
        assert_eq!(top.apply(Vec2::new(3.0, -3.0)), Vec2::new(3.0, 3.0));

        // Moving down past the bottom never reflects
        let bottom = wall_bounce(&ball((100.0, 318.0), (0.0, 5.0)), 480.0);
        assert!(!bottom.any());
    }

    #[test]
    fn test_paddle_contact_from_above() {
        let paddle = paddle_at(200.0);
        // Paddle top is at 300; next bottom edge stops short
        assert!(!paddle_contact(&ball((240.0, 290.0), (0.0, 3.0)), &paddle));
        // Next bottom edge lands exactly on the paddle top
        assert!(paddle_contact(&ball((240.0, 290.0), (0.0, 4.0)), &paddle));
        // Next x misses the paddle
        assert!(!paddle_contact(&ball((100.0, 290.0), (0.0, 4.0)), &paddle));
    }

    #[test]
    fn test_paddle_contact_edges_inclusive() {
        let paddle = paddle_at(200.0);
        assert!(paddle_contact(&ball((197.0, 292.0), (3.0, 8.0)), &paddle));
        assert!(paddle_contact(&ball((283.0, 292.0), (-3.0, 8.0)), &paddle));
        assert!(!paddle_contact(&ball((284.0, 292.0), (-3.0, 8.0)), &paddle));
    }

    #[test]
    fn test_no_contact_once_below_paddle_plane() {
        let paddle = paddle_at(200.0);
        let b = ball((240.0, 296.0), (0.0, 4.0));
        assert!(!paddle_contact(&b, &paddle));
    }

    #[test]
    fn test_falls_out() {
        assert!(falls_out(&ball((100.0, 312.0), (0.0, 5.0)), 320.0));
        assert!(!falls_out(&ball((100.0, 309.0), (0.0, 5.0)), 320.0));
        assert!(!falls_out(&ball((100.0, 312.0), (0.0, -5.0)), 320.0));
    }
}
