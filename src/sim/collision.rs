//! Collision predicates
//!
//! All three modes use axis-aligned geometry. Each rule set picks the
//! predicate that matches its gameplay: the ball is tested against the
//! paddle's band, bullets are points, and the catch bucket uses full
//! box overlap.

use glam::Vec2;

use super::state::{Ball, Paddle, Target};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict containment: points on the border do not count
    pub fn contains_point(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x > self.min.x && p.x < max.x && p.y > self.min.y && p.y < max.y
    }

    /// Strict overlap: rectangles that only touch do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

impl From<&Paddle> for Rect {
    fn from(p: &Paddle) -> Self {
        Rect::new(p.pos.x, p.pos.y, p.width, p.height)
    }
}

impl From<&Target> for Rect {
    fn from(t: &Target) -> Self {
        Rect::new(t.pos.x, t.pos.y, t.width, t.height)
    }
}

/// Whether the ball touches the paddle.
///
/// The ball's vertical extent must reach into the paddle's band, but only
/// the ball's center is tested horizontally, so a ball clipping the paddle
/// corner with its edge passes by.
pub fn ball_touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius >= paddle.pos.y
        && ball.pos.y - ball.radius <= paddle.bottom()
        && ball.pos.x >= paddle.pos.x
        && ball.pos.x <= paddle.right()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(x: f32) -> Paddle {
        Paddle {
            pos: Vec2::new(x, 520.0),
            width: 160.0,
            height: 40.0,
        }
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(0.0, 5.0),
            radius: 16.0,
        }
    }

    #[test]
    fn test_point_in_rect_is_strict() {
        let r = Rect::new(0.0, 0.0, 40.0, 40.0);
        assert!(r.contains_point(Vec2::new(20.0, 20.0)));
        assert!(!r.contains_point(Vec2::new(0.0, 20.0)));
        assert!(!r.contains_point(Vec2::new(20.0, 40.0)));
        assert!(!r.contains_point(Vec2::new(-1.0, 20.0)));
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(-5.0, -5.0, 30.0, 30.0)));
        // Touching edges only
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_ball_over_paddle_band() {
        let paddle = paddle_at(320.0);
        // Bottom of ball just reaches paddle top
        assert!(ball_touches_paddle(&ball_at(400.0, 504.0), &paddle));
        // Above the band
        assert!(!ball_touches_paddle(&ball_at(400.0, 500.0), &paddle));
        // Below the band
        assert!(!ball_touches_paddle(&ball_at(400.0, 580.0), &paddle));
    }

    #[test]
    fn test_ball_center_outside_paddle_misses() {
        let paddle = paddle_at(320.0);
        // Ball edge overlaps the paddle corner but its center is outside
        assert!(!ball_touches_paddle(&ball_at(310.0, 520.0), &paddle));
        assert!(ball_touches_paddle(&ball_at(320.0, 520.0), &paddle));
        assert!(ball_touches_paddle(&ball_at(480.0, 520.0), &paddle));
        assert!(!ball_touches_paddle(&ball_at(481.0, 520.0), &paddle));
    }
}
