//! Classic bounce rules
//!
//! A single ball falls under gravity, rebounds off the walls with energy
//! loss, and must be kept aloft with the paddle. Speeds are per frame.

use super::collision::ball_touches_paddle;
use super::input::TickInput;
use super::state::{Arena, GameEvent, ParticleColor, SoundEvent, World};

/// Advance the bounce mode by one frame
pub fn step(world: &mut World, _input: &TickInput, _dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Arena::Bounce(state) = &mut world.arena else {
        return events;
    };
    let tuning = &world.tuning.bounce;
    let width = world.tuning.playfield.width;
    let height = world.tuning.playfield.height;
    let ball = &mut state.ball;

    ball.vel.y += tuning.gravity;
    ball.pos += ball.vel;

    // Walls
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x *= -tuning.wall_restitution;
        events.push(GameEvent::Sound(SoundEvent::Bounce));
    }
    if ball.pos.x + ball.radius > width {
        ball.pos.x = width - ball.radius;
        ball.vel.x *= -tuning.wall_restitution;
        events.push(GameEvent::Sound(SoundEvent::Bounce));
    }
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y *= -tuning.ceiling_restitution;
        events.push(GameEvent::Sound(SoundEvent::Bounce));
    }

    // Fully below the floor
    if ball.pos.y - ball.radius > height {
        log::debug!("Ball lost at x={:.1}", ball.pos.x);
        events.push(GameEvent::GameOver);
        return events;
    }

    // Only a falling ball can be hit, so the exit frames of an upward ball
    // still overlapping the paddle never score twice
    if ball.vel.y > 0.0 && ball_touches_paddle(ball, &world.paddle) {
        let paddle = &world.paddle;
        ball.pos.y = paddle.pos.y - ball.radius;
        let rebound = (ball.vel.y.abs() * tuning.paddle_boost).min(tuning.max_rebound_speed);
        ball.vel.y = -rebound;
        ball.vel.x = (ball.pos.x - paddle.center_x()) * tuning.english_factor;

        world.score += 1;
        events.push(GameEvent::Sound(SoundEvent::Score));
        world
            .particles
            .spawn(&mut world.rng, ball.pos, ParticleColor::RedDot);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Ball, GameMode};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn world_with_ball(pos: Vec2, vel: Vec2) -> World {
        let mut world = World::new(Tuning::default(), 42, GameMode::Bounce);
        if let Arena::Bounce(state) = &mut world.arena {
            state.ball = Ball {
                pos,
                vel,
                radius: BALL_RADIUS,
            };
        }
        world
    }

    fn ball(world: &World) -> &Ball {
        match &world.arena {
            Arena::Bounce(state) => &state.ball,
            _ => panic!("not in bounce mode"),
        }
    }

    fn run(world: &mut World) -> Vec<GameEvent> {
        step(world, &TickInput::default(), 16.0)
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut world = world_with_ball(Vec2::new(400.0, 100.0), Vec2::ZERO);
        run(&mut world);
        assert!((ball(&world).vel.y - GRAVITY).abs() < 1e-6);
        assert!((ball(&world).pos.y - (100.0 + GRAVITY)).abs() < 1e-4);
        run(&mut world);
        assert!((ball(&world).vel.y - 2.0 * GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_left_wall_restitution() {
        let mut world = world_with_ball(Vec2::new(20.0, 200.0), Vec2::new(-10.0, 0.0));
        let events = run(&mut world);
        assert_eq!(ball(&world).pos.x, BALL_RADIUS);
        assert!((ball(&world).vel.x - 8.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Bounce)]);
    }

    #[test]
    fn test_right_wall_restitution() {
        let mut world = world_with_ball(Vec2::new(780.0, 200.0), Vec2::new(10.0, 0.0));
        let events = run(&mut world);
        assert_eq!(ball(&world).pos.x, PLAYFIELD_WIDTH - BALL_RADIUS);
        assert!((ball(&world).vel.x + 8.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Bounce)]);
    }

    #[test]
    fn test_ceiling_restitution() {
        let mut world = world_with_ball(Vec2::new(400.0, 20.0), Vec2::new(0.0, -10.4));
        let events = run(&mut world);
        // Gravity applies first: -10.4 + 0.4 = -10.0, then reversed at 0.6
        assert_eq!(ball(&world).pos.y, BALL_RADIUS);
        assert!((ball(&world).vel.y - 6.0).abs() < 1e-5);
        assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Bounce)]);
    }

    #[test]
    fn test_floor_is_terminal() {
        let mut world = world_with_ball(Vec2::new(100.0, 620.0), Vec2::new(0.0, 5.0));
        let events = run(&mut world);
        assert_eq!(events, vec![GameEvent::GameOver]);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_centered_paddle_hit() {
        // Paddle top is at 520; ball center lands inside the band this frame
        let mut world = world_with_ball(Vec2::new(400.0, 500.0), Vec2::new(0.0, 9.6));
        let events = run(&mut world);
        let b = ball(&world);
        assert!(b.vel.x.abs() < 1e-5);
        assert!((b.vel.y + 10.0 * PADDLE_BOOST).abs() < 1e-4);
        assert_eq!(b.pos.y, world.paddle.pos.y - BALL_RADIUS);
        assert_eq!(world.score, 1);
        assert_eq!(world.particles.len(), BURST_SIZE);
        assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Score)]);
    }

    #[test]
    fn test_off_center_hit_sends_ball_sideways() {
        let mut world = world_with_ball(Vec2::new(340.0, 500.0), Vec2::new(0.0, 9.6));
        run(&mut world);
        // 60 left of center -> -9.0
        assert!((ball(&world).vel.x + 60.0 * ENGLISH_FACTOR).abs() < 1e-4);

        let mut world = world_with_ball(Vec2::new(470.0, 500.0), Vec2::new(0.0, 9.6));
        run(&mut world);
        assert!(ball(&world).vel.x > 0.0);
    }

    #[test]
    fn test_rebound_speed_is_capped() {
        let mut world = world_with_ball(Vec2::new(400.0, 490.0), Vec2::new(0.0, 19.6));
        run(&mut world);
        assert_eq!(ball(&world).vel.y, -MAX_REBOUND_SPEED);
    }

    #[test]
    fn test_rising_ball_in_paddle_does_not_score() {
        let mut world = world_with_ball(Vec2::new(400.0, 530.0), Vec2::new(0.0, -8.0));
        let events = run(&mut world);
        assert_eq!(world.score, 0);
        assert!(events.is_empty());
        assert!(world.particles.is_empty());
    }

    #[test]
    fn test_one_point_per_contact() {
        let mut world = world_with_ball(Vec2::new(400.0, 500.0), Vec2::new(0.0, 9.6));
        let mut scored = 0;
        for _ in 0..5 {
            let events = run(&mut world);
            scored += events
                .iter()
                .filter(|e| **e == GameEvent::Sound(SoundEvent::Score))
                .count();
        }
        assert_eq!(scored, 1);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn test_ignores_other_modes() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        assert!(run(&mut world).is_empty());
    }

    proptest! {
        #[test]
        fn prop_wall_bounce_reverses_and_damps(
            right in any::<bool>(),
            gap in 0.0f32..5.0,
            speed in 6.0f32..30.0,
            vy in -8.0f32..8.0,
        ) {
            let (x, vx) = if right {
                (PLAYFIELD_WIDTH - BALL_RADIUS - gap, speed)
            } else {
                (BALL_RADIUS + gap, -speed)
            };
            let mut world = world_with_ball(Vec2::new(x, 300.0), Vec2::new(vx, vy));
            let events = run(&mut world);
            let ball = ball(&world);
            prop_assert!((ball.vel.x + vx * WALL_RESTITUTION).abs() < 1e-4);
            prop_assert!(ball.pos.x >= BALL_RADIUS);
            prop_assert!(ball.pos.x <= PLAYFIELD_WIDTH - BALL_RADIUS);
            prop_assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Bounce)]);
        }
    }
}
