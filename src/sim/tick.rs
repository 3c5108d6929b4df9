//! Per-frame simulation step
//!
//! Steers the paddle, then hands the world to the active mode's rules.

use super::input::{TickInput, steer_paddle};
use super::state::{Arena, GameEvent, World};
use super::{bounce, catch, shooter};

/// Advance the world by one frame.
///
/// The caller bumps `world.frame` first; spawn cadences compare against it.
/// Particles are not updated here.
pub fn tick(world: &mut World, input: &TickInput, dt_ms: f64) -> Vec<GameEvent> {
    steer_paddle(&mut world.paddle, input, &world.tuning);

    let step: fn(&mut World, &TickInput, f64) -> Vec<GameEvent> = match world.arena {
        Arena::Bounce(_) => bounce::step,
        Arena::Shooter(_) => shooter::step,
        Arena::Catch(_) => catch::step,
    };
    step(world, input, dt_ms)
}

/// Demo/idle mode: pick a pointer position that plays the current mode
pub fn autopilot(world: &World) -> TickInput {
    let width = world.tuning.playfield.width;
    let paddle = &world.paddle;
    let pointer_x = match &world.arena {
        // Sit under the ball, slightly offset so it drifts back to center.
        // Easing lags a moving pointer by velocity / easing, so lead by that.
        Arena::Bounce(state) => {
            let ball = &state.ball;
            let lean = (ball.pos.x - width / 2.0).signum() * paddle.width * 0.1;
            let lead = ball.vel.x / world.tuning.paddle.pointer_easing.max(0.01);
            Some(ball.pos.x + lean + lead)
        }
        // Put an emitter under the lowest target
        Arena::Shooter(state) => {
            let offset = paddle.width / 2.0 - world.tuning.shooter.emitter_inset;
            state
                .targets
                .iter()
                .filter(|t| t.active)
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|t| {
                    let x = t.center().x;
                    if x + offset + paddle.width / 2.0 <= width {
                        x + offset
                    } else {
                        x - offset
                    }
                })
        }
        // Go for the most valuable item still above the bucket
        Arena::Catch(state) => state
            .items
            .iter()
            .filter(|i| i.active && i.pos.y < paddle.bottom())
            .max_by_key(|i| i.value)
            .map(|i| i.center().x),
    };
    TickInput {
        left: false,
        right: false,
        pointer_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GameMode, SoundEvent};
    use crate::tuning::Tuning;

    #[test]
    fn test_paddle_moves_before_rules() {
        let mut world = World::new(Tuning::default(), 2, GameMode::Shooter);
        let start = world.paddle.pos.x;
        world.frame = FIRE_RATE;
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut world, &input, 16.0);
        // The volley leaves from the already-moved paddle
        let Arena::Shooter(state) = &world.arena else {
            panic!("expected shooter arena");
        };
        assert_eq!(world.paddle.pos.x, start + PADDLE_KEY_SPEED);
        assert_eq!(state.bullets[0].pos.x, start + PADDLE_KEY_SPEED + EMITTER_INSET);
    }

    #[test]
    fn test_dispatches_on_arena() {
        let mut world = World::new(Tuning::default(), 2, GameMode::Catch);
        tick(&mut world, &TickInput::default(), 1000.0);
        let Arena::Catch(state) = &world.arena else {
            panic!("expected catch arena");
        };
        assert_eq!(state.time_left, CATCH_DURATION_SECS - 1.0);

        world.reset(GameMode::Bounce);
        tick(&mut world, &TickInput::default(), 16.0);
        let Arena::Bounce(state) = &world.arena else {
            panic!("expected bounce arena");
        };
        assert!(state.ball.vel.y > 0.0);
    }

    #[test]
    fn test_autopilot_keeps_ball_alive() {
        let mut world = World::new(Tuning::default(), 77, GameMode::Bounce);
        let mut hits = 0;
        for _ in 0..2000 {
            world.frame += 1;
            let input = autopilot(&world);
            let events = tick(&mut world, &input, 16.0);
            assert!(!events.contains(&GameEvent::GameOver), "ball dropped after {hits} hits");
            hits += events
                .iter()
                .filter(|e| **e == GameEvent::Sound(SoundEvent::Score))
                .count();
        }
        assert!(hits > 5);
    }

    #[test]
    fn test_autopilot_idles_without_targets() {
        let world = World::new(Tuning::default(), 1, GameMode::Shooter);
        assert_eq!(autopilot(&world), TickInput::default());
    }
}
