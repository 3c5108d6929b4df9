//! Cash Hunter rules
//!
//! The paddle auto-fires paired volleys upward while banknotes fall from the
//! top. Any note reaching the floor ends the run.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use super::input::TickInput;
use super::state::{Arena, Bullet, GameEvent, ParticleColor, SoundEvent, Target, World};
use crate::tuning::pick_tier;

/// Advance the shooter mode by one frame
pub fn step(world: &mut World, _input: &TickInput, _dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Arena::Shooter(state) = &mut world.arena else {
        return events;
    };
    let tuning = &world.tuning.shooter;
    let height = world.tuning.playfield.height;
    let paddle = &world.paddle;

    // Volley: one bullet from each emitter, one sound
    if world.frame % tuning.fire_rate == 0 {
        let emitters = [
            paddle.pos.x + tuning.emitter_inset,
            paddle.right() - tuning.emitter_inset,
        ];
        for x in emitters {
            state.bullets.push(Bullet {
                pos: Vec2::new(x, paddle.pos.y),
                radius: tuning.bullet_radius,
                dy: tuning.bullet_speed,
                active: true,
            });
        }
        events.push(GameEvent::Sound(SoundEvent::Shoot));
    }

    if world.frame % tuning.spawn_rate == 0 {
        let roll = world.rng.random::<f32>();
        if let Some(tier) = pick_tier(&tuning.targets, roll) {
            let target = Target::spawn(
                &mut world.rng,
                world.tuning.playfield.width,
                tuning.target_size,
                tier,
            );
            log::trace!("Spawned {:?} target at x={:.1}", target.category, target.pos.x);
            state.targets.push(target);
        }
    }

    for bullet in state.bullets.iter_mut() {
        bullet.pos.y += bullet.dy;
        if bullet.pos.y < 0.0 {
            bullet.active = false;
        }
    }

    for target in state.targets.iter_mut() {
        target.pos.y += target.dy;
    }
    if state.targets.iter().any(|t| t.active && t.pos.y > height) {
        log::debug!("Target reached the floor");
        events.push(GameEvent::GameOver);
        return events;
    }

    // Bullets are points against each target's box
    for bullet in state.bullets.iter_mut().filter(|b| b.active) {
        for target in state.targets.iter_mut().filter(|t| t.active) {
            if Rect::from(&*target).contains_point(bullet.pos) {
                bullet.active = false;
                target.active = false;
                world.score += target.value;
                world
                    .particles
                    .spawn(&mut world.rng, target.center(), ParticleColor::Gold);
                events.push(GameEvent::Sound(SoundEvent::Coin));
                break;
            }
        }
    }

    state.bullets.retain(|b| b.active);
    state.targets.retain(|t| t.active);

    events
}
