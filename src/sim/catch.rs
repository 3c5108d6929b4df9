//! Capital Rain rules
//!
//! Money falls at constant per-item speeds and the paddle acts as a bucket.
//! The run lasts a fixed wall-clock duration; missed items cost nothing.

use rand::Rng;

use super::collision::Rect;
use super::input::TickInput;
use super::state::{Arena, GameEvent, ParticleColor, SoundEvent, Target, World};
use crate::tuning::pick_tier;

/// Advance the catch mode by one frame.
///
/// The countdown runs on real elapsed time (`dt_ms`), unlike the
/// frame-counted spawn cadence.
pub fn step(world: &mut World, _input: &TickInput, dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let Arena::Catch(state) = &mut world.arena else {
        return events;
    };
    let tuning = &world.tuning.catch;
    let height = world.tuning.playfield.height;

    if state.time_left > 0.0 {
        state.time_left -= dt_ms.max(0.0) / 1000.0;
        if state.time_left <= 0.0 {
            state.time_left = 0.0;
            log::debug!("Catch timer expired");
            events.push(GameEvent::GameOver);
            return events;
        }
    }

    if world.frame % tuning.spawn_rate == 0 {
        let roll = world.rng.random::<f32>();
        if let Some(tier) = pick_tier(&tuning.tiers, roll) {
            let item = Target::spawn(
                &mut world.rng,
                world.tuning.playfield.width,
                tuning.item_size,
                tier,
            );
            state.items.push(item);
        }
    }

    for item in state.items.iter_mut() {
        item.pos.y += item.dy;
        if item.pos.y > height {
            item.active = false;
        }
    }

    let bucket = Rect::from(&world.paddle);
    for item in state.items.iter_mut().filter(|i| i.active) {
        if bucket.overlaps(&Rect::from(&*item)) {
            item.active = false;
            world.score += item.value;
            world
                .particles
                .spawn(&mut world.rng, item.center(), ParticleColor::Gold);
            events.push(GameEvent::Sound(SoundEvent::Coin));
        }
    }

    state.items.retain(|i| i.active);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{CatchState, Category, GameMode};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn catch_state(world: &World) -> &CatchState {
        match &world.arena {
            Arena::Catch(s) => s,
            _ => panic!("not in catch mode"),
        }
    }

    fn catch_state_mut(world: &mut World) -> &mut CatchState {
        match &mut world.arena {
            Arena::Catch(s) => s,
            _ => panic!("not in catch mode"),
        }
    }

    fn item_at(x: f32, y: f32, dy: f32, value: u64) -> Target {
        Target {
            pos: Vec2::new(x, y),
            width: ITEM_SIZE,
            height: ITEM_SIZE,
            dy,
            category: Category::Bag,
            value,
            active: true,
        }
    }

    fn advance(world: &mut World, dt_ms: f64) -> Vec<GameEvent> {
        world.frame += 1;
        step(world, &TickInput::default(), dt_ms)
    }

    #[test]
    fn test_timer_uses_elapsed_time() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        advance(&mut world, 250.0);
        assert_eq!(catch_state(&world).time_left, CATCH_DURATION_SECS - 0.25);
        // A long frame counts the same as many short ones
        advance(&mut world, 1750.0);
        assert_eq!(catch_state(&world).time_left, CATCH_DURATION_SECS - 2.0);
    }

    #[test]
    fn test_timer_clamps_at_zero_and_fires_once() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        catch_state_mut(&mut world).time_left = 0.1;
        let events = advance(&mut world, 500.0);
        assert_eq!(events, vec![GameEvent::GameOver]);
        assert_eq!(catch_state(&world).time_left, 0.0);

        // Stepping past expiry never re-triggers or goes negative
        let events = advance(&mut world, 500.0);
        assert!(!events.contains(&GameEvent::GameOver));
        assert_eq!(catch_state(&world).time_left, 0.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut world = World::new(Tuning::default(), 8, GameMode::Catch);
        for _ in 0..ITEM_SPAWN_RATE * 3 {
            advance(&mut world, 16.0);
        }
        // Items fall at most 6 per frame, none can reach the paddle yet
        assert_eq!(catch_state(&world).items.len(), 3);
        for item in &catch_state(&world).items {
            assert_eq!(item.width, ITEM_SIZE);
            assert!(item.dy >= ITEM_SPEED_MIN && item.dy <= ITEM_SPEED_MAX);
        }
    }

    #[test]
    fn test_missed_item_is_silent() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        world.frame = 1;
        // Far from the bucket, about to leave the playfield
        catch_state_mut(&mut world)
            .items
            .push(item_at(0.0, PLAYFIELD_HEIGHT - 1.0, 5.0, 50));
        let events = advance(&mut world, 16.0);
        assert!(events.is_empty());
        assert_eq!(world.score, 0);
        assert!(catch_state(&world).items.is_empty());
    }

    #[test]
    fn test_bucket_catches_on_overlap() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        world.frame = 1;
        let paddle_top = world.paddle.pos.y;
        // Item edge just clears the paddle's left corner horizontally
        let x = world.paddle.pos.x - ITEM_SIZE + 1.0;
        {
            let items = &mut catch_state_mut(&mut world).items;
            items.push(item_at(x, paddle_top - ITEM_SIZE, 2.0, 50));
            items.push(item_at(0.0, 100.0, 2.0, 100));
        }
        let events = advance(&mut world, 16.0);
        assert_eq!(world.score, 50);
        assert_eq!(events, vec![GameEvent::Sound(SoundEvent::Coin)]);
        assert_eq!(catch_state(&world).items.len(), 1);
        assert_eq!(world.particles.len(), BURST_SIZE);
    }

    #[test]
    fn test_item_merely_touching_is_not_caught() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Catch);
        world.frame = 1;
        let paddle_top = world.paddle.pos.y;
        let x = world.paddle.pos.x;
        catch_state_mut(&mut world)
            .items
            .push(item_at(x, paddle_top - ITEM_SIZE - 2.0, 2.0, 50));
        advance(&mut world, 16.0);
        assert_eq!(world.score, 0);
        assert_eq!(catch_state(&world).items.len(), 1);
    }
}
