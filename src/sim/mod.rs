//! Simulation module
//!
//! All gameplay logic lives here. This module stays pure:
//! - Seeded RNG only
//! - Side effects are returned as [`GameEvent`]s, never performed
//! - No rendering or platform dependencies

pub mod bounce;
pub mod catch;
pub mod collision;
pub mod input;
pub mod particles;
pub mod shooter;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_touches_paddle};
pub use input::{InputState, TickInput, steer_paddle};
pub use particles::ParticleSystem;
pub use state::{
    Arena, Ball, BounceState, Bullet, CatchState, Category, GameEvent, GameMode, GamePhase,
    Paddle, Particle, ParticleColor, ShooterState, SoundEvent, Target, World,
};
pub use tick::{autopilot, tick};
