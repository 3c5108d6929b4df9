//! Synergy Arcade - three corporate-themed arcade modes on one canvas
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entities, collisions, particles, scoring)
//! - `game`: Session state machine and frame driver
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (LocalStorage on web)
//! - `message`: Game-over flavor text

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod game;
pub mod message;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (render surface is 800x600 units)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - sits 80 units above the floor
    pub const PADDLE_WIDTH: f32 = 160.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_FLOOR_GAP: f32 = 80.0;
    /// Units per frame while a direction key is held
    pub const PADDLE_KEY_SPEED: f32 = 12.0;
    /// Fraction of the remaining distance to the pointer covered each frame
    pub const POINTER_EASING: f32 = 0.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_SPAWN_Y: f32 = 100.0;
    /// Initial horizontal speed is drawn from [-spread/2, spread/2)
    pub const BALL_DX_SPREAD: f32 = 8.0;
    pub const GRAVITY: f32 = 0.4;
    pub const WALL_RESTITUTION: f32 = 0.8;
    pub const CEILING_RESTITUTION: f32 = 0.6;
    /// Rebound speed multiplier on paddle contact
    pub const PADDLE_BOOST: f32 = 1.05;
    /// Upward speed cap after a paddle rebound
    pub const MAX_REBOUND_SPEED: f32 = 20.0;
    /// Horizontal speed per unit of offset from paddle center
    pub const ENGLISH_FACTOR: f32 = 0.15;

    /// Shooter defaults
    pub const BULLET_SPEED: f32 = -15.0;
    pub const BULLET_RADIUS: f32 = 6.0;
    pub const FIRE_RATE: u64 = 10;
    pub const EMITTER_INSET: f32 = 20.0;
    pub const TARGET_SIZE: f32 = 40.0;
    pub const TARGET_SPEED_MIN: f32 = 1.0;
    pub const TARGET_SPEED_MAX: f32 = 3.0;
    pub const TARGET_SPAWN_RATE: u64 = 40;

    /// Catch defaults
    pub const CATCH_DURATION_SECS: f64 = 60.0;
    pub const ITEM_SPAWN_RATE: u64 = 15;
    pub const ITEM_SIZE: f32 = 35.0;
    pub const ITEM_SPEED_MIN: f32 = 2.0;
    pub const ITEM_SPEED_MAX: f32 = 6.0;

    /// Particle defaults
    pub const BURST_SIZE: usize = 10;
    pub const PARTICLE_SPREAD: f32 = 10.0;
    pub const PARTICLE_DECAY: f32 = 0.05;
    pub const MAX_PARTICLES: usize = 256;
}

/// Linear interpolation between `min` and `max` by `t` in [0, 1)
#[inline]
pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}
