//! Data-driven game balance
//!
//! Every constant the rules engine reads lives here so a JSON document can
//! rebalance a mode without recompiling. Missing keys fall back to the
//! defaults in [`crate::consts`], so a partial document only overrides what
//! it names.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::Category;

/// Playfield extent in logical units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayfieldTuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Paddle geometry and steering
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleTuning {
    pub width: f32,
    pub height: f32,
    /// Distance from the paddle top to the floor
    pub floor_gap: f32,
    pub key_speed: f32,
    pub pointer_easing: f32,
}

impl Default for PaddleTuning {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            floor_gap: PADDLE_FLOOR_GAP,
            key_speed: PADDLE_KEY_SPEED,
            pointer_easing: POINTER_EASING,
        }
    }
}

/// Classic bounce mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceTuning {
    pub ball_radius: f32,
    pub spawn_y: f32,
    pub dx_spread: f32,
    pub gravity: f32,
    pub wall_restitution: f32,
    pub ceiling_restitution: f32,
    pub paddle_boost: f32,
    pub max_rebound_speed: f32,
    pub english_factor: f32,
}

impl Default for BounceTuning {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            spawn_y: BALL_SPAWN_Y,
            dx_spread: BALL_DX_SPREAD,
            gravity: GRAVITY,
            wall_restitution: WALL_RESTITUTION,
            ceiling_restitution: CEILING_RESTITUTION,
            paddle_boost: PADDLE_BOOST,
            max_rebound_speed: MAX_REBOUND_SPEED,
            english_factor: ENGLISH_FACTOR,
        }
    }
}

/// One entry of a weighted spawn table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierTuning {
    pub category: Category,
    pub value: u64,
    /// Relative draw weight (normalized against the table total)
    pub weight: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl TierTuning {
    fn new(category: Category, value: u64, weight: f32, speed: (f32, f32)) -> Self {
        Self {
            category,
            value,
            weight,
            speed_min: speed.0,
            speed_max: speed.1,
        }
    }
}

/// Pick a tier from a weighted table using a uniform roll in [0, 1).
///
/// Tiers are walked in table order, so listing the rare tiers first
/// reproduces a "rarest threshold wins" draw. Returns `None` only for an
/// empty table.
pub fn pick_tier(tiers: &[TierTuning], roll: f32) -> Option<&TierTuning> {
    let total: f32 = tiers.iter().map(|t| t.weight.max(0.0)).sum();
    if total <= 0.0 {
        return tiers.first();
    }
    let target = roll.clamp(0.0, 1.0) * total;
    let mut cumulative = 0.0;
    for tier in tiers {
        cumulative += tier.weight.max(0.0);
        if target < cumulative {
            return Some(tier);
        }
    }
    tiers.last()
}

/// Shooter (Cash Hunter) mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterTuning {
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Frames between volleys
    pub fire_rate: u64,
    /// Emitter distance from each paddle edge
    pub emitter_inset: f32,
    pub target_size: f32,
    /// Frames between target spawns
    pub spawn_rate: u64,
    pub targets: Vec<TierTuning>,
}

impl Default for ShooterTuning {
    fn default() -> Self {
        let speed = (TARGET_SPEED_MIN, TARGET_SPEED_MAX);
        Self {
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            fire_rate: FIRE_RATE,
            emitter_inset: EMITTER_INSET,
            target_size: TARGET_SIZE,
            spawn_rate: TARGET_SPAWN_RATE,
            targets: vec![
                TierTuning::new(Category::Rmb, 20, 0.5, speed),
                TierTuning::new(Category::Usd, 10, 0.5, speed),
            ],
        }
    }
}

/// Catch (Capital Rain) mode
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatchTuning {
    pub duration_secs: f64,
    /// Frames between item spawns
    pub spawn_rate: u64,
    pub item_size: f32,
    /// Rarest first
    pub tiers: Vec<TierTuning>,
}

impl Default for CatchTuning {
    fn default() -> Self {
        let speed = (ITEM_SPEED_MIN, ITEM_SPEED_MAX);
        Self {
            duration_secs: CATCH_DURATION_SECS,
            spawn_rate: ITEM_SPAWN_RATE,
            item_size: ITEM_SIZE,
            tiers: vec![
                TierTuning::new(Category::Gem, 100, 0.02, speed),
                TierTuning::new(Category::Bag, 50, 0.08, speed),
                TierTuning::new(Category::Cash, 10, 0.3, speed),
                TierTuning::new(Category::Coin, 1, 0.6, speed),
            ],
        }
    }
}

/// Cosmetic particle bursts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleTuning {
    pub burst_size: usize,
    /// Velocity per axis is drawn from [-spread/2, spread/2)
    pub spread: f32,
    /// Life lost per frame
    pub decay: f32,
    pub max_particles: usize,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            burst_size: BURST_SIZE,
            spread: PARTICLE_SPREAD,
            decay: PARTICLE_DECAY,
            max_particles: MAX_PARTICLES,
        }
    }
}

/// Complete balance sheet for all three modes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield: PlayfieldTuning,
    pub paddle: PaddleTuning,
    pub bounce: BounceTuning,
    pub shooter: ShooterTuning,
    pub catch: CatchTuning,
    pub particles: ParticleTuning,
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Repair values that would stall the simulation
    pub(crate) fn sanitize(&mut self) {
        // Cadences are used as `frame % rate`
        self.shooter.fire_rate = self.shooter.fire_rate.max(1);
        self.shooter.spawn_rate = self.shooter.spawn_rate.max(1);
        self.catch.spawn_rate = self.catch.spawn_rate.max(1);
        // Expiry is the only way a catch run ends
        if self.catch.duration_secs.is_nan() || self.catch.duration_secs <= 0.0 {
            log::warn!("Catch duration must be positive, using default");
            self.catch.duration_secs = CATCH_DURATION_SECS;
        }
        self.paddle.pointer_easing = self.paddle.pointer_easing.clamp(0.0, 1.0);
        self.paddle.width = self.paddle.width.min(self.playfield.width);
        if self.particles.decay <= 0.0 {
            log::warn!("Particle decay must be positive, using default");
            self.particles.decay = PARTICLE_DECAY;
        }
    }
}
