//! Game state and core simulation types
//!
//! One owned [`World`] holds every entity of the running session. Stages of
//! the frame borrow it exclusively in turn; nothing aliases it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use crate::lerp;
use crate::tuning::Tuning;

/// Which of the three mini-games is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Gravity ball bounced off the paddle ("Classic")
    #[default]
    Bounce,
    /// Auto-fire shooting gallery ("Cash Hunter")
    Shooter,
    /// Timed falling-item catch ("Capital Rain")
    Catch,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Bounce, GameMode::Shooter, GameMode::Catch];

    pub fn display_name(&self) -> &'static str {
        match self {
            GameMode::Bounce => "Synergy Bounce",
            GameMode::Shooter => "Cash Hunter",
            GameMode::Catch => "Capital Rain",
        }
    }

    /// Score caption shown in the HUD
    pub fn hud_label(&self) -> &'static str {
        match self {
            GameMode::Bounce => "SCORE",
            GameMode::Shooter => "CASH",
            GameMode::Catch => "BONUS",
        }
    }

    /// Format a score the way the HUD shows it for this mode
    pub fn format_score(&self, score: u64) -> String {
        match self {
            GameMode::Catch => format!("${score}"),
            _ => score.to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Bounce => "bounce",
            GameMode::Shooter => "shooter",
            GameMode::Catch => "catch",
        }
    }

    /// Id of the mode select button that starts this mode
    pub fn menu_button_id(&self) -> &'static str {
        match self {
            GameMode::Bounce => "start-bounce",
            GameMode::Shooter => "start-shooter",
            GameMode::Catch => "start-catch",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounce" | "classic" => Some(GameMode::Bounce),
            "shooter" => Some(GameMode::Shooter),
            "catch" | "money_rain" => Some(GameMode::Catch),
            _ => None,
        }
    }
}

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Mode select screen
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended, last frame stays on screen under the dialog
    GameOver,
}

/// Named sound triggers, played fire-and-forget by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Ball hits a wall or the ceiling
    Bounce,
    /// Ball hits the paddle (scores a point)
    Score,
    /// A volley leaves the paddle
    Shoot,
    /// A target is shot or an item is caught
    Coin,
    GameOver,
    /// UI button press
    Click,
}

/// Side effects requested by a simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundEvent),
    /// Terminal condition reached; the session must leave `Playing`
    GameOver,
}

/// Target / item category. Carries the display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Shooter banknotes
    Usd,
    Rmb,
    /// Catch tiers, common to rare
    Coin,
    Cash,
    Bag,
    Gem,
}

impl Category {
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Usd => "💵",
            Category::Rmb => "💴",
            Category::Coin => "🪙",
            Category::Cash => "💵",
            Category::Bag => "💰",
            Category::Gem => "💎",
        }
    }
}

/// The player's paddle (the "bucket" in catch mode)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centered horizontally, `floor_gap` above the bottom edge
    pub fn spawn(tuning: &Tuning) -> Self {
        let t = &tuning.paddle;
        Self {
            pos: Vec2::new(
                (tuning.playfield.width - t.width) / 2.0,
                tuning.playfield.height - t.floor_gap,
            ),
            width: t.width,
            height: t.height,
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Keep the paddle fully inside [0, playfield_width]
    pub fn clamp_to(&mut self, playfield_width: f32) {
        let max_x = (playfield_width - self.width).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }
}

/// The bounce-mode ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Near the top center with a random sideways drift
    pub fn spawn(tuning: &Tuning, rng: &mut Pcg32) -> Self {
        use rand::Rng;
        let spread = tuning.bounce.dx_spread;
        Self {
            pos: Vec2::new(tuning.playfield.width / 2.0, tuning.bounce.spawn_y),
            vel: Vec2::new((rng.random::<f32>() - 0.5) * spread, 0.0),
            radius: tuning.bounce.ball_radius,
        }
    }
}

/// A shooter-mode bullet (only moves vertically)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub radius: f32,
    pub dy: f32,
    pub active: bool,
}

/// A falling target (shooter) or item (catch)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Constant fall speed, units per frame
    pub dy: f32,
    pub category: Category,
    pub value: u64,
    pub active: bool,
}

impl Target {
    /// Spawn just above the top edge at a random column
    pub fn spawn(
        rng: &mut Pcg32,
        playfield_width: f32,
        size: f32,
        tier: &crate::tuning::TierTuning,
    ) -> Self {
        use rand::Rng;
        let x = rng.random::<f32>() * (playfield_width - size).max(0.0);
        let dy = lerp(tier.speed_min, tier.speed_max, rng.random::<f32>());
        Self {
            pos: Vec2::new(x, -size),
            width: size,
            height: size,
            dy,
            category: tier.category,
            value: tier.value,
            active: true,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn glyph(&self) -> &'static str {
        self.category.glyph()
    }
}

/// Which palette entry a particle burst uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Paddle impact in bounce mode
    RedDot,
    /// Coin pickup / target hit
    Gold,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f32,
    pub color: ParticleColor,
}

/// Bounce-mode entities
#[derive(Debug, Clone)]
pub struct BounceState {
    pub ball: Ball,
}

/// Shooter-mode entities
#[derive(Debug, Clone, Default)]
pub struct ShooterState {
    pub bullets: Vec<Bullet>,
    pub targets: Vec<Target>,
}

/// Catch-mode entities
#[derive(Debug, Clone, Default)]
pub struct CatchState {
    pub items: Vec<Target>,
    /// Seconds remaining, never negative
    pub time_left: f64,
}

/// Mode-specific entities. Only the active mode's collections exist.
#[derive(Debug, Clone)]
pub enum Arena {
    Bounce(BounceState),
    Shooter(ShooterState),
    Catch(CatchState),
}

impl Arena {
    pub fn mode(&self) -> GameMode {
        match self {
            Arena::Bounce(_) => GameMode::Bounce,
            Arena::Shooter(_) => GameMode::Shooter,
            Arena::Catch(_) => GameMode::Catch,
        }
    }
}

/// Complete session state, owned by the game driver
#[derive(Debug, Clone)]
pub struct World {
    pub tuning: Tuning,
    pub rng: Pcg32,
    pub paddle: Paddle,
    /// Session score, only ever grows between resets
    pub score: u64,
    /// Frames advanced since the last reset
    pub frame: u64,
    pub particles: ParticleSystem,
    pub arena: Arena,
}

impl World {
    /// Create a world already reset for `mode`
    pub fn new(mut tuning: Tuning, seed: u64, mode: GameMode) -> Self {
        tuning.sanitize();
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::spawn(&tuning);
        let arena = Self::fresh_arena(&tuning, &mut rng, mode);
        let particles = ParticleSystem::new(&tuning.particles);
        Self {
            tuning,
            rng,
            paddle,
            score: 0,
            frame: 0,
            particles,
            arena,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.arena.mode()
    }

    /// Reinitialize every entity for `mode` and zero the score.
    ///
    /// Collections belonging to other modes are dropped.
    pub fn reset(&mut self, mode: GameMode) {
        self.frame = 0;
        self.score = 0;
        self.particles.clear();
        self.paddle = Paddle::spawn(&self.tuning);
        self.arena = Self::fresh_arena(&self.tuning, &mut self.rng, mode);
        log::debug!("World reset for {}", mode.display_name());
    }

    fn fresh_arena(tuning: &Tuning, rng: &mut Pcg32, mode: GameMode) -> Arena {
        match mode {
            GameMode::Bounce => Arena::Bounce(BounceState {
                ball: Ball::spawn(tuning, rng),
            }),
            GameMode::Shooter => Arena::Shooter(ShooterState::default()),
            GameMode::Catch => Arena::Catch(CatchState {
                items: Vec::new(),
                time_left: tuning.catch.duration_secs,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_paddle_spawns_centered_near_floor() {
        let paddle = Paddle::spawn(&Tuning::default());
        assert_eq!(paddle.pos.x, (PLAYFIELD_WIDTH - PADDLE_WIDTH) / 2.0);
        assert_eq!(paddle.pos.y, PLAYFIELD_HEIGHT - PADDLE_FLOOR_GAP);
        assert_eq!(paddle.center_x(), PLAYFIELD_WIDTH / 2.0);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::spawn(&Tuning::default());
        paddle.pos.x = -50.0;
        paddle.clamp_to(PLAYFIELD_WIDTH);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.pos.x = 10_000.0;
        paddle.clamp_to(PLAYFIELD_WIDTH);
        assert_eq!(paddle.right(), PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_ball_spawn_drift_in_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let ball = Ball::spawn(&tuning, &mut rng);
            assert!(ball.vel.x >= -BALL_DX_SPREAD / 2.0 && ball.vel.x < BALL_DX_SPREAD / 2.0);
            assert_eq!(ball.vel.y, 0.0);
            assert_eq!(ball.pos, Vec2::new(PLAYFIELD_WIDTH / 2.0, BALL_SPAWN_Y));
        }
    }

    #[test]
    fn test_reset_clears_other_modes() {
        let mut world = World::new(Tuning::default(), 1, GameMode::Shooter);
        world.score = 42;
        world.frame = 99;
        if let Arena::Shooter(s) = &mut world.arena {
            s.bullets.push(Bullet {
                pos: Vec2::ZERO,
                radius: 6.0,
                dy: -15.0,
                active: true,
            });
        }

        world.reset(GameMode::Catch);
        assert_eq!(world.score, 0);
        assert_eq!(world.frame, 0);
        assert!(world.particles.is_empty());
        match &world.arena {
            Arena::Catch(c) => {
                assert!(c.items.is_empty());
                assert_eq!(c.time_left, CATCH_DURATION_SECS);
            }
            other => panic!("expected catch arena, got {:?}", other.mode()),
        }
    }

    #[test]
    fn test_reset_is_repeatable() {
        let mut world = World::new(Tuning::default(), 3, GameMode::Bounce);
        world.reset(GameMode::Shooter);
        world.reset(GameMode::Shooter);
        assert_eq!(world.mode(), GameMode::Shooter);
        assert_eq!(world.score, 0);
        let Arena::Shooter(s) = &world.arena else {
            panic!("expected shooter arena");
        };
        assert!(s.bullets.is_empty() && s.targets.is_empty());
    }

    #[test]
    fn test_target_spawn_within_columns() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let tier = &tuning.shooter.targets[0];
        for _ in 0..200 {
            let t = Target::spawn(&mut rng, PLAYFIELD_WIDTH, TARGET_SIZE, tier);
            assert!(t.pos.x >= 0.0 && t.pos.x + t.width <= PLAYFIELD_WIDTH);
            assert_eq!(t.pos.y, -TARGET_SIZE);
            assert!(t.dy >= TARGET_SPEED_MIN && t.dy <= TARGET_SPEED_MAX);
            assert!(t.active);
        }
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(GameMode::Catch.format_score(50), "$50");
        assert_eq!(GameMode::Shooter.format_score(50), "50");
        assert_eq!(GameMode::from_str("Classic"), Some(GameMode::Bounce));
        for mode in GameMode::ALL {
            assert_eq!(GameMode::from_str(mode.as_str()), Some(mode));
            assert!(mode.menu_button_id().ends_with(mode.as_str()));
        }
    }
}
