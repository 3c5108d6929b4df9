//! Cosmetic particle bursts
//!
//! Bursts are spawned by the rules engine on scoring events and decay on
//! their own, independent of the active mode. Particles never touch
//! gameplay state.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Particle, ParticleColor};
use crate::tuning::ParticleTuning;

/// Live particles plus the burst parameters they were configured with
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    burst_size: usize,
    spread: f32,
    decay: f32,
    max_particles: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(&ParticleTuning::default())
    }
}

impl ParticleSystem {
    pub fn new(tuning: &ParticleTuning) -> Self {
        Self {
            particles: Vec::with_capacity(tuning.max_particles),
            burst_size: tuning.burst_size,
            spread: tuning.spread,
            decay: tuning.decay,
            max_particles: tuning.max_particles.max(tuning.burst_size),
        }
    }

    /// Emit one full burst at `pos`, each particle with a random velocity
    /// in both axes and full life.
    ///
    /// When the cap is reached the oldest particles make room; a burst is
    /// never shortened.
    pub fn spawn(&mut self, rng: &mut Pcg32, pos: Vec2, color: ParticleColor) {
        let overflow = (self.particles.len() + self.burst_size).saturating_sub(self.max_particles);
        if overflow > 0 {
            self.particles.drain(..overflow.min(self.particles.len()));
        }

        for _ in 0..self.burst_size {
            let vel = Vec2::new(
                (rng.random::<f32>() - 0.5) * self.spread,
                (rng.random::<f32>() - 0.5) * self.spread,
            );
            self.particles.push(Particle {
                pos,
                vel,
                life: 1.0,
                color,
            });
        }
    }

    /// Advance one frame: move, fade, and drop dead particles
    pub fn update(&mut self) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel;
            p.life -= self.decay;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}
