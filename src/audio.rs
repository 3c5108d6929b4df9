//! Audio system using Web Audio API
//!
//! Every sound is a short oscillator blip - no external files needed.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::SoundEvent;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: settings.effective_volume(),
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_volume();
    }

    /// Play a sound effect. Silently does nothing without a context.
    pub fn play(&self, event: SoundEvent) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match event {
            SoundEvent::Click => self.tone(ctx, OscillatorType::Sine, 800.0, 0.0, 0.1, vol * 0.05),
            SoundEvent::Bounce => {
                self.tone(ctx, OscillatorType::Triangle, 200.0, 0.0, 0.1, vol * 0.1)
            }
            SoundEvent::Score => self.play_chime(ctx, vol),
            SoundEvent::Shoot => self.play_shoot(ctx, vol),
            SoundEvent::Coin => {
                self.tone(ctx, OscillatorType::Sine, 1200.0, 0.0, 0.1, vol * 0.05);
                self.tone(ctx, OscillatorType::Sine, 1600.0, 0.05, 0.2, vol * 0.05);
            }
            SoundEvent::GameOver => self.play_game_over(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Fixed-pitch blip decaying exponentially, starting `delay` seconds from now
    fn tone(
        &self,
        ctx: &AudioContext,
        osc_type: OscillatorType,
        freq: f32,
        delay: f64,
        duration: f64,
        peak: f32,
    ) {
        let Some((osc, gain)) = self.create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time() + delay;

        gain.gain().set_value_at_time(peak, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + duration).ok();
    }

    /// Paddle hit - C5 then G5
    fn play_chime(&self, ctx: &AudioContext, vol: f32) {
        self.tone(ctx, OscillatorType::Sine, 523.25, 0.0, 0.3, vol * 0.1);
        self.tone(ctx, OscillatorType::Sine, 783.99, 0.05, 0.3, vol * 0.05);
    }

    /// Volley - square sweep down
    fn play_shoot(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 800.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.05, t).ok();
        gain.gain().linear_ramp_to_value_at_time(0.001, t + 0.1).ok();
        osc.frequency().set_value_at_time(800.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(100.0, t + 0.1)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }

    /// Game over - descending sawtooth
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain().linear_ramp_to_value_at_time(0.01, t + 0.5).ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency().linear_ramp_to_value_at_time(50.0, t + 0.5).ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.5).ok();
    }
}
