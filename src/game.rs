//! Session state machine and frame driver
//!
//! [`Game`] owns the [`World`] and moves between menu, playing and game-over.
//! The host calls [`Game::frame`] once per display refresh and dispatches the
//! returned events to audio and UI.

use crate::sim::{
    GameEvent, GameMode, GamePhase, InputState, SoundEvent, TickInput, World, autopilot, tick,
};
use crate::tuning::Tuning;

/// One player session across any number of runs
#[derive(Debug, Clone)]
pub struct Game {
    phase: GamePhase,
    /// Selected mode, kept across restarts and menu visits
    mode: GameMode,
    pub world: World,
    pub input: InputState,
    /// Host timestamp of the previous frame
    last_time: f64,
    /// Let the simulation steer the paddle
    pub autopilot: bool,
}

impl Game {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mode = GameMode::default();
        Self {
            phase: GamePhase::Menu,
            mode,
            world: World::new(tuning, seed, mode),
            input: InputState::default(),
            last_time: 0.0,
            autopilot: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u64 {
        self.world.score
    }

    /// Catch-mode seconds remaining, as the HUD shows them
    pub fn timer_display(&self) -> Option<u64> {
        match &self.world.arena {
            crate::sim::Arena::Catch(state) => Some(state.time_left.ceil() as u64),
            _ => None,
        }
    }

    /// Enter `Playing` for `mode` with a fresh world
    pub fn start(&mut self, mode: GameMode, now_ms: f64) {
        self.mode = mode;
        self.world.reset(mode);
        self.last_time = now_ms;
        self.phase = GamePhase::Playing;
        log::info!("Starting {}", mode.display_name());
    }

    /// Start another run of the current mode
    pub fn restart(&mut self, now_ms: f64) {
        self.start(self.mode, now_ms);
    }

    /// Back to mode select. Entities stay as they were until the next start.
    pub fn return_to_menu(&mut self) {
        self.world.score = 0;
        self.phase = GamePhase::Menu;
        log::info!("Returned to menu");
    }

    /// Advance one displayed frame.
    ///
    /// Does nothing outside `Playing`. Elapsed time is measured from the
    /// previous frame (or from `start`) and never negative.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing {
            return Vec::new();
        }

        let dt_ms = (now_ms - self.last_time).max(0.0);
        self.last_time = now_ms;
        self.world.frame += 1;

        let input = self.tick_input();
        let mut events = tick(&mut self.world, &input, dt_ms);
        self.world.particles.update();

        if events.contains(&GameEvent::GameOver) {
            events.retain(|e| *e != GameEvent::GameOver);
            events.push(GameEvent::Sound(SoundEvent::GameOver));
            events.push(GameEvent::GameOver);
            self.phase = GamePhase::GameOver;
            log::info!(
                "{} over: {} {}",
                self.mode.display_name(),
                self.mode.hud_label(),
                self.mode.format_score(self.world.score)
            );
        }

        events
    }

    fn tick_input(&self) -> TickInput {
        if self.autopilot {
            autopilot(&self.world)
        } else {
            self.input.snapshot()
        }
    }
}
