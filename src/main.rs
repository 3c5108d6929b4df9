//! Synergy Arcade entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use synergy_arcade::audio::AudioManager;
    use synergy_arcade::message::{CannedMessages, MessageSource, fallback_message};
    use synergy_arcade::renderer::{RenderState, build_scene};
    use synergy_arcade::sim::{GameEvent, GameMode, GamePhase, SoundEvent};
    use synergy_arcade::{Game, GameError, Settings, Tuning};

    /// Everything the page loop touches
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        audio: AudioManager,
        settings: Settings,
        /// Phase shown by the DOM overlays
        shown_phase: Option<GamePhase>,
    }

    impl App {
        /// Run one frame and dispatch its events
        fn update(&mut self, time: f64) {
            let events = self.game.frame(time);
            for event in events {
                match event {
                    GameEvent::Sound(sound) => self.audio.play(sound),
                    GameEvent::GameOver => self.show_game_over(),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            let vertices = build_scene(&self.game.world, &self.settings);
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = dom() else { return };
            let mode = self.game.mode();

            set_text(&document, "hud-label", mode.hud_label());
            set_text(&document, "hud-score", &mode.format_score(self.game.score()));
            match self.game.timer_display() {
                Some(secs) => {
                    set_text(&document, "hud-timer", &secs.to_string());
                    set_hidden(&document, "hud-timer", false);
                }
                None => set_hidden(&document, "hud-timer", true),
            }

            let phase = self.game.phase();
            if self.shown_phase != Some(phase) {
                set_hidden(&document, "menu", phase != GamePhase::Menu);
                set_hidden(&document, "hud", phase == GamePhase::Menu);
                set_hidden(&document, "game-over", phase != GamePhase::GameOver);
                if phase == GamePhase::Menu {
                    highlight_mode(&document, self.settings.last_mode);
                }
                self.shown_phase = Some(phase);
            }
        }

        /// Fill the dialog with the fallback line, then ask for the real one
        fn show_game_over(&self) {
            let Some(document) = dom() else { return };
            let mode = self.game.mode();
            let score = self.game.score();

            set_text(&document, "final-title", mode.display_name());
            set_text(&document, "final-score", &mode.format_score(score));
            set_text(&document, "final-message", &fallback_message(score));

            wasm_bindgen_futures::spawn_local(async move {
                let text = CannedMessages.message(mode, score);
                if let Some(document) = dom() {
                    set_text(&document, "final-message", &text);
                }
            });
        }

        fn start(&mut self, mode: GameMode, now: f64) {
            self.audio.resume();
            self.audio.play(SoundEvent::Click);
            self.game.start(mode, now);
            self.settings.last_mode = mode;
            self.settings.save();
        }
    }

    fn dom() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    /// Mark the last played mode's button and focus it so Enter starts it
    fn highlight_mode(document: &Document, selected: GameMode) {
        for mode in GameMode::ALL {
            let Some(el) = document.get_element_by_id(mode.menu_button_id()) else {
                continue;
            };
            let _ = el.class_list().toggle_with_force("selected", mode == selected);
            if mode == selected {
                if let Ok(btn) = el.dyn_into::<HtmlElement>() {
                    let _ = btn.focus();
                }
            }
        }
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Tuning::default()
            }
        }
    }

    pub async fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {e}").into());
        }

        log::info!("Synergy Arcade starting...");

        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoWindow)?;

        // Hide loading indicator
        set_hidden(&document, "loading", true);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(GameError::MissingElement("canvas"))?
            .dyn_into()
            .map_err(|_| GameError::MissingElement("canvas"))?;

        let tuning = load_tuning(&document);
        let playfield = (tuning.playfield.width, tuning.playfield.height);
        let width = playfield.0 as u32;
        let height = playfield.1 as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(tuning, seed),
            render_state: None,
            audio: AudioManager::new(&settings),
            settings,
            shown_phase: None,
        }));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield).await?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone())?;
        setup_buttons(&document, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Synergy Arcade running!");
        Ok(())
    }

    /// Host x coordinate to playfield units using the canvas' on-screen rect
    fn pointer_x(canvas: &HtmlCanvasElement, client_x: i32, app: &mut App) {
        let rect = canvas.get_bounding_client_rect();
        let field_w = app.game.world.tuning.playfield.width;
        app.game
            .input
            .pointer_move(client_x as f32, rect.left() as f32, rect.width() as f32, field_w);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) -> Result<(), GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;

        // Mouse move - absolute position
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                pointer_x(&canvas_clone, event.client_x(), &mut app.borrow_mut());
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave - fall back to keys
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.input.pointer_leave();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    pointer_x(&canvas_clone, touch.client_x(), &mut app.borrow_mut());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                app.borrow_mut().game.input.touch_end();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "m" | "M" => {
                        a.settings.toggle_mute();
                        let settings = a.settings.clone();
                        a.audio.apply_settings(&settings);
                        settings.save();
                    }
                    "i" | "I" => {
                        a.game.autopilot = !a.game.autopilot;
                        log::info!("Autopilot: {}", a.game.autopilot);
                    }
                    key => a.game.input.key_down(key),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - keyup events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().game.input.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        for mode in GameMode::ALL {
            if let Some(btn) = document.get_element_by_id(mode.menu_button_id()) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    app.borrow_mut().start(mode, js_sys::Date::now());
                });
                let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                let mode = a.game.mode();
                a.start(mode, js_sys::Date::now());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("menu-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.audio.play(SoundEvent::Click);
                a.game.return_to_menu();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, _time: f64) {
        {
            let mut a = app.borrow_mut();
            // Same clock the start buttons use
            a.update(js_sys::Date::now());
            a.render();
            a.update_hud();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Synergy Arcade failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use synergy_arcade::Tuning;

    env_logger::init();
    log::info!("Synergy Arcade (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    // Optional tuning file as the first argument
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::from_json(&std::fs::read_to_string(&path)?)?,
        None => Tuning::default(),
    };

    demo::run_all(tuning);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use synergy_arcade::message::{CannedMessages, MessageSource};
    use synergy_arcade::sim::{GameEvent, GameMode, GamePhase, SoundEvent};
    use synergy_arcade::{Game, Tuning};

    /// 60 Hz host refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Stop a run that the autopilot never loses
    const MAX_FRAMES: u64 = 60 * 90;

    pub fn run_all(tuning: Tuning) {
        for (i, mode) in GameMode::ALL.into_iter().enumerate() {
            let mut game = Game::new(tuning.clone(), 0xA5CADE + i as u64);
            game.autopilot = true;
            game.start(mode, 0.0);

            let mut coins = 0;
            let mut frames = 0;
            while game.phase() == GamePhase::Playing && frames < MAX_FRAMES {
                frames += 1;
                for event in game.frame(frames as f64 * FRAME_MS) {
                    if event == GameEvent::Sound(SoundEvent::Coin) {
                        coins += 1;
                    }
                }
            }

            println!(
                "{:<15} {:>6} {:<10} after {:>5} frames ({} pickups)",
                mode.display_name(),
                mode.hud_label(),
                mode.format_score(game.score()),
                frames,
                coins
            );
            println!("    {}", CannedMessages.message(mode, game.score()));
        }
    }
}
