//! Hurdle entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent};

    use hurdle::renderer::CanvasRenderer;
    use hurdle::{LoopDriver, StartOutcome, StatusMessage, Tuning};

    /// Game instance holding all state
    struct Game {
        driver: LoopDriver,
        renderer: Option<CanvasRenderer>,
        /// Pending requestAnimationFrame handle
        frame_handle: Option<i32>,
        last_score: Option<u32>,
    }

    impl Game {
        fn new() -> Self {
            Self {
                driver: LoopDriver::new(Tuning::default()),
                renderer: None,
                frame_handle: None,
                last_score: None,
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                if let Err(e) = renderer.render(&self.driver.snapshot()) {
                    log::warn!("Render error: {:?}", e);
                }
            }
        }

        /// Update score and status text in the DOM
        fn update_hud(&mut self, document: &Document) {
            let score = self.driver.state().score();
            if self.last_score != Some(score) {
                if let Some(el) = document.get_element_by_id("score") {
                    el.set_text_content(Some(&format!("Score: {}", score)));
                }
                self.last_score = Some(score);
            }

            let status = self.driver.status();
            if let Some(el) = document.get_element_by_id("instructions") {
                match status {
                    StatusMessage::Loading | StatusMessage::Instructions => {
                        el.set_text_content(Some(&status.text()));
                        set_class(&el, "");
                    }
                    _ => set_class(&el, "hidden"),
                }
            }
            if let Some(el) = document.get_element_by_id("gameOver") {
                if let StatusMessage::GameOver { .. } = status {
                    el.set_text_content(Some(&status.text()));
                    set_class(&el, "");
                } else {
                    set_class(&el, "hidden");
                }
            }
        }
    }

    fn set_class(el: &Element, class: &str) {
        if let Err(e) = el.set_attribute("class", class) {
            log::warn!("Failed to set class on #{}: {:?}", el.id(), e);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Hurdle starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game::new()));

        // Count decoded sprites; redraw once they are all in
        let on_load = {
            let game = game.clone();
            let document = document.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                if g.driver.asset_loaded() {
                    g.render();
                }
                g.update_hud(&document);
            })
        };
        let renderer = CanvasRenderer::new(&canvas, on_load.as_ref().unchecked_ref())?;
        on_load.forget();

        {
            let mut g = game.borrow_mut();
            g.renderer = Some(renderer);
            g.render();
            g.update_hud(&document);
        }

        setup_input_handlers(game)?;

        log::info!("Hurdle ready");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let handler = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() != "Space" {
                return;
            }
            event.prevent_default();

            let seed = js_sys::Date::now() as u64;
            let outcome = handler.borrow_mut().driver.press(seed);
            match outcome {
                Some(StartOutcome::Started) => restart_loop(handler.clone()),
                Some(StartOutcome::Deferred) => refresh_hud(&handler),
                _ => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn refresh_hud(game: &Rc<RefCell<Game>>) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            game.borrow_mut().update_hud(&document);
        }
    }

    /// Drop any frame still pending from an earlier run, then schedule a new one
    fn restart_loop(game: Rc<RefCell<Game>>) {
        let pending = game.borrow_mut().frame_handle.take();
        if let (Some(handle), Some(window)) = (pending, web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
        refresh_hud(&game);
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle_owner = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => handle_owner.borrow_mut().frame_handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.frame_handle = None;
            let keep_going = g.driver.frame();
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
            keep_going
        };

        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hurdle (native) starting...");
    log::info!("Native mode runs a headless session - build for wasm32 to play in the browser");

    let tuning = match std::env::var("HURDLE_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| hurdle::Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => hurdle::Tuning::default(),
    };
    let seed = std::env::var("HURDLE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(12345);

    let (score, ticks) = headless_run(tuning, seed);
    println!("Seed {}: score {} after {} ticks", seed, score, ticks);
}

/// Play one session with a simple reflex: jump when the next obstacle is close
#[cfg(not(target_arch = "wasm32"))]
fn headless_run(tuning: hurdle::Tuning, seed: u64) -> (u32, u64) {
    use hurdle::sim::GameEvent;
    use hurdle::{LoopDriver, StartOutcome};

    // Give up eventually; a perfect run would never end
    const MAX_TICKS: u64 = 100_000;

    let mut driver = LoopDriver::with_asset_count(tuning, 0);
    if driver.try_start(seed) != StartOutcome::Started {
        log::error!("Session did not start");
        return (0, 0);
    }

    while driver.state().progress.time_ticks < MAX_TICKS {
        let state = driver.state();
        let player = state.player.bounds(&state.tuning);
        // Trigger distance grows with speed so the jump apex lines up
        let trigger = state.progress.speed * 12.0;
        let threat = state
            .obstacles()
            .iter()
            .map(|o| o.bounds())
            .find(|b| b.right() > player.left());
        if let Some(b) = threat {
            if b.left() - player.right() < trigger {
                driver.jump();
            }
        }

        if !driver.frame() {
            break;
        }
        for event in driver.events() {
            if let GameEvent::SpeedUp { speed, .. } = event {
                log::info!("Speed {} at tick {}", speed, driver.state().progress.time_ticks);
            }
        }
    }

    (driver.state().score(), driver.state().progress.time_ticks)
}
