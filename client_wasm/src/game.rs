//! `DinoGame`: engine + canvas + requestAnimationFrame loop

use crate::input::{get_key_from_event, should_prevent_default};
use crate::painter::paint;
use crate::schedule::FrameSchedule;
use game_core::{Config, Engine};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

type FrameCallback = Closure<dyn FnMut(f64)>;
type KeyCallback = Closure<dyn FnMut(KeyboardEvent)>;

struct Host {
    engine: Engine,
    ctx: CanvasRenderingContext2d,
    on_game_over: Option<js_sys::Function>,
    caption: String,
}

type SharedHost = Rc<RefCell<Host>>;

#[wasm_bindgen]
pub struct DinoGame {
    host: SharedHost,
    frame_loop: Rc<RefCell<Option<FrameCallback>>>,
    schedule: Rc<FrameSchedule>,
    keydown: Option<KeyCallback>,
}

#[wasm_bindgen]
impl DinoGame {
    /// Game on `canvas` with default tuning; `seed` is random when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, seed: Option<f64>) -> Result<DinoGame, JsValue> {
        Self::build(canvas, seed, Config::new())
    }

    /// Game with a (partial) JSON config override
    pub fn with_config(
        canvas: HtmlCanvasElement,
        seed: Option<f64>,
        config_json: &str,
    ) -> Result<DinoGame, JsValue> {
        let config = Config::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(canvas, seed, config)
    }

    fn build(
        canvas: HtmlCanvasElement,
        seed: Option<f64>,
        config: Config,
    ) -> Result<DinoGame, JsValue> {
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let seed = seed.unwrap_or_else(|| js_sys::Math::random() * u32::MAX as f64) as u64;
        log::info!("dino game created (seed {seed})");

        let engine = Engine::new(config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let caption = engine.render().caption;
        let game = DinoGame {
            host: Rc::new(RefCell::new(Host {
                engine,
                ctx,
                on_game_over: None,
                caption,
            })),
            frame_loop: Rc::new(RefCell::new(None)),
            schedule: Rc::new(FrameSchedule::default()),
            keydown: None,
        };
        game.render()?;
        Ok(game)
    }

    pub fn start(&self) {
        self.host.borrow_mut().engine.start();
    }

    pub fn jump(&self) {
        self.host.borrow_mut().engine.jump();
    }

    pub fn reset(&self) {
        self.host.borrow_mut().engine.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.host.borrow().engine.score()
    }

    /// "Idle", "Running" or "Over"
    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> String {
        format!("{:?}", self.host.borrow().engine.phase())
    }

    /// Status line for the current phase
    #[wasm_bindgen(getter)]
    pub fn caption(&self) -> String {
        self.host.borrow().caption.clone()
    }

    /// Current state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.host.borrow().engine.snapshot())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Called with the final score, once per session
    pub fn set_on_game_over(&self, callback: Option<js_sys::Function>) {
        self.host.borrow_mut().on_game_over = callback;
    }

    /// Paint the current state without advancing it
    pub fn render(&self) -> Result<(), JsValue> {
        let mut host = self.host.borrow_mut();
        let frame = host.engine.render();
        paint(&host.ctx, &frame)?;
        host.caption = frame.caption;
        Ok(())
    }

    /// Listen for the control keys and start the animation loop
    pub fn run(&mut self) -> Result<(), JsValue> {
        if self.schedule.is_running() {
            return Ok(());
        }
        let window = window()?;

        if self.keydown.is_none() {
            let host = Rc::clone(&self.host);
            let keydown = KeyCallback::new(move |event: KeyboardEvent| {
                let key = get_key_from_event(&event);
                if should_prevent_default(&key) {
                    event.prevent_default();
                }
                if let Some(action) = host.borrow_mut().engine.handle_key(&key) {
                    log::debug!("key {key:?} -> {action:?}");
                }
            });
            window
                .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
            self.keydown = Some(keydown);
        }

        if self.frame_loop.borrow().is_none() {
            let callback = frame_callback(
                Rc::clone(&self.host),
                Rc::downgrade(&self.frame_loop),
                Rc::clone(&self.schedule),
            );
            *self.frame_loop.borrow_mut() = Some(callback);
        }

        if let Some(callback) = self.frame_loop.borrow().as_ref() {
            let id = request_frame(&window, callback)?;
            self.schedule.start();
            self.schedule.scheduled(id);
        }
        log::info!("frame loop started");
        Ok(())
    }

    /// Cancel the pending frame and stop listening for keys
    pub fn stop(&mut self) -> Result<(), JsValue> {
        let pending = self.schedule.stop();
        let window = window()?;

        if let Some(id) = pending {
            window.cancel_animation_frame(id)?;
        }
        if let Some(keydown) = self.keydown.take() {
            window.remove_event_listener_with_callback(
                "keydown",
                keydown.as_ref().unchecked_ref(),
            )?;
        }
        log::info!("frame loop stopped");
        Ok(())
    }
}

impl Drop for DinoGame {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log::warn!("stopping dropped game: {err:?}");
        }
    }
}

/// One display refresh; the game-over callback runs after the host borrow is
/// released so it may call back into the game.
fn advance(host: &SharedHost, now_ms: f64) -> Result<(), JsValue> {
    let (final_score, callback) = {
        let mut host = host.borrow_mut();
        let frame = host.engine.frame(now_ms);
        paint(&host.ctx, &frame)?;
        host.caption = frame.caption;
        (host.engine.take_game_over(), host.on_game_over.clone())
    };

    if let (Some(score), Some(callback)) = (final_score, callback) {
        callback.call1(&JsValue::NULL, &JsValue::from(score))?;
    }
    Ok(())
}

/// The rAF callback reschedules itself through a weak handle, so dropping
/// the game releases it.
fn frame_callback(
    host: SharedHost,
    frame_loop: Weak<RefCell<Option<FrameCallback>>>,
    schedule: Rc<FrameSchedule>,
) -> FrameCallback {
    FrameCallback::new(move |now_ms: f64| {
        if !schedule.on_frame() {
            return;
        }
        if let Err(err) = advance(&host, now_ms) {
            log::error!("frame failed: {err:?}");
        }
        // The game-over callback may have stopped or restarted the loop
        if !schedule.wants_next() {
            return;
        }

        let Some(frame_loop) = frame_loop.upgrade() else {
            return;
        };
        let next = match (window(), frame_loop.borrow().as_ref()) {
            (Ok(window), Some(callback)) => request_frame(&window, callback).map(Some),
            (Err(err), _) => Err(err),
            (Ok(_), None) => Ok(None),
        };
        match next {
            Ok(Some(id)) => schedule.scheduled(id),
            Ok(None) => {}
            Err(err) => {
                log::error!("could not schedule next frame: {err:?}");
                schedule.failed();
            }
        }
    })
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No global window"))
}
