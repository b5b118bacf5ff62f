//! Browser host
//!
//! Wires a [`Session`] to the page: a 2D canvas, `<img>`/`<audio>` elements
//! looked up by asset name, LocalStorage, and the HUD elements. The run
//! starts from the play button; the frame loop is driven by
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement,
    HtmlMediaElement, KeyboardEvent, MouseEvent,
};

use crate::Session;
use crate::audio::{AudioSink, SoundEffect};
use crate::persistence::LocalStorageStore;
use crate::platform::{FrameClock, init_logging, now_ms};
use crate::renderer::{DrawSurface, Hsl, Sprite};
use crate::settings::Settings;

const CANVAS_ID: &str = "game-canvas";

type WebSession = Session<DomAudio, LocalStorageStore>;

thread_local! {
    static GAME: RefCell<Option<WebGame>> = const { RefCell::new(None) };
}

fn with_game(f: impl FnOnce(&mut WebGame)) {
    GAME.with_borrow_mut(|game| {
        if let Some(game) = game.as_mut() {
            f(game);
        }
    });
}

fn js_error(message: &str) -> JsValue {
    JsValue::from_str(message)
}

/// Plays the page's `<audio>` elements (`music`, `<name>-sound`)
struct DomAudio {
    document: Document,
}

impl DomAudio {
    fn element_id(effect: SoundEffect) -> String {
        if effect.is_music() {
            effect.asset_name()
        } else {
            format!("{}-sound", effect.asset_name())
        }
    }
}

impl AudioSink for DomAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        let id = Self::element_id(effect);
        let Some(media) = self
            .document
            .get_element_by_id(&id)
            .and_then(|e| e.dyn_into::<HtmlMediaElement>().ok())
        else {
            log::warn!("No audio element #{}", id);
            return;
        };
        media.set_volume(volume as f64);
        media.set_loop(effect.is_music());
        if let Err(e) = media.play() {
            log::warn!("Failed to play #{}: {:?}", id, e);
        }
    }
}

/// Canvas 2D surface drawing the page's `<img id="<name>-sprite">` elements
struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Vec2,
    images: HashMap<Sprite, HtmlImageElement>,
}

impl CanvasSurface {
    fn new(document: &Document, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut images = HashMap::new();
        for sprite in Sprite::ALL {
            let id = format!("{}-sprite", sprite.asset_name());
            match document
                .get_element_by_id(&id)
                .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
            {
                Some(image) => {
                    images.insert(sprite, image);
                }
                None => log::warn!("No sprite element #{}", id),
            }
        }

        Ok(Self {
            ctx,
            size: Vec2::new(canvas.width() as f32, canvas.height() as f32),
            images,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_background(&mut self, color: Hsl) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn draw_sprite(&mut self, sprite: Sprite, center: Vec2, size: Vec2, rotation: f32) {
        let Some(image) = self
            .images
            .get(&sprite)
            .filter(|i| i.complete() && i.natural_width() > 0)
        else {
            return;
        };
        let (w, h) = (size.x as f64, size.y as f64);

        self.ctx.save();
        let drawn = self
            .ctx
            .translate(center.x as f64, center.y as f64)
            .and_then(|_| self.ctx.rotate(rotation as f64))
            .and_then(|_| {
                self.ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(image, -w / 2.0, -h / 2.0, w, h)
            });
        self.ctx.restore();

        if let Err(e) = drawn {
            log::warn!("Failed to draw {:?}: {:?}", sprite, e);
        }
    }
}

/// HUD elements; any that are missing from the page are skipped
struct HudElements {
    score: Option<Element>,
    best_score: Option<Element>,
    idle_time: Option<Element>,
    land_button: Option<Element>,
    land_cooldown: Option<Element>,
}

impl HudElements {
    fn new(document: &Document) -> Self {
        Self {
            score: document.get_element_by_id("score"),
            best_score: document.get_element_by_id("best-score"),
            idle_time: document.get_element_by_id("idle-time"),
            land_button: document.get_element_by_id("land-button"),
            land_cooldown: document.get_element_by_id("land-cooldown"),
        }
    }

    fn update(&self, session: &WebSession) {
        let hud = session.hud();

        set_text(&self.score, &hud.score.to_string());
        set_text(&self.best_score, &hud.best_score.to_string());

        match hud.idle_countdown {
            Some(secs) => {
                set_text(&self.idle_time, &secs.to_string());
                set_class(&self.idle_time, "hidden", false);
            }
            None => set_class(&self.idle_time, "hidden", true),
        }

        match hud.land_cooldown {
            Some(secs) => {
                set_text(&self.land_cooldown, &secs.to_string());
                set_class(&self.land_cooldown, "hidden", false);
            }
            None => set_class(&self.land_cooldown, "hidden", true),
        }
        set_class(&self.land_button, "unavailable", !hud.land_available);
    }
}

fn set_text(element: &Option<Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

fn set_class(element: &Option<Element>, class: &str, on: bool) {
    if let Some(element) = element {
        let _ = element.class_list().toggle_with_force(class, on);
    }
}

struct WebGame {
    session: WebSession,
    surface: CanvasSurface,
    hud: HudElements,
    clock: FrameClock,
}

impl WebGame {
    fn frame(&mut self) {
        let dt = self.clock.delta(now_ms());
        self.session.update(dt);
        self.session.render(&mut self.surface);
        self.hud.update(&self.session);
    }
}

fn request_animation_frame() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        with_game(WebGame::frame);
        request_animation_frame();
    });
    if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
    closure.forget();
}

fn listen<E, F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Build the session and start the first run
fn begin(document: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let settings = Settings {
        viewport_width: canvas.width() as f32,
        viewport_height: canvas.height() as f32,
        ..Default::default()
    };
    let audio = DomAudio {
        document: document.clone(),
    };
    let mut session = Session::new(&settings, audio, LocalStorageStore::new());
    session.start();

    let game = WebGame {
        session,
        surface: CanvasSurface::new(document, canvas)?,
        hud: HudElements::new(document),
        clock: FrameClock::new(now_ms(), settings.max_frame_dt),
    };
    GAME.with_borrow_mut(|slot| *slot = Some(game));
    request_animation_frame();
    log::info!("Cat Cannon started in the browser");
    Ok(())
}

#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    init_logging();

    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| js_error("no game canvas"))?
        .dyn_into::<HtmlCanvasElement>()?;

    listen(&canvas, "click", |_: MouseEvent| launch_cat())?;
    if let Some(button) = document.get_element_by_id("land-button") {
        listen(&button, "click", |_: MouseEvent| land())?;
    }
    listen(&document, "keydown", |event: KeyboardEvent| {
        if matches!(event.code().as_str(), "Space" | "Enter") {
            event.prevent_default();
            press_action();
        }
    })?;
    listen(&window, "beforeunload", |_: web_sys::Event| {
        with_game(|game| game.session.stop());
    })?;

    // Audio may only start after a user gesture, so the run waits for it
    match document.get_element_by_id("play-button") {
        Some(button) => {
            let (doc, canvas) = (document.clone(), canvas.clone());
            listen(&button, "click", move |_: MouseEvent| {
                let started = GAME.with_borrow(Option::is_some);
                if started {
                    return;
                }
                if let Err(e) = begin(&doc, &canvas) {
                    log::error!("Failed to start: {:?}", e);
                }
            })?;
        }
        None => begin(&document, &canvas)?,
    }
    Ok(())
}

/// Fire the cannon
#[wasm_bindgen]
pub fn launch_cat() {
    with_game(|game| game.session.launch_cat());
}

/// Landing dive
#[wasm_bindgen]
pub fn land() {
    with_game(|game| game.session.land());
}

/// Space/Enter: launch, then land
#[wasm_bindgen]
pub fn press_action() {
    with_game(|game| game.session.press_action());
}
