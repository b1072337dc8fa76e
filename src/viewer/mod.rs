//! WASM entry points.
//!
//! `ScrollFrame` plays an image sequence on a canvas as the visitor scrolls
//! through a section. `mount_portfolio` wires the whole page: the sequence,
//! navigation, reveal effects and the chat relay.
//!
//! ```javascript
//! import init, { mount_portfolio } from 'scrollframe';
//! await init();
//! const page = mount_portfolio({ sequence: { frameCount: 200 } });
//! ```

mod frame_loop;
mod geometry;
mod loader;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlCanvasElement};

pub use frame_loop::LoopHandle;
pub use geometry::DomGeometry;

use crate::chat::widget::{self, ChatWidget};
use crate::config::{PortfolioConfig, SequenceConfig};
use crate::error::ScrollframeError;
use crate::layout::Viewport;
use crate::logging;
use crate::player::SequencePlayer;
use crate::render::CanvasSurface;
use crate::ui::dom::{self as ui_dom, UiBindings};

type SharedPlayer = Rc<RefCell<SequencePlayer<CanvasSurface>>>;

fn config_from_js<T: serde::de::DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ScrollframeError::Config(e.to_string()).into())
}

/// Logical size of the canvas box and the device pixel ratio.
fn measure(canvas: &HtmlCanvasElement) -> (f64, f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    (rect.width(), rect.height(), dpr)
}

fn resize_player(player: &SharedPlayer, canvas: &HtmlCanvasElement) {
    let (width, height, dpr) = measure(canvas);
    player.borrow_mut().resize(width, height, dpr);
}

/// Scroll-driven image sequence bound to one canvas.
#[wasm_bindgen]
pub struct ScrollFrame {
    player: SharedPlayer,
    canvas: HtmlCanvasElement,
    config: SequenceConfig,
    frame_loop: Rc<RefCell<Option<LoopHandle>>>,
    resize_listener: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl ScrollFrame {
    /// Create a player for `canvas`. `config` is a (possibly partial)
    /// sequence configuration object; `undefined` takes every default.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: JsValue) -> Result<ScrollFrame, JsValue> {
        console_error_panic_hook::set_once();
        logging::init();
        let config: SequenceConfig = config_from_js(config)?;
        Self::with_config(canvas, config).map_err(Into::into)
    }

    /// Start loading every frame. The animation loop starts by itself once
    /// the sequence is ready.
    pub fn load(&self) -> Result<(), JsValue> {
        let player = Rc::clone(&self.player);
        let canvas = self.canvas.clone();
        let loop_slot = Rc::clone(&self.frame_loop);
        let section_selector = self.config.section_selector.clone();

        let on_ready: Rc<dyn Fn()> = Rc::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            resize_player(&player, &canvas);
            let geometry = DomGeometry::new(window, document, section_selector.as_str());
            let handle = frame_loop::start(Rc::clone(&player), geometry);
            if let Some(previous) = loop_slot.borrow_mut().replace(handle) {
                previous.cancel();
            }
        });

        loader::load_all(&self.player, on_ready).map_err(Into::into)
    }

    /// Re-read the canvas size and device pixel ratio.
    pub fn resize(&self) {
        resize_player(&self.player, &self.canvas);
    }

    /// Stop animating. Frames keep loading but nothing is drawn afterwards.
    pub fn stop(&self) {
        self.player.borrow_mut().stop();
        if let Some(handle) = self.frame_loop.borrow_mut().take() {
            handle.cancel();
        }
    }

    pub fn is_ready(&self) -> bool {
        self.player.borrow().is_ready()
    }

    pub fn loaded_count(&self) -> usize {
        self.player.borrow().loaded_count()
    }

    pub fn frame_count(&self) -> usize {
        self.player.borrow().frame_count()
    }

    pub fn current_frame(&self) -> usize {
        self.player.borrow().current_frame()
    }
}

impl ScrollFrame {
    pub fn with_config(
        canvas: HtmlCanvasElement,
        config: SequenceConfig,
    ) -> crate::error::Result<ScrollFrame> {
        let surface = CanvasSurface::new(canvas.clone(), config.frame_count)?;
        let (width, height, dpr) = measure(&canvas);
        let player = Rc::new(RefCell::new(SequencePlayer::from_config(
            &config,
            surface,
            Viewport::with_size(width, height, dpr),
        )));

        let resize_listener = web_sys::window().map(|window| {
            let player = Rc::clone(&player);
            let canvas = canvas.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                resize_player(&player, &canvas);
            }) as Box<dyn FnMut(Event)>);
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure
        });

        Ok(ScrollFrame {
            player,
            canvas,
            config,
            frame_loop: Rc::new(RefCell::new(None)),
            resize_listener,
        })
    }

    /// `(loaded, total)` reporter that outlives this borrow.
    fn summary(&self) -> impl Fn() -> (usize, usize) + 'static {
        let player = Rc::clone(&self.player);
        move || {
            let p = player.borrow();
            (p.loaded_count(), p.frame_count())
        }
    }
}

impl Drop for ScrollFrame {
    fn drop(&mut self) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.as_ref()) {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        if let Some(handle) = self.frame_loop.borrow_mut().take() {
            handle.cancel();
        }
    }
}

/// A fully wired portfolio page. Keep it alive for the page lifetime.
#[wasm_bindgen]
pub struct Portfolio {
    frame: Option<ScrollFrame>,
    _ui: UiBindings,
    _chat: Option<ChatWidget>,
}

#[wasm_bindgen]
impl Portfolio {
    /// The page's sequence player, when its canvas exists.
    pub fn has_sequence(&self) -> bool {
        self.frame.is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.frame.as_ref().map_or(0, ScrollFrame::loaded_count)
    }

    pub fn current_frame(&self) -> usize {
        self.frame.as_ref().map_or(0, ScrollFrame::current_frame)
    }

    pub fn stop(&self) {
        if let Some(frame) = &self.frame {
            frame.stop();
        }
    }
}

/// Wire the whole portfolio page from a (possibly partial) configuration.
#[wasm_bindgen]
pub fn mount_portfolio(config: JsValue) -> Result<Portfolio, JsValue> {
    console_error_panic_hook::set_once();

    let config: PortfolioConfig = config_from_js(config)?;
    config.validate()?;
    match config.log_level.as_deref().and_then(logging::parse_level) {
        Some(level) => logging::init_with_level(level),
        None => logging::init(),
    }

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let canvas = document
        .get_element_by_id(&config.sequence.canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
    let frame = match canvas {
        Some(canvas) => {
            let frame = ScrollFrame::with_config(canvas, config.sequence.clone())?;
            frame.load()?;
            Some(frame)
        }
        None => {
            tracing::warn!("canvas #{} not found; sequence disabled", config.sequence.canvas_id);
            None
        }
    };

    let ui = match &frame {
        Some(frame) => ui_dom::bind(&config, frame.summary()),
        None => {
            let total = config.sequence.frame_count;
            ui_dom::bind(&config, move || (0, total))
        }
    };
    let chat = widget::bind(&document, &config.chat);

    Ok(Portfolio {
        frame,
        _ui: ui,
        _chat: chat,
    })
}
