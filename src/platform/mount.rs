//! Mounting a session onto the page
//!
//! `GameMount` owns everything tied to the page: listeners, the frame loop
//! and the session. Dropping it detaches the handlers, cancels the pending
//! frame and tears the session down.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent, TouchEvent, Window};

use super::dom;
use super::frame::AnimationFrameLoop;
use super::listeners::EventListeners;
use crate::config::GameConfig;
use crate::input::is_pointer_drag;
use crate::renderer::{RenderState, SceneView};
use crate::sim::{ArenaSize, GameEvent, Session};

/// Per-frame state shared by the handlers and the frame loop
struct WebGame {
    session: Session,
    view: SceneView,
    renderer: Option<RenderState>,
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    last_time: Option<f64>,
    shown_score: Option<u64>,
}

impl WebGame {
    fn frame(&mut self, time: f64) {
        let dt = self.last_time.map(|last| time - last).unwrap_or(0.0);
        self.last_time = Some(time);

        for event in self.session.advance(dt) {
            match event {
                GameEvent::Collision { score, .. } => log::info!("Pig caught! Score: {}", score),
                GameEvent::Relocated { to } => {
                    log::debug!("Pig relocated to ({:.1}, {:.1})", to.x, to.y)
                }
            }
        }

        self.view.update(&self.session.state, dt);
        self.render();
        self.update_hud();
    }

    fn render(&mut self) {
        let vertices = self
            .view
            .build(self.session.state.is_hit(), self.session.arena());
        if let Some(ref mut render_state) = self.renderer {
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
    }

    fn update_hud(&mut self) {
        let score = self.session.state.score();
        if self.shown_score != Some(score) {
            dom::set_score(&self.document, score);
            self.shown_score = Some(score);
        }
    }

    fn resize(&mut self) {
        let (vw, vh) = dom::viewport_size(&self.window);
        let arena = self.session.handle_resize(vw, vh);
        let dpr = dom::device_pixel_ratio(&self.window);
        let (w, h) = dom::size_canvas(&self.canvas, arena, dpr);
        if let Some(ref mut render_state) = self.renderer {
            render_state.resize(w, h);
            render_state.set_arena(arena);
        }
    }

    fn pointer_at(&mut self, client_x: f32, client_y: f32) {
        let rect = dom::bounding_rect(&self.canvas);
        self.session
            .handle_pointer(Vec2::new(client_x, client_y), rect.as_ref());
    }
}

/// A mounted, running game; drop to unmount
pub struct GameMount {
    game: Rc<RefCell<WebGame>>,
    listeners: EventListeners,
    frames: Option<AnimationFrameLoop>,
}

impl GameMount {
    pub fn score(&self) -> u64 {
        self.game.borrow().session.state.score()
    }
}

impl Drop for GameMount {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frames.take();
        if let Ok(mut game) = self.game.try_borrow_mut() {
            game.session.teardown();
        }
        log::info!("Game unmounted");
    }
}

/// Create the WebGPU renderer for `canvas`; `None` (logged) on failure
async fn init_renderer(
    canvas: &HtmlCanvasElement,
    size: (u32, u32),
    arena: ArenaSize,
) -> Option<RenderState> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("Failed to create surface: {}", e);
            return None;
        }
    };

    let adapter = match instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
    {
        Ok(adapter) => adapter,
        Err(e) => {
            log::error!("No GPU adapter: {}", e);
            return None;
        }
    };
    log::info!("Using adapter: {:?}", adapter.get_info().name);

    match RenderState::new(surface, &adapter, size.0, size.1, arena).await {
        Ok(state) => Some(state),
        Err(e) => {
            log::error!("Renderer unavailable: {}", e);
            None
        }
    }
}

/// Mount a new session on the canvas with id `canvas_id`.
///
/// Returns `None` without registering anything if the page has no such
/// canvas.
pub async fn mount(canvas_id: &str, config: GameConfig) -> Option<GameMount> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let Some(canvas) = document
        .get_element_by_id(canvas_id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        log::warn!("No #{} canvas; input handlers not registered", canvas_id);
        return None;
    };

    let seed = js_sys::Date::now() as u64;
    let mut session = Session::new(seed, config);

    let (vw, vh) = dom::viewport_size(&window);
    let arena = session.handle_resize(vw, vh);
    let size = dom::size_canvas(&canvas, arena, dom::device_pixel_ratio(&window));
    let renderer = init_renderer(&canvas, size, arena).await;

    session.start();
    let view = SceneView::new(&session.state);
    let game = Rc::new(RefCell::new(WebGame {
        session,
        view,
        renderer,
        window: window.clone(),
        document,
        canvas: canvas.clone(),
        last_time: None,
        shown_score: None,
    }));

    let mut listeners = EventListeners::new();
    let window_target: &web_sys::EventTarget = window.as_ref();
    let canvas_target: &web_sys::EventTarget = canvas.as_ref();

    // Keyboard
    {
        let game = game.clone();
        listeners.add(window_target, "keydown", true, move |event: KeyboardEvent| {
            game.borrow_mut().session.handle_key(&event.key());
        });
    }

    // Touch start/move: the arena is a dedicated gesture surface
    for kind in ["touchstart", "touchmove"] {
        let game = game.clone();
        listeners.add(canvas_target, kind, false, move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                game.borrow_mut()
                    .pointer_at(touch.client_x() as f32, touch.client_y() as f32);
            }
        });
    }

    // Mouse and pen drag; touch pointers are handled above
    for kind in ["pointerdown", "pointermove"] {
        let game = game.clone();
        listeners.add(canvas_target, kind, true, move |event: PointerEvent| {
            if is_pointer_drag(&event.pointer_type(), event.buttons()) {
                game.borrow_mut()
                    .pointer_at(event.client_x() as f32, event.client_y() as f32);
            }
        });
    }

    // Resize
    {
        let game = game.clone();
        listeners.add(window_target, "resize", true, move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
    }

    let frames = {
        let game = game.clone();
        AnimationFrameLoop::start(move |time| game.borrow_mut().frame(time))
    };

    log::info!("Game mounted ({} listeners)", listeners.len());

    Some(GameMount {
        game,
        listeners,
        frames: Some(frames),
    })
}
