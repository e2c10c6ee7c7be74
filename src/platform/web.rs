//! Browser driver
//!
//! Sizes `#canvas` to the page body, paints with the canvas 2D API and
//! re-registers a `requestAnimationFrame` callback every frame. The loop has
//! no stop operation; it runs until the page goes away.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::{Surface, ViewportSource, render_frame};
use crate::Settings;
use crate::error::{Error, Result};
use crate::sim::{Circle, Simulation, Viewport};

fn js_error(value: JsValue) -> Error {
    Error::Js(format!("{:?}", value))
}

/// Canvas 2D drawing surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) -> Result<()> {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
        Ok(())
    }

    fn fill_circle(&mut self, fill: &str, circle: Circle) -> Result<()> {
        self.ctx.set_fill_style_str(fill);
        self.ctx.begin_path();
        self.ctx
            .arc(
                circle.center.x as f64,
                circle.center.y as f64,
                circle.radius as f64,
                0.0,
                TAU,
            )
            .map_err(js_error)?;
        self.ctx.fill();
        Ok(())
    }
}

/// Page body, measured once at startup
pub struct BodySize<'a> {
    document: &'a Document,
}

impl ViewportSource for BodySize<'_> {
    fn viewport(&self) -> Result<Viewport> {
        let body = self.document.body().ok_or(Error::Dom("body"))?;
        Viewport::new(body.client_width(), body.client_height())
    }
}

/// Everything the frame callback touches
struct Animation {
    sim: Simulation,
    surface: CanvasSurface,
}

/// Set up the canvas and start the frame loop
pub fn run() -> Result<()> {
    let window = web_sys::window().ok_or(Error::Dom("window"))?;
    let document = window.document().ok_or(Error::Dom("document"))?;

    let viewport = BodySize {
        document: &document,
    }
    .viewport()?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or(Error::Dom("canvas"))?
        .dyn_into()
        .map_err(|_| Error::Dom("canvas"))?;
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or(Error::Dom("2d context"))?
        .dyn_into()
        .map_err(|_| Error::Dom("2d context"))?;

    let settings = Settings::load();
    let seed = settings.seed_or(js_sys::Date::now() as u64);
    let sim = Simulation::new(viewport, seed);
    log::info!(
        "Viewport {}x{}, seed {}, ball r={} color {}",
        viewport.width,
        viewport.height,
        seed,
        sim.ball.radius,
        sim.ball.color
    );

    let animation = Rc::new(RefCell::new(Animation {
        sim,
        surface: CanvasSurface::new(ctx),
    }));

    log::info!("Rendering...");
    request_animation_frame(animation)
}

fn request_animation_frame(animation: Rc<RefCell<Animation>>) -> Result<()> {
    let window = web_sys::window().ok_or(Error::Dom("window"))?;
    let closure = Closure::once(move |_time: f64| {
        frame(animation);
    });
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn frame(animation: Rc<RefCell<Animation>>) {
    {
        let mut guard = animation.borrow_mut();
        let Animation { sim, surface } = &mut *guard;
        if let Err(e) = render_frame(sim, surface) {
            log::error!("Frame {} failed: {}", sim.frame, e);
        }
    }

    if let Err(e) = request_animation_frame(animation) {
        log::error!("Animation stopped: {}", e);
    }
}
