//! Render surface management: canvas/context ownership, breakpoint-driven
//! placement, and render-target sizing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlElement, Node, WebGl2RenderingContext as GL, Window,
};

use super::console;
use crate::layout::{self, SurfaceHost};
use crate::viewport::Viewport;

pub fn measure_viewport(window: &Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width as u32, height as u32)
}

/// Reveal a static fallback element, if the page has one wired up.
pub fn show_fallback(document: &Document, id: &str) {
    match document.get_element_by_id(id) {
        Some(element) => {
            if let Some(element) = element.dyn_ref::<HtmlElement>() {
                let _ = element.style().set_property("display", "flex");
            }
        }
        None => console::warn(&format!("fallback element #{id} not present")),
    }
}

/// The full-bleed background canvas and its compact-layout host.
#[derive(Clone)]
pub struct BackgroundSurface {
    pub canvas: HtmlCanvasElement,
    pub gl: GL,
    document: Document,
    hero: Element,
}

impl BackgroundSurface {
    /// Locate the canvas and hero container and bind a context. A missing
    /// element or context is fatal for the background scene only; the
    /// context case additionally reveals the static fallback.
    pub fn acquire(window: &Window, document: &Document) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id("webgl-background")
            .ok_or("background canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;
        let hero = document
            .query_selector(".hero-content")?
            .ok_or("hero content element not found")?;

        let gl = match canvas.get_context("webgl2") {
            Ok(Some(context)) => context.dyn_into::<GL>()?,
            _ => {
                show_fallback(document, "webgl-fallback");
                return Err(JsValue::from_str("WebGL is not supported on this device"));
            }
        };

        let surface = Self {
            canvas,
            gl,
            document: document.clone(),
            hero,
        };
        surface.place(measure_viewport(window).width)?;
        Ok(surface)
    }

    /// Move the canvas to the host the breakpoint calls for; a no-op when
    /// the parent already matches.
    pub fn place(&self, viewport_width: u32) -> Result<(), JsValue> {
        match layout::host_for(viewport_width) {
            SurfaceHost::Hero => {
                if !self.is_child_of(self.hero.as_ref()) {
                    self.hero.append_child(self.canvas.as_ref())?;
                    console::log("moved background canvas into hero content");
                }
            }
            SurfaceHost::Body => {
                let body = self.document.body().ok_or("document has no body")?;
                if !self.is_child_of(body.as_ref()) {
                    body.insert_before(self.canvas.as_ref(), body.first_child().as_ref())?;
                    console::log("moved background canvas to document body");
                }
            }
        }
        Ok(())
    }

    fn is_child_of(&self, node: &Node) -> bool {
        self.canvas
            .parent_node()
            .map_or(false, |parent| parent.is_same_node(Some(node)))
    }

    /// CSS-pixel box the scene fills: the hero block when compact (the
    /// canvas is embedded there, not full-bleed), the window otherwise.
    pub fn layout_box(&self, window: &Window) -> (f64, f64) {
        let viewport = measure_viewport(window);
        match layout::host_for(viewport.width) {
            SurfaceHost::Hero => {
                let rect = self.hero.get_bounding_client_rect();
                (rect.width(), rect.height())
            }
            SurfaceHost::Body => (viewport.width as f64, viewport.height as f64),
        }
    }

    /// Resize the drawing buffer and GL viewport; returns the camera
    /// aspect ratio for the new box.
    pub fn apply_size(&self, window: &Window) -> f32 {
        let (css_w, css_h) = self.layout_box(window);
        let (width, height) = layout::render_size(css_w, css_h, window.device_pixel_ratio());
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
        if css_h <= 0.0 {
            1.0
        } else {
            (css_w / css_h) as f32
        }
    }
}

/// The logo canvas, sized from its host element rather than the window.
#[derive(Clone)]
pub struct LogoSurface {
    pub canvas: HtmlCanvasElement,
    pub fallback: Option<HtmlElement>,
    host: Element,
}

impl LogoSurface {
    pub fn acquire(document: &Document) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id("logo-canvas")
            .ok_or("logo canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;
        let host = canvas
            .parent_element()
            .ok_or("logo canvas has no host element")?;
        let fallback = document
            .get_element_by_id("logo-fallback")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        Ok(Self {
            canvas,
            fallback,
            host,
        })
    }

    pub fn context(&self) -> Result<GL, JsValue> {
        match self.canvas.get_context("webgl2") {
            Ok(Some(context)) => Ok(context.dyn_into::<GL>()?),
            _ => Err(JsValue::from_str("WebGL is not supported for the logo surface")),
        }
    }

    /// Square surface edge in CSS pixels from the host's layout box, with
    /// the zero-size substitution applied before anything derives from it.
    pub fn surface_edge(&self) -> f64 {
        let rect = self.host.get_bounding_client_rect();
        let size = layout::SurfaceSize::from_measured(rect.width(), rect.height());
        if size.fell_back {
            console::warn("logo surface measured zero, substituting fallback size");
        }
        size.width.min(size.height)
    }

    /// Resize drawing buffer and viewport; returns the surface edge.
    pub fn apply_size(&self, window: &Window, gl: &GL) -> f64 {
        let edge = self.surface_edge();
        let (width, height) = layout::render_size(edge, edge, window.device_pixel_ratio());
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        gl.viewport(0, 0, width as i32, height as i32);
        edge
    }
}
