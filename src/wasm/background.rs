//! The wireframe wave behind the hero content.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, MouseEvent, TouchEvent, WebGl2RenderingContext as GL, Window};

use super::console;
use super::gl as glu;
use super::surface::{measure_viewport, BackgroundSurface};
use super::timer::Debounce;
use crate::wave::{self, FrameAdvance, FrameGate, SceneParams, WaveMesh};
use crate::{config, scene};

const VERT_SRC: &str = r#"#version 300 es
in vec3 position;
uniform mat4 u_mvp;
void main() {
    gl_Position = u_mvp * vec4(position, 1.0);
}
"#;

const FRAG_SRC: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 out_color;
void main() {
    out_color = vec4(u_color, u_opacity);
}
"#;

/// What the theme controller is allowed to touch: the material opacity,
/// read by the render loop on its next frame.
#[derive(Clone)]
pub struct BackgroundHandle {
    opacity: Rc<Cell<f32>>,
}

impl BackgroundHandle {
    pub fn set_opacity(&self, opacity: f32) {
        self.opacity.set(opacity);
    }
}

/// Build the scene and start its self-perpetuating frame loop. Errors here
/// mean the scene never starts; the rest of the page is unaffected.
pub fn start(window: &Window, document: &Document) -> Result<BackgroundHandle, JsValue> {
    let params = SceneParams::for_width(measure_viewport(window).width);
    if !params.enable_animation {
        return Err(JsValue::from_str("background animation is disabled"));
    }

    let surface = BackgroundSurface::acquire(window, document)?;
    let gl = surface.gl.clone();

    let mesh = WaveMesh::new();
    let program = glu::link_program(&gl, VERT_SRC, FRAG_SRC)?;
    let position_buffer = glu::f32_buffer(&gl, mesh.positions(), GL::DYNAMIC_DRAW)?;
    let index_buffer = glu::u16_index_buffer(&gl, mesh.line_indices())?;
    let index_count = mesh.line_indices().len() as i32;

    gl.use_program(Some(&program));
    let position_loc = gl.get_attrib_location(&program, "position") as u32;
    let mvp_loc = gl.get_uniform_location(&program, "u_mvp");
    let color_loc = gl.get_uniform_location(&program, "u_color");
    let opacity_loc = gl.get_uniform_location(&program, "u_opacity");

    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&position_buffer));
    gl.enable_vertex_attrib_array(position_loc);
    gl.vertex_attrib_pointer_with_i32(position_loc, 3, GL::FLOAT, false, 0, 0);
    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

    gl.uniform3f(
        color_loc.as_ref(),
        config::MESH_COLOR[0],
        config::MESH_COLOR[1],
        config::MESH_COLOR[2],
    );
    gl.enable(GL::BLEND);
    gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
    gl.clear_color(0.0, 0.0, 0.0, 0.0);

    let opacity = Rc::new(Cell::new(config::BACKGROUND_OPACITY_LIGHT));
    let aspect = Rc::new(Cell::new(surface.apply_size(window)));
    let tilt = Rc::new(Cell::new(wave::tilt_for_pointer(0.0, 0.0)));
    let mesh = Rc::new(RefCell::new(mesh));
    let gate = Rc::new(RefCell::new(FrameGate::new()));

    // Pointer and single-touch moves lean the plane toward the cursor;
    // latest input wins, no easing.
    {
        let tilt = tilt.clone();
        let window = window.clone();
        let on_mouse = Closure::wrap(Box::new(move |event: MouseEvent| {
            let viewport = measure_viewport(&window);
            let (nx, ny) = wave::normalized_pointer(
                event.client_x() as f64,
                event.client_y() as f64,
                viewport.width as f64,
                viewport.height as f64,
            );
            tilt.set(wave::tilt_for_pointer(nx, ny));
        }) as Box<dyn FnMut(MouseEvent)>);
        document.add_event_listener_with_callback("mousemove", on_mouse.as_ref().unchecked_ref())?;
        on_mouse.forget();
    }
    {
        let tilt = tilt.clone();
        let window = window.clone();
        let on_touch = Closure::wrap(Box::new(move |event: TouchEvent| {
            if let Some(touch) = event.touches().get(0) {
                let viewport = measure_viewport(&window);
                let (nx, ny) = wave::normalized_pointer(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    viewport.width as f64,
                    viewport.height as f64,
                );
                tilt.set(wave::tilt_for_pointer(nx, ny));
            }
        }) as Box<dyn FnMut(TouchEvent)>);
        document.add_event_listener_with_callback("touchmove", on_touch.as_ref().unchecked_ref())?;
        on_touch.forget();
    }

    // Debounced relayout: re-place the canvas across the breakpoint, then
    // resize the drawing buffer and camera for the new box.
    {
        let window_outer = window.clone();
        let surface = surface.clone();
        let aspect = aspect.clone();
        let debounce = RefCell::new(Debounce::new(config::RESIZE_DEBOUNCE_MS));
        let on_resize = Closure::wrap(Box::new(move || {
            let window = window_outer.clone();
            let surface = surface.clone();
            let aspect = aspect.clone();
            let scheduled = debounce.borrow_mut().schedule(move || {
                let viewport = measure_viewport(&window);
                if let Err(err) = surface.place(viewport.width) {
                    console::error(&format!("background relayout failed: {err:?}"));
                }
                aspect.set(surface.apply_size(&window));
            });
            if let Err(err) = scheduled {
                console::error(&format!("resize debounce failed: {err:?}"));
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // Frame loop. `frame` holds the closure so it can reschedule itself;
    // it reschedules on every tick, including skipped ones.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_handle = frame.clone();
    {
        let window = window.clone();
        let gl = gl.clone();
        let mesh = mesh.clone();
        let gate = gate.clone();
        let tilt = tilt.clone();
        let aspect = aspect.clone();
        let opacity = opacity.clone();
        *frame_handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
            match gate.borrow_mut().tick(now_ms) {
                FrameAdvance::Step { .. } => {
                    let mut mesh = mesh.borrow_mut();
                    mesh.step(now_ms as f32, config::ANIMATION_SPEED);
                    glu::upload_f32(&gl, &position_buffer, mesh.positions());
                    gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

                    let (rot_x, rot_y) = tilt.get();
                    let mvp = scene::background_mvp(aspect.get(), rot_x, rot_y);
                    gl.clear(GL::COLOR_BUFFER_BIT);
                    gl.uniform_matrix4fv_with_f32_array(mvp_loc.as_ref(), false, &mvp);
                    gl.uniform1f(opacity_loc.as_ref(), opacity.get());
                    gl.draw_elements_with_i32(GL::LINES, index_count, GL::UNSIGNED_SHORT, 0);
                }
                FrameAdvance::Skip { dt_ms } => {
                    console::log(&format!("frame skipped, dt {dt_ms:.0}ms"));
                }
            }
            // schedule next
            window
                .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .unwrap();
        }) as Box<dyn FnMut(f64)>));
    }
    window.request_animation_frame(
        frame_handle
            .borrow()
            .as_ref()
            .unwrap()
            .as_ref()
            .unchecked_ref(),
    )?;

    console::log("starting background animation");
    Ok(BackgroundHandle { opacity })
}
