//! The animated logo mark: a shader quad masked by one of two alpha
//! textures depending on theme.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlImageElement, WebGl2RenderingContext as GL, Window};

use super::console;
use super::gl as glu;
use super::surface::LogoSurface;
use super::timer::Debounce;
use crate::logo::{QuadSize, TextureGate};
use crate::{config, scene};

const VERT_SRC: &str = r#"#version 300 es
in vec2 position;
in vec2 uv;
uniform mat4 u_proj;
uniform vec2 u_half_size;
out vec2 v_uv;
out vec2 v_npos;
void main() {
    v_uv = uv;
    v_npos = position / u_half_size;
    gl_Position = u_proj * vec4(position, 0.0, 1.0);
}
"#;

const FRAG_SRC: &str = r#"#version 300 es
precision mediump float;
in vec2 v_uv;
in vec2 v_npos;
uniform float u_time;
uniform bool u_dark;
uniform sampler2D u_mask_light;
uniform sampler2D u_mask_dark;
out vec4 out_color;

vec3 hsv2rgb(vec3 c) {
    vec4 k = vec4(1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0);
    vec3 p = abs(fract(c.xxx + k.xyz) * 6.0 - k.www);
    return c.z * mix(k.xxx, clamp(p - k.xxx, 0.0, 1.0), c.y);
}

void main() {
    float radius = length(v_npos);
    float angle = atan(v_npos.y, v_npos.x);
    float hue = fract(angle / 6.28318530718 + radius * 0.5 - u_time * 0.1);
    vec3 rgb = hsv2rgb(vec3(hue, 0.8, 1.0));
    if (u_dark) {
        out_color = vec4(rgb, texture(u_mask_dark, v_uv).a);
    } else {
        out_color = vec4(vec3(0.0), texture(u_mask_light, v_uv).a);
    }
}
"#;

/// What the theme controller is allowed to touch: the shader's theme flag.
#[derive(Clone)]
pub struct LogoHandle {
    dark: Rc<Cell<bool>>,
}

impl LogoHandle {
    pub fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
    }
}

struct LoadState {
    surface: LogoSurface,
    window: Window,
    dark: Rc<Cell<bool>>,
    gate: RefCell<TextureGate>,
    light_mask: RefCell<Option<HtmlImageElement>>,
    dark_mask: RefCell<Option<HtmlImageElement>>,
}

#[derive(Clone, Copy)]
enum Mask {
    Light,
    Dark,
}

/// Locate the logo surface and kick off both mask loads. The animated path
/// only starts after both loads land; until then (and forever, on any
/// failure) the static fallback image stays visible.
pub fn start(window: &Window, document: &Document) -> Result<LogoHandle, JsValue> {
    let surface = LogoSurface::acquire(document)?;
    // Probe the context up front so a missing capability is reported at
    // init rather than after the texture loads.
    surface.context()?;

    let dark = Rc::new(Cell::new(false));
    let handle = LogoHandle { dark: dark.clone() };

    let state = Rc::new(LoadState {
        surface,
        window: window.clone(),
        dark,
        gate: RefCell::new(TextureGate::new()),
        light_mask: RefCell::new(None),
        dark_mask: RefCell::new(None),
    });

    spawn_mask_load(state.clone(), Mask::Light);
    spawn_mask_load(state, Mask::Dark);

    Ok(handle)
}

fn spawn_mask_load(state: Rc<LoadState>, mask: Mask) {
    spawn_local(async move {
        let src = match mask {
            Mask::Light => config::LOGO_MASK_LIGHT_SRC,
            Mask::Dark => config::LOGO_MASK_DARK_SRC,
        };
        match glu::load_image(src).await {
            Ok(image) => {
                match mask {
                    Mask::Light => *state.light_mask.borrow_mut() = Some(image),
                    Mask::Dark => *state.dark_mask.borrow_mut() = Some(image),
                }
                state.gate.borrow_mut().note_loaded();
                if state.gate.borrow().ready() {
                    if let Err(err) = build_material(&state) {
                        console::error(&format!("logo material not built: {err:?}"));
                    }
                }
            }
            Err(_) => {
                state.gate.borrow_mut().note_failed();
                console::error(&format!("logo mask {src} failed to load, keeping static mark"));
            }
        }
    });
}

/// Both masks are in: size the quad from the light mask's natural
/// dimensions, build the material, swap the canvas in for the fallback
/// image, and start the frame loop.
fn build_material(state: &Rc<LoadState>) -> Result<(), JsValue> {
    let light = state.light_mask.borrow().clone().ok_or("light mask missing")?;
    let dark_mask = state.dark_mask.borrow().clone().ok_or("dark mask missing")?;

    let gl = state.surface.context()?;
    let program = glu::link_program(&gl, VERT_SRC, FRAG_SRC)?;
    gl.use_program(Some(&program));

    let edge = state.surface.apply_size(&state.window, &gl) as f32;
    let quad = QuadSize::derive(edge, light.natural_width() as f32, light.natural_height() as f32);
    let vertex_buffer = glu::f32_buffer(&gl, &quad_vertices(quad), GL::DYNAMIC_DRAW)?;

    let position_loc = gl.get_attrib_location(&program, "position") as u32;
    let uv_loc = gl.get_attrib_location(&program, "uv") as u32;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertex_buffer));
    gl.enable_vertex_attrib_array(position_loc);
    gl.vertex_attrib_pointer_with_i32(position_loc, 2, GL::FLOAT, false, 16, 0);
    gl.enable_vertex_attrib_array(uv_loc);
    gl.vertex_attrib_pointer_with_i32(uv_loc, 2, GL::FLOAT, false, 16, 8);

    gl.active_texture(GL::TEXTURE0);
    let light_tex = glu::texture_from_image(&gl, &light)?;
    gl.active_texture(GL::TEXTURE1);
    let dark_tex = glu::texture_from_image(&gl, &dark_mask)?;

    let proj_loc = gl.get_uniform_location(&program, "u_proj");
    let half_size_loc = gl.get_uniform_location(&program, "u_half_size");
    let time_loc = gl.get_uniform_location(&program, "u_time");
    let dark_loc = gl.get_uniform_location(&program, "u_dark");
    gl.uniform1i(gl.get_uniform_location(&program, "u_mask_light").as_ref(), 0);
    gl.uniform1i(gl.get_uniform_location(&program, "u_mask_dark").as_ref(), 1);

    gl.enable(GL::BLEND);
    gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
    gl.clear_color(0.0, 0.0, 0.0, 0.0);

    // The animated mark replaces the static fallback from here on.
    let _ = state.surface.canvas.style().set_property("display", "block");
    if let Some(fallback) = &state.surface.fallback {
        let _ = fallback.style().set_property("display", "none");
    }

    let quad = Rc::new(Cell::new(quad));
    let edge = Rc::new(Cell::new(edge));

    // Debounced resize from the host element's box, not the window's.
    {
        let state = state.clone();
        let gl = gl.clone();
        let quad_cell = quad.clone();
        let edge_cell = edge.clone();
        let vertex_buffer = vertex_buffer.clone();
        let light = light.clone();
        let debounce = RefCell::new(Debounce::new(config::RESIZE_DEBOUNCE_MS));
        let on_resize = Closure::wrap(Box::new(move || {
            let state = state.clone();
            let gl = gl.clone();
            let quad_cell = quad_cell.clone();
            let edge_cell = edge_cell.clone();
            let vertex_buffer = vertex_buffer.clone();
            let light = light.clone();
            let scheduled = debounce.borrow_mut().schedule(move || {
                let new_edge = state.surface.apply_size(&state.window, &gl) as f32;
                let new_quad = QuadSize::derive(
                    new_edge,
                    light.natural_width() as f32,
                    light.natural_height() as f32,
                );
                glu::upload_f32(&gl, &vertex_buffer, &quad_vertices(new_quad));
                quad_cell.set(new_quad);
                edge_cell.set(new_edge);
            });
            if let Err(err) = scheduled {
                console::error(&format!("logo resize debounce failed: {err:?}"));
            }
        }) as Box<dyn FnMut()>);
        state
            .window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        on_resize.forget();
    }

    // Frame loop. The accumulator advances a fixed step per frame rather
    // than per elapsed time, so the mark's speed follows the refresh rate.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_handle = frame.clone();
    {
        let state = state.clone();
        let mut time = 0.0f32;
        *frame_handle.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            time += config::LOGO_TIME_STEP;

            gl.active_texture(GL::TEXTURE0);
            gl.bind_texture(GL::TEXTURE_2D, Some(&light_tex));
            gl.active_texture(GL::TEXTURE1);
            gl.bind_texture(GL::TEXTURE_2D, Some(&dark_tex));

            let quad = quad.get();
            let half_edge = edge.get() / 2.0;
            let proj = scene::mat4_orthographic(half_edge, half_edge);
            gl.uniform_matrix4fv_with_f32_array(proj_loc.as_ref(), false, &proj);
            gl.uniform2f(half_size_loc.as_ref(), quad.width / 2.0, quad.height / 2.0);
            gl.uniform1f(time_loc.as_ref(), time);
            gl.uniform1i(dark_loc.as_ref(), state.dark.get() as i32);

            gl.clear(GL::COLOR_BUFFER_BIT);
            gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);

            // schedule next
            state
                .window
                .request_animation_frame(frame.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .unwrap();
        }) as Box<dyn FnMut()>));
    }
    state.window.request_animation_frame(
        frame_handle
            .borrow()
            .as_ref()
            .unwrap()
            .as_ref()
            .unchecked_ref(),
    )?;

    console::log("starting logo animation");
    Ok(())
}

/// Interleaved [x, y, u, v] strip for a centered quad.
fn quad_vertices(quad: QuadSize) -> [f32; 16] {
    let hw = quad.width / 2.0;
    let hh = quad.height / 2.0;
    [
        -hw, -hh, 0.0, 0.0, //
        hw, -hh, 1.0, 0.0, //
        -hw, hh, 0.0, 1.0, //
        hw, hh, 1.0, 1.0, //
    ]
}
