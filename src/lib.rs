#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Pure page logic lives in these modules; they build on every target so the
// host can run `cargo test` against them.

pub mod config;
pub mod form;
pub mod layout;
pub mod logo;
pub mod scene;
pub mod theme;
pub mod viewport;
pub mod wave;

// Only compile browser glue when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod app;
    mod background;
    mod console;
    mod form_dom;
    mod gl;
    mod logo_scene;
    mod net;
    mod surface;
    mod theme_dom;
    mod timer;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        app::boot(&window, &document)
    }
}
