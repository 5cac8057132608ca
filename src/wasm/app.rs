//! Composition root: construct every component explicitly and keep their
//! failures isolated, so a dead animator leaves the theme toggle and the
//! form working.

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::{background, console, form_dom, logo_scene, theme_dom};

pub fn boot(window: &Window, document: &Document) -> Result<(), JsValue> {
    let background = match background::start(window, document) {
        Ok(handle) => Some(handle),
        Err(err) => {
            console::error(&format!("background scene not started: {err:?}"));
            None
        }
    };

    let logo = match logo_scene::start(window, document) {
        Ok(handle) => Some(handle),
        Err(err) => {
            console::error(&format!("logo scene not started: {err:?}"));
            None
        }
    };

    if let Err(err) = theme_dom::init(document, background, logo) {
        console::error(&format!("theme toggle not wired: {err:?}"));
    }

    if let Err(err) = form_dom::init(document) {
        console::error(&format!("waitlist form not wired: {err:?}"));
    }

    Ok(())
}
