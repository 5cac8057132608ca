//! Theme toggle wiring: the one place the light/dark flag changes.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::background::BackgroundHandle;
use super::logo_scene::LogoHandle;
use crate::theme::ThemeState;

/// Wire the toggle control. Each click flips the flag, swaps the
/// document-level class and label, and pushes the new values into
/// whichever animators actually initialized; dead animators are skipped
/// silently.
pub fn init(
    document: &Document,
    background: Option<BackgroundHandle>,
    logo: Option<LogoHandle>,
) -> Result<(), JsValue> {
    let button = document
        .get_element_by_id("theme-toggle")
        .ok_or("theme toggle control not found")?
        .dyn_into::<HtmlElement>()?;

    let state = Rc::new(RefCell::new(ThemeState::new()));
    let document = document.clone();
    let label = button.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let mut theme = state.borrow_mut();
        let dark = theme.toggle();

        if let Some(body) = document.body() {
            let classes = body.class_list();
            let _ = if dark {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
        }
        label.set_text_content(Some(theme.toggle_label()));

        if let Some(background) = &background {
            background.set_opacity(theme.background_opacity());
        }
        if let Some(logo) = &logo {
            logo.set_dark(dark);
        }
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
