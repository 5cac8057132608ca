//! Waitlist form wiring: validation feedback, the submit lifecycle, and
//! the remote append.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlButtonElement, HtmlInputElement};

use super::{console, net, timer};
use crate::config;
use crate::form::{self, Phase};

pub fn init(document: &Document) -> Result<(), JsValue> {
    let form_el = document
        .query_selector(".waitlist-form")?
        .ok_or("waitlist form not found")?;
    let input = document
        .query_selector(".input-field")?
        .ok_or("email input not found")?
        .dyn_into::<HtmlInputElement>()?;
    let button = form_el
        .query_selector(".submit-btn")?
        .ok_or("submit control not found")?
        .dyn_into::<HtmlButtonElement>()?;

    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();

        let raw = input.value();
        let email = match form::validate(&raw) {
            Some(email) => email.to_string(),
            None => {
                reject_input(&input);
                return;
            }
        };

        apply_phase(&button, Phase::Submitting);

        let input = input.clone();
        let button = button.clone();
        spawn_local(async move {
            let phase = match net::append_waitlist(&email).await {
                Ok(()) => {
                    input.set_value("");
                    Phase::Success
                }
                Err(err) => {
                    console::error(&format!("waitlist append failed: {err}"));
                    Phase::Failure
                }
            };
            apply_phase(&button, phase);

            // Same revert window for both outcomes.
            timer::after(config::FORM_REVERT_MS, move || {
                apply_phase(&button, Phase::Idle);
            });
        });
    }) as Box<dyn FnMut(Event)>);
    form_el.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

/// Flash the error outline and put focus back in the field. No submission
/// happens.
fn reject_input(input: &HtmlInputElement) {
    let _ = input.class_list().add_1("error");
    let _ = input.focus();
    let input = input.clone();
    timer::after(config::ERROR_FLASH_MS, move || {
        let _ = input.class_list().remove_1("error");
    });
}

fn apply_phase(button: &HtmlButtonElement, phase: Phase) {
    button.set_text_content(Some(phase.label()));
    button.set_disabled(phase.disabled());
    let style = button.style();
    let _ = style.set_property("opacity", phase.opacity());
    match phase.color() {
        Some(color) => {
            let _ = style.set_property("background", color);
        }
        None => {
            let _ = style.remove_property("background");
        }
    }
}
