#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// The fragment of index.html the wasm side looks up by id/class.
const PAGE: &str = r#"
  <canvas id="webgl-background"></canvas>
  <div id="webgl-fallback"></div>
  <div class="hero-content">
    <div id="logo">
      <img id="logo-fallback">
      <canvas id="logo-canvas"></canvas>
    </div>
    <form class="waitlist-form">
      <input class="input-field" type="text">
      <button class="submit-btn" type="submit">Join Waitlist</button>
    </form>
    <button id="theme-toggle" type="button">Dark</button>
  </div>
"#;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn page_contract_elements_are_locatable() {
    document().body().unwrap().set_inner_html(PAGE);
    let document = document();

    for id in [
        "webgl-background",
        "webgl-fallback",
        "logo-canvas",
        "logo-fallback",
        "theme-toggle",
    ] {
        assert!(document.get_element_by_id(id).is_some(), "missing #{id}");
    }

    let input = document.query_selector(".input-field").unwrap().unwrap();
    input.dyn_into::<web_sys::HtmlInputElement>().unwrap();
    let button = document.query_selector(".submit-btn").unwrap().unwrap();
    button.dyn_into::<web_sys::HtmlButtonElement>().unwrap();
}

#[wasm_bindgen_test]
fn background_canvas_can_change_host() {
    document().body().unwrap().set_inner_html(PAGE);
    let document = document();
    let body = document.body().unwrap();
    let canvas = document.get_element_by_id("webgl-background").unwrap();
    let hero = document.query_selector(".hero-content").unwrap().unwrap();

    // compact: embedded in the hero block
    hero.append_child(&canvas).unwrap();
    assert!(canvas
        .parent_node()
        .unwrap()
        .is_same_node(Some(hero.as_ref())));

    // wide: restored to the top of the body
    body.insert_before(&canvas, body.first_child().as_ref())
        .unwrap();
    assert!(canvas
        .parent_node()
        .unwrap()
        .is_same_node(Some(body.as_ref())));
    assert!(body
        .first_child()
        .unwrap()
        .is_same_node(Some(canvas.as_ref())));
}
