use landing_wasm::logo::{hsv_to_rgb, hue_at, QuadSize, TextureGate};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn quad_height_comes_from_the_light_mask_aspect() {
    // 2:1 mask on a 100-unit surface
    let quad = QuadSize::derive(100.0, 200.0, 100.0);
    assert_eq!(quad.width, 100.0);
    assert!(approx(quad.height, 100.0 / 2.0 * 1.02));

    // square mask: only the vertical correction remains
    let quad = QuadSize::derive(80.0, 64.0, 64.0);
    assert!(approx(quad.height, 80.0 * 1.02));
}

#[test]
fn material_gate_requires_both_masks() {
    let mut gate = TextureGate::new();
    assert!(!gate.ready());

    gate.note_loaded();
    assert!(!gate.ready());

    gate.note_loaded();
    assert!(gate.ready());
}

#[test]
fn one_failed_load_is_terminal() {
    let mut gate = TextureGate::new();
    gate.note_loaded();
    gate.note_failed();
    assert!(gate.failed());
    assert!(!gate.ready());

    // a late success cannot resurrect the material
    gate.note_loaded();
    assert!(!gate.ready());
}

#[test]
fn hue_field_stays_in_unit_range_and_moves_with_time() {
    for &(dx, dy) in &[(0.0f32, 0.0f32), (1.0, 0.0), (-0.7, 0.3), (0.5, -0.9)] {
        for &t in &[0.0f32, 1.0, 37.5] {
            let hue = hue_at(dx, dy, t);
            assert!((0.0..1.0).contains(&hue), "hue {hue} out of range");
        }
    }

    // along +x the angle term vanishes: hue = fract(radius/2 - t/10)
    assert!(approx(hue_at(1.0, 0.0, 0.0), 0.5));
    assert!(approx(hue_at(1.0, 0.0, 1.0), 0.4));
    // the quad center animates purely with time
    assert!(approx(hue_at(0.0, 0.0, 0.0), 0.0));
}

#[test]
fn hsv_conversion_fixed_points() {
    // the logo palette: s = 0.8, v = 1.0
    let [r, g, b] = hsv_to_rgb(0.0, 0.8, 1.0);
    assert!(approx(r, 1.0) && approx(g, 0.2) && approx(b, 0.2));

    // zero saturation is grey at the value
    let [r, g, b] = hsv_to_rgb(0.37, 0.0, 0.6);
    assert!(approx(r, 0.6) && approx(g, 0.6) && approx(b, 0.6));

    // primary green at a third of the wheel
    let [r, g, b] = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
    assert!(approx(r, 0.0) && approx(g, 1.0) && approx(b, 0.0));

    // hue wraps
    let a = hsv_to_rgb(0.25, 0.8, 1.0);
    let b = hsv_to_rgb(1.25, 0.8, 1.0);
    assert!(approx(a[0], b[0]) && approx(a[1], b[1]) && approx(a[2], b[2]));
}
