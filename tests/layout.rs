use landing_wasm::layout::{clamp_pixel_ratio, host_for, render_size, SurfaceHost, SurfaceSize};
use landing_wasm::viewport::Viewport;

#[test]
fn breakpoint_is_inclusive_on_the_compact_side() {
    assert_eq!(host_for(320), SurfaceHost::Hero);
    assert_eq!(host_for(1024), SurfaceHost::Hero);
    assert_eq!(host_for(1025), SurfaceHost::Body);
    assert_eq!(host_for(1920), SurfaceHost::Body);
}

#[test]
fn zero_measurement_substitutes_the_fallback_edge() {
    let size = SurfaceSize::from_measured(0.0, 0.0);
    assert!(size.fell_back);
    assert_eq!(size.width, 80.0);
    assert_eq!(size.height, 80.0);

    // one degenerate axis is enough to fall back
    let size = SurfaceSize::from_measured(120.0, 0.0);
    assert!(size.fell_back);
    assert_eq!(size.width, 80.0);

    let size = SurfaceSize::from_measured(120.0, 90.0);
    assert!(!size.fell_back);
    assert_eq!(size.width, 120.0);
    assert_eq!(size.height, 90.0);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamp_pixel_ratio(1.0), 1.0);
    assert_eq!(clamp_pixel_ratio(1.5), 1.5);
    assert_eq!(clamp_pixel_ratio(3.0), 2.0);
    assert_eq!(render_size(100.0, 50.0, 1.0), (100, 50));
    assert_eq!(render_size(100.0, 50.0, 3.0), (200, 100));
}

#[test]
fn viewport_aspect_guards_degenerate_height() {
    assert_eq!(Viewport::new(1600, 900).aspect(), 1600.0 / 900.0);
    assert_eq!(Viewport::new(1600, 0).aspect(), 1.0);
}
