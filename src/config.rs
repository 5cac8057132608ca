//! Page-wide tunables. The values mirror the shipped site; nothing here is
//! read from the environment at runtime.

/// Viewport widths at or below this are laid out as "compact" (the
/// background canvas is embedded in the hero block instead of full-bleed).
pub const BREAKPOINT_WIDTH: u32 = 1024;

/// Quiet window for the trailing resize debounce.
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

/// Frame deltas at or above this skip the mesh update for the tick.
pub const FRAME_SKIP_THRESHOLD_MS: f64 = 32.0;

/// Wave speed, in phase units per millisecond of animation time.
pub const ANIMATION_SPEED: f32 = 0.0015;

/// Peak vertex displacement of the background wave.
pub const WAVE_AMPLITUDE: f32 = 0.5;

/// Pointer-driven tilt range, radians per normalized axis unit.
pub const TILT_RANGE: f32 = 0.1;

/// Wireframe color, 0xE25747 as linear-ish RGB.
pub const MESH_COLOR: [f32; 3] = [226.0 / 255.0, 87.0 / 255.0, 71.0 / 255.0];

pub const BACKGROUND_OPACITY_LIGHT: f32 = 0.25;
pub const BACKGROUND_OPACITY_DARK: f32 = 0.75;

/// Substitute edge length when a surface measures zero (not yet laid out).
pub const FALLBACK_SURFACE_SIZE: f64 = 80.0;

/// Device pixel ratio is clamped here to cap the render-target size.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Per-frame increment of the logo time accumulator. Frame-driven on
/// purpose: the shipped mark sped up with refresh rate and that look is
/// kept.
pub const LOGO_TIME_STEP: f32 = 0.05;

/// Vertical stretch compensation for the logo quad, measured empirically.
pub const LOGO_HEIGHT_CORRECTION: f32 = 1.02;

pub const ERROR_FLASH_MS: i32 = 1000;
pub const FORM_REVERT_MS: i32 = 2000;

/// Collection endpoint of the waitlist document store.
pub const WAITLIST_ENDPOINT: &str = "/api/waitlist";

pub const LOGO_MASK_LIGHT_SRC: &str = "assets/logo-mask-light.png";
pub const LOGO_MASK_DARK_SRC: &str = "assets/logo-mask-dark.png";
