//! Placement and sizing policy for the drawable surfaces.

use crate::config;

/// Where the background canvas lives in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceHost {
    /// Full-bleed: first child of `<body>`.
    Body,
    /// Embedded in the hero content block (compact layout).
    Hero,
}

/// Compact layout at or below the breakpoint, wide above it.
pub fn host_for(viewport_width: u32) -> SurfaceHost {
    if viewport_width <= config::BREAKPOINT_WIDTH {
        SurfaceHost::Hero
    } else {
        SurfaceHost::Body
    }
}

/// A measured surface size in CSS pixels, with the zero-size substitution
/// already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    /// True when the fallback edge length was substituted; callers log a
    /// warning in that case.
    pub fell_back: bool,
}

impl SurfaceSize {
    /// An element that has not been laid out yet measures 0x0; substitute
    /// the fixed fallback edge so every downstream computation sees a
    /// usable size.
    pub fn from_measured(width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            Self {
                width: config::FALLBACK_SURFACE_SIZE,
                height: config::FALLBACK_SURFACE_SIZE,
                fell_back: true,
            }
        } else {
            Self {
                width,
                height,
                fell_back: false,
            }
        }
    }
}

pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    dpr.min(config::MAX_PIXEL_RATIO)
}

/// Render-target size in device pixels for a CSS-pixel layout box.
pub fn render_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = clamp_pixel_ratio(dpr);
    (
        (css_width * dpr).round() as u32,
        (css_height * dpr).round() as u32,
    )
}
