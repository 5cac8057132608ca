/// Current window dimensions in CSS pixels. Always re-measured from the
/// host environment rather than cached, so a `Viewport` value is only a
/// snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a degenerate zero height yields 1.0 so camera
    /// setup never divides by zero.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}
