use crate::config;

/// The single light/dark flag for the page. One owner (the theme
/// controller); the animators never see the flag itself, they receive
/// parameter pushes when it changes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    pub fn new() -> Self {
        Self { dark: false }
    }

    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    /// Wireframe opacity pushed into the background material.
    pub fn background_opacity(&self) -> f32 {
        if self.dark {
            config::BACKGROUND_OPACITY_DARK
        } else {
            config::BACKGROUND_OPACITY_LIGHT
        }
    }

    /// Label for the toggle control: it names the mode you would switch to.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Light"
        } else {
            "Dark"
        }
    }
}
