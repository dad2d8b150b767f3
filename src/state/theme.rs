//! Light/dark theme state.
//!
//! DESIGN
//! ======
//! `ThemeState` is owned by the root `App` component and shared through
//! Leptos context as an `RwSignal<ThemeState>`. It starts light, changes only
//! through `toggle`, and is never persisted: a reload always starts light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// CSS class carried by the root container while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Two-state view of the theme flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The single boolean controlling light/dark presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    /// Initial page-load state (light).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark { Theme::Dark } else { Theme::Light }
    }

    /// Presentation class for the root container, if any.
    #[must_use]
    pub fn presentation_class(self) -> Option<&'static str> {
        self.is_dark.then_some(DARK_CLASS)
    }

    /// Glyph shown on the toggle button: the sun while dark, the moon while light.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self.theme() {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }

    /// Accessible label naming the mode the toggle switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self.theme() {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}
