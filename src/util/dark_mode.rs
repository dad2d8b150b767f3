//! Reflects the theme into the live document.
//!
//! Adds or removes the `dark` class on the `<html>` element so page-wide
//! styles follow the theme. Nothing is written to storage; every page load
//! starts light. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! DOM access is best-effort browser-only behavior; SSR and test builds
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;
#[cfg(feature = "hydrate")]
use crate::state::theme::DARK_CLASS;

/// Apply the `dark` class on the `<html>` element iff `enabled`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, enabled);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle the theme and apply the result to the document before returning.
pub fn toggle(state: &mut ThemeState) {
    state.toggle();
    apply(state.is_dark);
    #[cfg(feature = "hydrate")]
    log::debug!("theme switched to {:?}", state.theme());
}
