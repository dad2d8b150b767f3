//! Server-side rendering to HTML strings.
//!
//! Every render runs inside a fresh reactive `Owner`, so context and signals
//! never leak between calls and repeated renders are independent.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::app::{App, shell};
use crate::pages::portfolio::PortfolioPage;
use crate::state::theme::ThemeState;

/// Render the root `App` (initial light theme).
#[must_use]
pub fn render_app() -> String {
    with_owner(|| view! { <App/> }.to_html())
}

/// Render the page body under an explicit theme.
#[must_use]
pub fn render_page(theme: ThemeState) -> String {
    with_owner(move || {
        provide_context(RwSignal::new(theme));
        view! { <PortfolioPage/> }.to_html()
    })
}

/// Render the complete HTML document, including hydration scripts.
#[must_use]
pub fn render_document(options: LeptosOptions) -> String {
    with_owner(move || shell(options).to_html())
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}
