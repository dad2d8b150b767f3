//! Light/dark toggle button shown above the header.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// Flips the shared theme and reflects it into the document on click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let label = move || theme.get().toggle_label();

    view! {
        <button
            class="btn theme-toggle"
            type="button"
            on:click=move |_| theme.update(dark_mode::toggle)
            title=label
            aria-label=label
        >
            {move || theme.get().toggle_glyph()}
        </button>
    }
}
