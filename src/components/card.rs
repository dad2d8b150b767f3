//! Panel wrapper shared by the skills and certifications sections.

use leptos::prelude::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__content">{children()}</div>
        </div>
    }
}
