use leptos::prelude::*;

use crate::content::FOOTER_TEXT;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! { <footer class="site-footer reveal">{FOOTER_TEXT}</footer> }
}
