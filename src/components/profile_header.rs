//! Page header: name, tagline, social links, and resume download.

use leptos::prelude::*;

use crate::content::{PROFILE, RESUME, SOCIAL_LINKS, SocialLink};

#[component]
pub fn ProfileHeader() -> impl IntoView {
    view! {
        <header class="profile reveal">
            <h1 class="profile__name">{PROFILE.name}</h1>
            <p class="profile__tagline">{PROFILE.tagline}</p>
            <nav class="profile__social" aria-label="Social links">
                {SOCIAL_LINKS.iter().map(|link| view! { <SocialAnchor link=*link/> }).collect_view()}
            </nav>
            <div class="profile__resume">
                <a class="btn profile__resume-link" href=RESUME.href target="_blank" rel="noopener noreferrer">
                    {RESUME.label}
                </a>
            </div>
        </header>
    }
}

/// One social icon link. `mailto:` targets open in place.
#[component]
fn SocialAnchor(link: SocialLink) -> impl IntoView {
    let new_context = link.kind.opens_new_context();
    view! {
        <a
            class="profile__social-link"
            href=link.target
            target=new_context.then_some("_blank")
            rel=new_context.then_some("noopener noreferrer")
            title=link.kind.label()
            aria-label=link.kind.label()
        >
            {link.kind.glyph()}
        </a>
    }
}
