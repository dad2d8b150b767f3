//! The portfolio page: toggle, header, skills, projects, certifications, footer.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::certifications::CertificationsSection;
use crate::components::footer::SiteFooter;
use crate::components::profile_header::ProfileHeader;
use crate::components::project_grid::ProjectGrid;
use crate::components::skills::SkillsSection;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeState;

/// Class always present on the root container.
pub const ROOT_CLASS: &str = "portfolio";

/// Full class list for the root container under `state`.
#[must_use]
pub fn root_class(state: ThemeState) -> String {
    match state.presentation_class() {
        Some(class) => format!("{ROOT_CLASS} {class}"),
        None => ROOT_CLASS.to_owned(),
    }
}

/// Renders every section in fixed order under the themed root container.
///
/// Expects an `RwSignal<ThemeState>` in context (provided by `App`).
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <div class=move || root_class(theme.get())>
            <div class="portfolio__inner">
                <div class="portfolio__toolbar">
                    <ThemeToggle/>
                </div>
                <ProfileHeader/>
                <SkillsSection/>
                <ProjectGrid/>
                <CertificationsSection/>
                <SiteFooter/>
            </div>
        </div>
    }
}
