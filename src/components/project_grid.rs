//! Project grid: one clickable card per project, in declaration order.
//!
//! DESIGN
//! ======
//! The grid is a plain map over a `'static` slice and never reads the theme,
//! so its markup is identical in light and dark mode.

use leptos::prelude::*;

use crate::content::{PROJECTS, ProjectEntry};

#[component]
pub fn ProjectGrid(#[prop(default = PROJECTS)] projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <section class="section reveal" id="projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="project-grid">
                {projects.iter().map(|project| view! { <ProjectCard project=*project/> }).collect_view()}
            </div>
        </section>
    }
}

/// A card linking out to the project in a new browsing context.
#[component]
pub fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <a class="project-card" href=project.link_url target="_blank" rel="noopener noreferrer">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__desc">{project.description}</p>
        </a>
    }
}
