use leptos::prelude::*;

use super::*;
use crate::util::dark_mode;
use crate::content::{CERTIFICATIONS, FOOTER_TEXT, PROFILE, PROJECTS, RESUME, SKILL_GROUPS, SOCIAL_LINKS};

fn dark() -> ThemeState {
    ThemeState { is_dark: true }
}

/// Opening tag of the element whose attributes contain `needle`.
fn opening_tag<'a>(html: &'a str, needle: &str) -> &'a str {
    let at = html.find(needle).unwrap_or_else(|| panic!("{needle} not rendered"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

fn static_sections(html: &str) -> &str {
    &html[html.find("<header").expect("header rendered")..]
}

// =============================================================
// Theme class on the root container
// =============================================================

#[test]
fn initial_render_is_light() {
    let html = render_app();
    assert!(html.contains(r#"class="portfolio""#));
    assert!(!html.contains("portfolio dark"));
}

#[test]
fn dark_render_carries_dark_class() {
    let html = render_page(dark());
    assert!(html.contains(r#"class="portfolio dark""#));
}

#[test]
fn toggle_pairs_restore_rendered_class() {
    let mut state = ThemeState::new();
    let before = render_page(state);
    state.toggle();
    let toggled = render_page(state);
    assert!(toggled.contains("portfolio dark"));
    state.toggle();
    assert_eq!(render_page(state), before);
}

#[test]
fn context_signal_toggle_updates_render() {
    let (once, twice) = with_owner(|| {
        let theme = RwSignal::new(ThemeState::new());
        provide_context(theme);
        theme.update(dark_mode::toggle);
        let once = view! { <PortfolioPage/> }.to_html();
        theme.update(dark_mode::toggle);
        let twice = view! { <PortfolioPage/> }.to_html();
        (once, twice)
    });
    assert!(once.contains(r#"class="portfolio dark""#));
    assert!(twice.contains(r#"class="portfolio""#));
    assert!(!twice.contains("portfolio dark"));
}

#[test]
fn toggle_button_reflects_theme() {
    let light = render_page(ThemeState::new());
    assert!(light.contains(r#"aria-label="Switch to dark mode""#));
    assert!(light.contains('☾'));

    let dark_html = render_page(dark());
    assert!(dark_html.contains(r#"aria-label="Switch to light mode""#));
    assert!(dark_html.contains('☀'));
}

// =============================================================
// Project grid
// =============================================================

#[test]
fn project_grid_renders_one_card_per_entry() {
    let html = render_page(ThemeState::new());
    assert_eq!(html.matches(r#"class="project-card""#).count(), PROJECTS.len());
    assert_eq!(PROJECTS.len(), 4);
}

#[test]
fn project_cards_follow_list_order_with_matching_links() {
    let html = render_page(ThemeState::new());
    let mut last = 0;
    for project in PROJECTS {
        let href = format!(r#"href="{}""#, project.link_url);
        let at = html.find(&href).unwrap_or_else(|| panic!("missing card for {}", project.title));
        assert!(at > last, "{} rendered out of order", project.title);
        let card_end = at + html[at..].find("</a>").expect("card closes");
        assert!(html[at..card_end].contains(project.title), "{} title outside its card", project.title);
        last = at;
    }
}

#[test]
fn project_cards_open_new_context() {
    let html = render_page(ThemeState::new());
    let tag = opening_tag(&html, "https://github.com/ShashankAtmakur/IAASOIC");
    assert!(tag.contains(r#"target="_blank""#));
    assert!(tag.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn project_grid_renders_custom_list() {
    const ONE: &[crate::content::ProjectEntry] = &[crate::content::ProjectEntry {
        title: "Only",
        description: "Single card",
        link_url: "https://example.com/only",
    }];
    let html = with_owner(|| {
        use crate::components::project_grid::ProjectGrid;
        view! { <ProjectGrid projects=ONE/> }.to_html()
    });
    assert_eq!(html.matches(r#"class="project-card""#).count(), 1);
    assert!(html.contains(r#"href="https://example.com/only""#));
}

// =============================================================
// Static sections
// =============================================================

#[test]
fn header_renders_identity_links_and_resume() {
    let html = render_page(ThemeState::new());
    assert!(html.contains(PROFILE.name));
    assert!(html.contains(PROFILE.tagline));
    for link in SOCIAL_LINKS {
        assert!(html.contains(&format!(r#"href="{}""#, link.target)));
    }
    let resume = opening_tag(&html, RESUME.href);
    assert!(resume.contains(r#"target="_blank""#));
    assert!(html.contains(RESUME.label));
}

#[test]
fn mailto_link_has_no_target() {
    let html = render_page(ThemeState::new());
    let tag = opening_tag(&html, "mailto:");
    assert!(!tag.contains("target="));
    let github = opening_tag(&html, r#"href="https://github.com/ShashankAtmakur""#);
    assert!(github.contains(r#"target="_blank""#));
}

#[test]
fn skills_and_certifications_render_in_order() {
    let html = render_page(ThemeState::new());
    assert!(html.contains("Languages:"));
    assert!(html.contains(&SKILL_GROUPS[0].joined()));
    assert!(html.contains("Java Programming – Oracle Academy"));
    let first = html.find(CERTIFICATIONS[0].name).unwrap();
    let last = html.find(CERTIFICATIONS[3].name).unwrap();
    assert!(first < last);
    assert!(html.contains(&FOOTER_TEXT.replace('&', "&amp;")));
}

#[test]
fn sections_render_in_fixed_order() {
    let html = render_page(ThemeState::new());
    let positions: Vec<_> = ["<header", r#"id="skills""#, r#"id="projects""#, r#"id="certifications""#, "<footer"]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{marker} missing")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn repeated_renders_are_identical() {
    assert_eq!(render_page(ThemeState::new()), render_page(ThemeState::new()));
    assert_eq!(render_page(dark()), render_page(dark()));
}

#[test]
fn static_sections_ignore_theme() {
    let light = render_page(ThemeState::new());
    let dark_html = render_page(dark());
    assert_eq!(static_sections(&light), static_sections(&dark_html));
}

// =============================================================
// Document shell
// =============================================================

#[test]
fn document_wraps_page_with_head() {
    let options = LeptosOptions::builder().output_name("portfolio").build();
    let html = render_document(options);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Shashank Atmakur | Portfolio</title>"));
    assert!(html.contains(r#"href="/portfolio.css""#));
    assert!(html.contains("portfolio.js"));
    assert!(html.contains(r#"class="portfolio""#));
}
