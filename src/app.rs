//! Root application component and the HTML document shell.

use leptos::prelude::*;

use crate::pages::portfolio::PortfolioPage;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

pub const PAGE_TITLE: &str = "Shashank Atmakur | Portfolio";

/// Site-relative path of the exported stylesheet.
pub const STYLESHEET_HREF: &str = "/portfolio.css";

/// HTML shell rendered on the server for export + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{PAGE_TITLE}</title>
                <link rel="stylesheet" href=STYLESHEET_HREF/>
                <HydrationScripts options/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the theme state (light) and provides it to the page. Once mounted
/// in the browser the initial theme is applied to `<html>`.
#[component]
pub fn App() -> impl IntoView {
    let theme = RwSignal::new(ThemeState::new());
    provide_context(theme);

    Effect::new(move || dark_mode::apply(theme.get_untracked().is_dark));

    view! { <PortfolioPage/> }
}
