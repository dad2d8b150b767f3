//! Certifications card.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::content::CERTIFICATIONS;

#[component]
pub fn CertificationsSection() -> impl IntoView {
    view! {
        <section class="section reveal" id="certifications">
            <h2 class="section__title">"Certifications"</h2>
            <Card>
                <ul class="certifications">
                    {CERTIFICATIONS.iter().map(|cert| view! { <li>{cert.display()}</li> }).collect_view()}
                </ul>
            </Card>
        </section>
    }
}
