//! Skills card: one labeled line per skill group.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::content::SKILL_GROUPS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section class="section reveal" id="skills">
            <h2 class="section__title">"Skills"</h2>
            <Card>
                <ul class="skills">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <li class="skills__group">
                                    <strong class="skills__label">{format!("{}:", group.label)}</strong>
                                    <span class="skills__items">{group.joined()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Card>
        </section>
    }
}
