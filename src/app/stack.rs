use leptos::prelude::*;

use super::section::SectionHead;
use crate::content::TECH_STACK;

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section class="stack" id="stack">
            <SectionHead title="Tech Stack Cloud" />
            <div class="stack-cloud">
                {TECH_STACK
                    .iter()
                    .map(|tech| {
                        view! {
                            <div class="stack-node">
                                <div class="stack-icon">{*tech}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
