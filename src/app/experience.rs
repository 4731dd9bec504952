use leptos::prelude::*;

use super::section::SectionHead;
use crate::content::EXPERIENCES;

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    view! {
        <section class="experience" id="experience">
            <SectionHead title="Experience" />
            <div class="timeline">
                {EXPERIENCES
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        view! {
                            <div class="timeline-item">
                                <div class="timeline-node">
                                    <span>{i + 1}</span>
                                </div>
                                <div class="timeline-card">
                                    <h3>{item.role} " · " <span>{item.company}</span></h3>
                                    <p>{item.summary}</p>
                                    <div class="timeline-meta">{item.detail}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
