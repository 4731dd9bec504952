use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use crate::reveal::{Reveal, REVEAL_CLASS, REVEAL_THRESHOLD};

/// Section heading that animates in the first time it scrolls into view.
///
/// The visibility observer is bound to this component's owner, so it is
/// registered on mount and disconnected when the heading is torn down, or as
/// soon as the heading has been revealed.
#[component]
pub fn SectionHead(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let head_ref = NodeRef::<html::Div>::new();
    let (reveal, set_reveal) = signal(Reveal::default());

    use_intersection_observer_with_options(
        head_ref,
        move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            let mut latch = reveal.get_untracked();
            if latch.observe_then_stop(visible, || observer.disconnect()) {
                set_reveal.set(latch);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    view! {
        <div
            node_ref=head_ref
            class="section-head"
            class=(REVEAL_CLASS, move || reveal.get().is_revealed())
        >
            <h2>{title}</h2>
            {subtitle.map(|s| view! { <p>{s}</p> })}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_head_starts_unrevealed() {
        let html = Owner::new().with(|| view! { <SectionHead title="Experience" /> }.to_html());
        assert!(html.contains("section-head"));
        assert!(html.contains("Experience"));
        assert!(!html.contains("reveal"));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_head_with_subtitle() {
        let html = Owner::new().with(|| {
            view! { <SectionHead title="Contact" subtitle="Send a message directly to my inbox." /> }
                .to_html()
        });
        assert!(html.contains("<p"));
        assert!(html.contains("Send a message directly to my inbox."));
    }
}
