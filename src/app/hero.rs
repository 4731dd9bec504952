use leptos::{ev::MouseEvent, html, prelude::*};

use crate::content::{CLI_LINES, HERO_STATS, PROFILE};
use crate::tilt::{Bounds, Tilt};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="top">
            <div class="hero-content">
                <h1>{PROFILE.name} <span>{PROFILE.headline}</span></h1>
                <p class="hero-intro">{PROFILE.intro}</p>
                <div class="hero-actions">
                    <a class="btn primary" href="#projects">
                        "View Projects"
                    </a>
                    <a class="btn ghost" href="#contact">
                        "Let’s Collaborate"
                    </a>
                </div>
                <div class="hero-stats">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div>
                                    <span>{stat.value}</span>
                                    <small>{stat.caption}</small>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <TiltPanel />
        </section>
    }
}

/// Glass terminal that leans towards the pointer.
#[component]
fn TiltPanel() -> impl IntoView {
    let visual_ref = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(Tilt::NEUTRAL);

    let on_move = move |ev: MouseEvent| {
        let el = if let Some(el) = visual_ref.get_untracked() {
            el
        } else {
            return;
        };
        let bounds = Bounds::from(el.get_bounding_client_rect());
        set_tilt.set(Tilt::from_pointer(
            bounds,
            ev.client_x() as f64,
            ev.client_y() as f64,
        ));
    };

    view! {
        <div
            node_ref=visual_ref
            class="hero-visual"
            style=move || tilt.get().style()
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.update(Tilt::reset)
        >
            <div class="glass-panel">
                <div class="glass-header">
                    <span class="dot red"></span>
                    <span class="dot yellow"></span>
                    <span class="dot green"></span>
                    <span class="label">"/bridge/terminal"</span>
                </div>
                <div class="cli">
                    {CLI_LINES
                        .iter()
                        .map(|line| view! { <div class="cli-line">{*line}</div> })
                        .collect_view()}
                    <div class="cli-cursor">
                        <span class="cursor"></span>
                    </div>
                </div>
                <div class="orb"></div>
                <div class="orb orb-small"></div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_panel_renders_neutral_tilt() {
        let html = Owner::new().with(|| view! { <TiltPanel /> }.to_html());
        assert!(html.contains("--hero-tilt-x: 0deg; --hero-tilt-y: 0deg"));
        for line in CLI_LINES {
            assert!(html.contains(line));
        }
    }

    #[test]
    fn test_hero_copy() {
        let html = Owner::new().with(|| view! { <Hero /> }.to_html());
        assert!(html.contains(PROFILE.name));
        assert!(html.contains(PROFILE.intro));
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("href=\"#contact\""));
        for stat in HERO_STATS.iter() {
            assert!(html.contains(stat.caption));
        }
    }
}
