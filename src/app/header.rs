use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{NAV_LINKS, PROFILE};
use crate::nav::{follow_link, MenuState};
use crate::surface::BrowserSurface;

const GITHUB_ICON: &str = "M12 2a10 10 0 0 0-3.16 19.48c.5.1.68-.22.68-.48v-1.7c-2.78.6-3.36-1.18-3.36-1.18-.45-1.16-1.1-1.46-1.1-1.46-.9-.62.07-.6.07-.6 1 .08 1.52 1.04 1.52 1.04.9 1.52 2.36 1.08 2.94.82.1-.66.36-1.08.64-1.32-2.22-.25-4.56-1.12-4.56-4.96 0-1.1.4-2 1.04-2.7-.1-.25-.45-1.28.1-2.66 0 0 .86-.28 2.82 1.02A9.7 9.7 0 0 1 12 6.8c.85 0 1.72.12 2.52.34 1.96-1.3 2.82-1.02 2.82-1.02.55 1.38.2 2.4.1 2.66.64.7 1.04 1.6 1.04 2.7 0 3.86-2.34 4.7-4.58 4.95.36.3.68.92.68 1.86v2.76c0 .26.18.58.68.48A10 10 0 0 0 12 2z";
const LINKEDIN_ICON: &str = "M4.98 3.5a2.5 2.5 0 1 0 0 5 2.5 2.5 0 0 0 0-5zM3 9h4v12H3V9zm7.5 0h3.8v1.64h.06c.53-1 1.84-2.06 3.8-2.06 4.06 0 4.81 2.67 4.81 6.15V21h-4v-5.3c0-1.27-.02-2.9-1.77-2.9-1.78 0-2.05 1.38-2.05 2.8V21h-4V9z";

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    let follow = move |href: &'static str, ev: MouseEvent| {
        let mut state = menu.get_untracked();
        let outcome = follow_link(href, &mut state, &BrowserSurface);
        if outcome.prevent_default {
            ev.prevent_default();
        }
        log::debug!("nav to {href}, scrolled: {}", outcome.scrolled);
        set_menu.set(state);
    };

    view! {
        <header class=move || if menu.get().is_open() { "nav open" } else { "nav" }>
            <div class="logo">{PROFILE.initials}</div>
            <button
                class="nav-toggle"
                type="button"
                aria-label="Toggle menu"
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=move |_| set_menu.update(MenuState::toggle)
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class="nav-menu">
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <a href=href on:click=move |ev| follow(href, ev)>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="nav-social">
                    <SocialLink href=PROFILE.github label="GitHub" icon=GITHUB_ICON />
                    <SocialLink href=PROFILE.linkedin label="LinkedIn" icon=LINKEDIN_ICON />
                </div>
            </div>
        </header>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noreferrer" aria-label=label>
            <span class="nav-icon" aria-hidden="true">
                <svg viewBox="0 0 24 24" role="img" focusable="false">
                    <path d=icon />
                </svg>
            </span>
            {label}
        </a>
    }
}
