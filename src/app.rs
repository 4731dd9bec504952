mod contact;
mod experience;
mod header;
mod hero;
mod projects;
mod section;
mod stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use contact::ContactSection;
use experience::ExperienceTimeline;
use header::Header;
use hero::Hero;
use projects::ProjectGallery;
use stack::TechStack;

/// RFC 3339 timestamp of the build, exposed as a `build-time` meta tag.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=PROFILE.name />
        <Meta name="description" content=PROFILE.intro />
        <Meta name="build-time" content=BUILD_TIME />

        <Router>
            <div class="app">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <ProjectGallery />
        <ExperienceTimeline />
        <TechStack />
        <ContactSection />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            {format!("© {} {} · {}", env!("BUILD_YEAR"), PROFILE.name, PROFILE.credit)}
        </footer>
    }
}
