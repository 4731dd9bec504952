use leptos::prelude::*;

use super::section::SectionHead;
use crate::content::{Project, PROJECTS};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    view! {
        <section class="projects" id="projects">
            <SectionHead title="Project Gallery" />
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .map(|project| view! { <ProjectCard project=*project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let new_tab = project.opens_new_tab();
    view! {
        <article class=format!("iso-card {}", project.accent)>
            <div class=format!("iso-scene {}", project.model)>
                <div class="iso-base"></div>
                <div class="iso-object"></div>
                <div class="iso-object secondary"></div>
                <div class="iso-object tertiary"></div>
            </div>
            <div class="iso-content">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <span>{project.meta}</span>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                class="project-link"
                                href=href
                                target=new_tab.then_some("_blank")
                                rel=new_tab.then_some("noreferrer")
                            >
                                "View Project"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_renders_projects_verbatim() {
        let html = Owner::new().with(|| view! { <ProjectGallery /> }.to_html());
        for project in PROJECTS.iter() {
            assert!(html.contains(project.title));
            assert!(html.contains(project.description));
            assert!(html.contains(project.meta));
            if let Some(link) = project.link {
                assert!(html.contains(&format!("href=\"{link}\"")));
            }
        }
        assert_eq!(html.matches("target=\"_blank\"").count(), PROJECTS.len());
        assert_eq!(html.matches("rel=\"noreferrer\"").count(), PROJECTS.len());
    }

    #[test]
    fn test_card_classes() {
        let html = Owner::new().with(|| view! { <ProjectCard project=PROJECTS[2] /> }.to_html());
        assert!(html.contains("iso-card silver"));
        assert!(html.contains("iso-scene globe"));
    }

    #[test]
    fn test_relative_link_stays_in_tab() {
        let project = Project {
            link: Some("#contact"),
            ..PROJECTS[0]
        };
        let html = Owner::new().with(|| view! { <ProjectCard project /> }.to_html());
        assert!(html.contains("href=\"#contact\""));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn test_missing_link_renders_no_anchor() {
        let project = Project {
            link: None,
            ..PROJECTS[1]
        };
        let html = Owner::new().with(|| view! { <ProjectCard project /> }.to_html());
        assert!(!html.contains("project-link"));
        assert!(html.contains(project.title));
    }
}
