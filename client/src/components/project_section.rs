//! Project showcase grid.

use leptos::prelude::*;

use crate::data::projects::{ALL_PROJECTS_URL, PROJECTS, Project};

fn project_card(project: &'static Project) -> impl IntoView {
    let technologies = project
        .technologies
        .iter()
        .map(|tech| view! { <span class="project__tech">{*tech}</span> })
        .collect_view();

    view! {
        <article class="project" data-project-id=project.id.to_string()>
            <div class="project__image">
                <img src=project.image_url alt=project.title/>
            </div>
            <div class="project__body">
                <h3 class="project__title">{project.title}</h3>
                <p class="project__description">{project.description}</p>
                <div class="project__techs">{technologies}</div>
                <div class="project__links">
                    <a class="project__link" href=project.github_url target="_blank" rel="noopener noreferrer">
                        "Code"
                    </a>
                    {project.live_url.map(|url| view! {
                        <a class="project__link project__link--live" href=url target="_blank" rel="noopener noreferrer">
                            "Live Demo"
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn ProjectSection() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <div class="projects__inner">
                <h2 class="section-title">"My " <span class="accent-gradient">"Projects"</span></h2>
                <div class="projects__grid">
                    {PROJECTS.iter().map(project_card).collect_view()}
                </div>
                <div class="projects__cta">
                    <a href=ALL_PROJECTS_URL target="_blank" rel="noopener noreferrer" class="projects__all">
                        "View All Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}
