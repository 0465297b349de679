//! Projects panel: poster grid plus a detail overlay for the chosen project.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::SectionHeading;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Project;

stylance::import_crate_style!(css, "src/components/sections/projects.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let projects = ctx.content.with_value(|p| p.projects.clone());
    let selected = RwSignal::new(None::<Project>);

    view! {
        <div class=shared::section>
            <SectionHeading title="Featured Projects" subtitle="Things I've built" />
            <div class=css::grid>
                {projects
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| view! {
                        <ProjectCard project=project index=index selected=selected />
                    })
                    .collect_view()}
            </div>

            {move || selected.get().map(|project| view! {
                <ProjectDetail project=project on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, selected: RwSignal<Option<Project>>) -> impl IntoView {
    let demo = project.demo_url.clone();
    let open_details = {
        let project = project.clone();
        move |_: leptos::ev::MouseEvent| selected.set(Some(project.clone()))
    };

    view! {
        <article
            class=format!("{} {} {}", shared::card, shared::fadeUp, css::poster)
            style:animation-delay=format!("{}ms", index * 100)
        >
            <div class=css::image>
                <img src=project.image.clone() alt=project.title.clone() loading="lazy" />
                <span class=css::matchBadge>{format!("{}% Match", project.match_score)}</span>
            </div>
            <div class=css::body>
                <h2 class=css::posterTitle>{project.title.clone()}</h2>
                <p class=css::description>{project.description.clone()}</p>
                <div class=shared::chips>
                    {project
                        .tech_stack
                        .iter()
                        .take(4)
                        .map(|t| view! { <span class=shared::chip>{t.clone()}</span> })
                        .collect_view()}
                </div>
                <div class=css::actions>
                    {demo.map(|href| view! {
                        <a
                            class=shared::primaryButton
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon icon=ic::PLAY /> "Demo"
                        </a>
                    })}
                    <button class=shared::secondaryButton on:click=open_details>
                        <Icon icon=ic::INFO /> "More Info"
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Full-screen overlay; clicking the backdrop or the close button dismisses it.
#[component]
fn ProjectDetail(project: Project, on_close: Callback<()>) -> impl IntoView {
    let Project {
        title,
        long_description,
        features,
        tech_stack,
        image,
        match_score,
        demo_url,
        github_url,
        ..
    } = project;

    view! {
        <div class=css::backdrop on:click=move |_| on_close.run(())>
            <div class=css::modal on:click=|ev| ev.stop_propagation()>
                <button class=css::close on:click=move |_| on_close.run(()) aria-label="Close">
                    <Icon icon=ic::CLOSE />
                </button>
                <div class=css::modalHero style:background-image=format!("url(\"{}\")", image)>
                    <div class=css::modalHeroShade>
                        <h2 class=css::modalTitle>{title}</h2>
                        <div class=css::actions>
                            {demo_url.map(|href| view! {
                                <a class=shared::primaryButton href=href target="_blank" rel="noopener noreferrer">
                                    <Icon icon=ic::PLAY /> "Live Demo"
                                </a>
                            })}
                            {github_url.map(|href| view! {
                                <a class=shared::secondaryButton href=href target="_blank" rel="noopener noreferrer">
                                    <Icon icon=ic::GITHUB /> "Source"
                                </a>
                            })}
                            <span class=css::roundIcon><Icon icon=ic::THUMBS_UP /></span>
                        </div>
                    </div>
                </div>
                <div class=css::modalBody>
                    <div>
                        <span class=css::matchBadge>{format!("{}% Match", match_score)}</span>
                        <p class=css::longDescription>{long_description}</p>
                        <h3>"Key Features"</h3>
                        <ul class=css::features>
                            {features
                                .into_iter()
                                .map(|f| view! { <li><Icon icon=ic::CHECK />{f}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <aside>
                        <h3>"Tech Stack"</h3>
                        <div class=shared::chips>
                            {tech_stack
                                .into_iter()
                                .map(|t| view! { <span class=shared::chip>{t}</span> })
                                .collect_view()}
                        </div>
                    </aside>
                </div>
            </div>
        </div>
    }
}
