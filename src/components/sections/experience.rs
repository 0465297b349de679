//! Experience panel: one card per role, at most one expanded at a time.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::SectionHeading;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Experience;

stylance::import_crate_style!(css, "src/components/sections/experience.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

/// Clicking the open card closes it; clicking another card moves the
/// expansion there.
fn toggle(expanded: Option<usize>, clicked: usize) -> Option<usize> {
    if expanded == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn ExperienceList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let roles = ctx.content.with_value(|p| p.experience.clone());
    let expanded = RwSignal::new(None::<usize>);

    view! {
        <div class=shared::section>
            <SectionHeading title="Professional Experience" subtitle="Where I've worked and what I've done" />
            <div class=css::list>
                {roles
                    .into_iter()
                    .enumerate()
                    .map(|(index, role)| view! { <RoleCard role=role index=index expanded=expanded /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleCard(role: Experience, index: usize, expanded: RwSignal<Option<usize>>) -> impl IntoView {
    let is_open = Memo::new(move |_| expanded.get() == Some(index));
    let badge_icon = if role.is_internship() { ic::GRADUATION } else { ic::BRIEFCASE };

    let Experience {
        title,
        company,
        location,
        period,
        kind,
        description,
        responsibilities,
        skills,
        link,
    } = role;

    view! {
        <article
            class=format!("{} {} {}", shared::card, shared::fadeUp, css::role)
            style:animation-delay=format!("{}ms", index * 100)
        >
            <button
                class=css::summary
                on:click=move |_| expanded.update(|e| *e = toggle(*e, index))
                aria-expanded=move || is_open.get().to_string()
            >
                <span class=css::badge><Icon icon=badge_icon /></span>
                <div class=css::summaryText>
                    <h2 class=css::roleTitle>{title}</h2>
                    <p class=css::company><Icon icon=ic::COMPANY />{company}</p>
                    <div class=css::meta>
                        <span><Icon icon=ic::CALENDAR />{period}</span>
                        <span><Icon icon=ic::LOCATION />{location}</span>
                        <span class=css::kind>{kind}</span>
                    </div>
                </div>
                <span class=move || {
                    if is_open.get() {
                        format!("{} {}", css::expander, css::expanderOpen)
                    } else {
                        css::expander.to_string()
                    }
                }>
                    <Icon icon=ic::PLUS />
                </span>
            </button>

            <Show when=move || is_open.get()>
                <div class=css::details>
                    <p>{description.clone()}</p>
                    <h3>"Key Responsibilities"</h3>
                    <ul class=css::responsibilities>
                        {responsibilities
                            .iter()
                            .map(|r| view! { <li>{r.clone()}</li> })
                            .collect_view()}
                    </ul>
                    <div class=shared::chips>
                        {skills
                            .iter()
                            .map(|s| view! { <span class=shared::chip>{s.clone()}</span> })
                            .collect_view()}
                    </div>
                    {link.clone().map(|href| view! {
                        <a class=css::visit href=href target="_blank" rel="noopener noreferrer">
                            "Visit company" <Icon icon=ic::EXTERNAL_LINK />
                        </a>
                    })}
                </div>
            </Show>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_closed_card() {
        assert_eq!(toggle(None, 1), Some(1));
    }

    #[test]
    fn test_toggle_closes_open_card() {
        assert_eq!(toggle(Some(1), 1), None);
    }

    #[test]
    fn test_toggle_moves_expansion() {
        assert_eq!(toggle(Some(0), 2), Some(2));
    }
}
