//! Content panels, one per [`SectionId`].
//!
//! - [`about`] - Hero banner and skill bars
//! - [`experience`] - Expandable role cards
//! - [`projects`] - Project grid with a detail overlay
//! - [`education`] - Degree card and coursework
//! - [`contact`] - Contact form producing a `mailto:` link

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod projects;

use leptos::prelude::*;

use crate::models::SectionId;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Panel for `section`.
#[component]
pub fn SectionPanel(section: SectionId) -> impl IntoView {
    match section {
        SectionId::About => view! { <about::About /> }.into_any(),
        SectionId::Experience => view! { <experience::ExperienceList /> }.into_any(),
        SectionId::Projects => view! { <projects::ProjectGrid /> }.into_any(),
        SectionId::Education => view! { <education::EducationCard /> }.into_any(),
        SectionId::Contact => view! { <contact::ContactPanel /> }.into_any(),
    }
}

/// Heading shared by every panel.
#[component]
fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <header class=css::heading>
            <h1 class=css::title>{title}</h1>
            {subtitle.map(|s| view! { <p class=css::subtitle>{s}</p> })}
        </header>
    }
}

#[cfg(test)]
mod tests {
    /// Class names a panel module references, paired with its stylesheet.
    const PANELS: [(&str, &str); 2] = [
        (include_str!("about.rs"), include_str!("about.module.css")),
        (include_str!("contact.rs"), include_str!("contact.module.css")),
    ];

    fn referenced_classes(source: &str) -> Vec<&str> {
        let mut classes: Vec<&str> = source
            .split("css::")
            .skip(1)
            .map(|rest| {
                let end = rest
                    .find(|c: char| !c.is_ascii_alphanumeric())
                    .unwrap_or(rest.len());
                &rest[..end]
            })
            .collect();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    fn defines(stylesheet: &str, class: &str) -> bool {
        stylesheet.match_indices(&format!(".{class}")).any(|(i, m)| {
            stylesheet[i + m.len()..]
                .chars()
                .next()
                .is_some_and(|c| !c.is_ascii_alphanumeric())
        })
    }

    #[test]
    fn test_panel_classes_are_styled() {
        for (source, stylesheet) in PANELS {
            for class in referenced_classes(source) {
                assert!(defines(stylesheet, class), "missing rule for .{class}");
            }
        }
    }

    #[test]
    fn test_hero_and_info_columns_have_rules() {
        assert!(defines(include_str!("about.module.css"), "intro"));
        assert!(defines(include_str!("contact.module.css"), "info"));
    }
}
