//! About panel: hero banner with portrait and links, then skill bars.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::SectionHeading;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Skill, SkillGroup};

stylance::import_crate_style!(css, "src/components/sections/about.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, groups) = ctx
        .content
        .with_value(|p| (p.owner.clone(), p.about.skill_groups.clone()));

    let banner = format!(
        "linear-gradient(to bottom, rgba(0, 0, 0, 0.6), #000), url(\"{}\")",
        owner.banner
    );

    view! {
        <div>
            <section class=css::hero style:background-image=banner>
                <div class=css::heroInner>
                    <div class=css::portrait>
                        <img src=owner.portrait.clone() alt=owner.name.clone() />
                        <div class=css::portraitCaption>
                            <h3>{owner.name.clone()}</h3>
                            <p>{owner.headline.clone()}</p>
                        </div>
                    </div>

                    <div class=css::intro>
                        <p class=css::hello>"Hi, I'm " {owner.name.clone()}</p>
                        <h1 class=css::headline>{owner.headline.clone()}</h1>
                        <div class=css::facts>
                            <span class=css::fact><Icon icon=ic::LOCATION />{owner.location.clone()}</span>
                            <span class=css::fact><Icon icon=ic::CALENDAR />{owner.status.clone()}</span>
                        </div>
                        <div class=css::links>
                            <a
                                class=css::socialLink
                                href=owner.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn profile"
                            >
                                <Icon icon=ic::LINKEDIN />
                            </a>
                            <a
                                class=css::socialLink
                                href=owner.github.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub profile"
                            >
                                <Icon icon=ic::GITHUB />
                            </a>
                            <a class=shared::primaryButton href=owner.resume.clone() download="">
                                <Icon icon=ic::DOWNLOAD />
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <div class=shared::section>
                <SectionHeading title="Technical Skills" />
                {groups
                    .into_iter()
                    .map(|group| view! { <SkillGroupRow group=group /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillGroupRow(group: SkillGroup) -> impl IntoView {
    view! {
        <section class=css::group>
            <h2 class=css::groupTitle>{group.title}</h2>
            <div class=css::skillGrid>
                {group
                    .skills
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| view! { <SkillCard skill=skill index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Logo, name and a proficiency bar that fills on mount.
#[component]
fn SkillCard(skill: Skill, index: usize) -> impl IntoView {
    let width = format!("{}%", skill.percent());

    view! {
        <div
            class=format!("{} {} {}", shared::card, shared::fadeUp, css::skill)
            style:animation-delay=format!("{}ms", index * 80)
        >
            <img class=css::skillIcon src=skill.icon alt=skill.name.clone() loading="lazy" />
            <div class=css::skillBody>
                <div class=css::skillHeader>
                    <span class=css::skillName>{skill.name}</span>
                    <span class=css::skillLevel>{skill.level}</span>
                </div>
                <div class=css::track>
                    <div class=css::fill style:width=width></div>
                </div>
            </div>
        </div>
    }
}
