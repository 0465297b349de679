//! Education panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::SectionHeading;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/sections/education.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

#[component]
pub fn EducationCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let education = ctx.content.with_value(|p| p.education.clone());

    view! {
        <div class=shared::section>
            <SectionHeading title="Education" />
            <article class=format!("{} {} {}", shared::card, shared::fadeUp, css::degree)>
                <div class=css::badge>
                    <Icon icon=ic::GRADUATION />
                    <span>{education.badge}</span>
                </div>
                <div class=css::degreeText>
                    <h2 class=css::institution>{education.institution}</h2>
                    <p class=css::school>{education.school}</p>
                    <p class=css::program>{education.degree}</p>
                    {education.minor.map(|minor| view! { <p class=css::minor>{minor}</p> })}
                    <div class=css::meta>
                        <span><Icon icon=ic::CALENDAR />{education.period}</span>
                        <span><Icon icon=ic::LOCATION />{education.location}</span>
                    </div>
                </div>
            </article>

            <section class=css::courses>
                <h2 class=css::coursesTitle><Icon icon=ic::COURSES />"Relevant Coursework"</h2>
                <div class=css::courseGrid>
                    {education
                        .courses
                        .into_iter()
                        .enumerate()
                        .map(|(index, course)| view! {
                            <div
                                class=format!("{} {} {}", shared::card, shared::fadeUp, css::course)
                                style:animation-delay=format!("{}ms", index * 60)
                            >
                                <span class=css::courseCode>{course.code}</span>
                                <span class=css::courseName>{course.name}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
