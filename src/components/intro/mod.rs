//! Intro screen.
//!
//! A dark stage where the owner's name fades in, then collapses into its
//! monogram. The sequencer moves on to the profile picker on its own; this
//! component only animates.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::hooks::use_phases;
use crate::config::intro_phases::{FULL_NAME_AT_MS, MONOGRAM_AT_MS};

stylance::import_crate_style!(css, "src/components/intro/intro.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Initial,
    FullName,
    Monogram,
}

#[component]
pub fn Intro() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (monogram, rest) = ctx.content.with_value(|p| {
        let name = &p.owner.name;
        let monogram = p.owner.monogram();
        let rest = name[monogram.len()..].to_string();
        (monogram, rest)
    });

    let phase = use_phases(
        Phase::Initial,
        vec![
            (FULL_NAME_AT_MS, Phase::FullName),
            (MONOGRAM_AT_MS, Phase::Monogram),
        ],
    );

    let name_class = move || match phase.get() {
        Phase::Initial => css::name.to_string(),
        Phase::FullName => format!("{} {}", css::name, css::nameVisible),
        Phase::Monogram => format!("{} {} {}", css::name, css::nameVisible, css::nameCollapsed),
    };

    view! {
        <div class=css::intro>
            <h1 class=name_class>
                <span class=css::monogram>{monogram}</span>
                <span class=css::rest>{rest}</span>
            </h1>
            <div class=css::glow></div>
        </div>
    }
}
