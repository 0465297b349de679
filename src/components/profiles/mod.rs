//! Profile picker screen ("Who's Browsing?").
//!
//! One card per catalog entry; picking a card asks the sequencer to open
//! that section.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons::section_icon;
use crate::config::PICKER_HEADING;
use crate::models::{CATALOG, CatalogEntry};

stylance::import_crate_style!(css, "src/components/profiles/profiles.module.css");

#[component]
pub fn ProfilePicker() -> impl IntoView {
    view! {
        <div class=css::picker>
            <h1 class=css::heading>{PICKER_HEADING}</h1>
            <div class=css::grid>
                {CATALOG
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| view! { <ProfileCard entry=entry index=index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A single profile card. Cards fade in one after another.
#[component]
fn ProfileCard(entry: &'static CatalogEntry, index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let id = entry.id;

    view! {
        <button
            class=css::card
            style:animation-delay=format!("{}ms", index * 100)
            on:click=move |_| ctx.select(id)
        >
            <div class=css::avatar style:background=entry.background()>
                <span class=css::avatarIcon><Icon icon=section_icon(id) /></span>
            </div>
            <span class=css::cardName>{entry.display_name}</span>
        </button>
    }
}
