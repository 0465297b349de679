//! Screen router component.
//!
//! Renders whichever screen the sequencer has committed.
//!
//! # Architecture
//!
//! - **The frame signal is the source of truth**: stages never switch screens
//!   themselves, they call [`AppContext::select`] / [`AppContext::back`]
//! - **Exit state keeps the old stage mounted**: while the frame is exiting
//!   the current stage gets the exit animation class, and it is replaced only
//!   once the sequencer commits the next screen
//! - **Navbar survives lateral moves**: switching sections re-keys only the
//!   panel, not the whole content stage

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::intro::Intro;
use crate::components::navbar::Navbar;
use crate::components::profiles::ProfilePicker;
use crate::components::sections::SectionPanel;
use crate::models::ScreenState;
use crate::utils::dom::scroll_to_top;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Which stage component a screen is rendered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Intro,
    Picker,
    Content,
}

impl From<ScreenState> for Stage {
    fn from(screen: ScreenState) -> Self {
        match screen {
            ScreenState::Intro => Stage::Intro,
            ScreenState::ProfilePicker => Stage::Picker,
            ScreenState::Content(_) => Stage::Content,
        }
    }
}

/// Main application router.
#[component]
pub fn ScreenRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let stage = Memo::new(move |_| Stage::from(ctx.frame.with(|f| f.screen)));
    let exiting = Memo::new(move |_| ctx.frame.with(|f| f.exiting));

    let stage_class = move || {
        if exiting.get() {
            format!("{} {}", css::stage, css::exiting)
        } else {
            css::stage.to_string()
        }
    };

    view! {
        <div class=css::viewport>
            {move || match stage.get() {
                Stage::Intro => view! {
                    <div class=stage_class><Intro /></div>
                }.into_any(),
                Stage::Picker => view! {
                    <div class=stage_class><ProfilePicker /></div>
                }.into_any(),
                Stage::Content => view! {
                    <div class=stage_class><ContentStage /></div>
                }.into_any(),
            }}
        </div>
    }
}

// ============================================================================
// Content Stage
// ============================================================================

/// Navbar plus the panel of the selected section.
#[component]
fn ContentStage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let section = Memo::new(move |_| ctx.section());

    // Each newly shown section starts from the top of the page
    Effect::new(move |_| {
        section.track();
        scroll_to_top();
    });

    view! {
        <div class=css::content>
            <Navbar />
            <main class=css::panel>
                {move || section.get().map(|section| view! {
                    <div class=css::panelBody><SectionPanel section=section /></div>
                })}
            </main>
        </div>
    }
}
