//! Full-page fallback rendered by the root `ErrorBoundary`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_BRAND;

stylance::import_crate_style!(css, "src/components/error_screen.module.css");

/// "Lost your way?" page listing whatever reached the boundary, with a
/// reload button.
#[component]
pub fn ErrorScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let reload = |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("reload failed: {:?}", e);
            }
        }
    };

    view! {
        <div class=css::screen>
            <span class=css::brand>{APP_BRAND}</span>
            <h1 class=css::title>"Lost your way?"</h1>
            <p class=css::lead>"This page failed to load. Reloading usually fixes it."</p>
            <ul class=css::errors>
                {move || errors
                    .get()
                    .into_iter()
                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                    .collect_view()}
            </ul>
            <button class=css::reload on:click=reload>
                <Icon icon=ic::RELOAD />
                "Reload"
            </button>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::core::error::ContentError;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_lists_boundary_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(ContentError::EmptyTitle {
            kind: "project",
            index: 0,
        });
        let errors = ArcRwSignal::new(errors);

        let body = document().body().unwrap();
        let _handle = mount_to(body.clone(), move || view! { <ErrorScreen errors=errors /> });

        let text = body.text_content().unwrap_or_default();
        assert!(text.contains("Lost your way?"));
        assert!(text.contains("project entry #0 has an empty title"));
    }
}
