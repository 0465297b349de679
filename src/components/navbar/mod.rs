//! Top navigation bar of the content stage.
//!
//! Shows a back button, the brand and a section switcher. On desktop the
//! switcher is a dropdown under the current section's avatar; below
//! [`MOBILE_QUERY`] it becomes a full-width menu behind a hamburger button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons::{self as ic, section_icon};
use crate::config::{APP_BRAND, MOBILE_QUERY};
use crate::models::{CATALOG, SectionId};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let owner_name = ctx.content.with_value(|p| p.owner.name.clone());
    let is_mobile = use_media_query(MOBILE_QUERY);
    let menu_open = RwSignal::new(false);

    // A menu opened in one layout should not reappear in the other
    Effect::new(move |_| {
        is_mobile.track();
        menu_open.set(false);
    });

    let current = Memo::new(move |_| ctx.section());

    let on_choose = Callback::new(move |section: SectionId| {
        menu_open.set(false);
        ctx.select(section);
    });

    let toggle_menu = move |_: leptos::ev::MouseEvent| menu_open.update(|open| *open = !*open);

    view! {
        <header class=css::bar>
            <div class=css::left>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.back()
                    title="Back"
                    aria-label="Go back"
                >
                    <Icon icon=ic::BACK />
                </button>
                <span class=css::brand>{APP_BRAND}</span>
                <span class=css::greeting>
                    <span class=css::divider>"|"</span>
                    "Hi, I'm " {owner_name}
                </span>
            </div>

            {move || if is_mobile.get() {
                view! {
                    <button
                        class=css::iconButton
                        on:click=toggle_menu
                        aria-label="Open menu"
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }}
                    </button>
                    <Show when=move || menu_open.get()>
                        <nav class=css::mobileMenu>
                            <SectionMenu current=current on_choose=on_choose />
                        </nav>
                    </Show>
                }.into_any()
            } else {
                view! {
                    <div class=css::profileMenu>
                        <button class=css::avatarButton on:click=toggle_menu aria-label="Switch section">
                            <span
                                class=css::avatar
                                style:background=move || {
                                    current.get().unwrap_or(SectionId::About).entry().background()
                                }
                            >
                                <Icon icon=ic::USER />
                            </span>
                            <span class=move || {
                                if menu_open.get() {
                                    format!("{} {}", css::chevron, css::chevronOpen)
                                } else {
                                    css::chevron.to_string()
                                }
                            }>
                                <Icon icon=ic::CHEVRON_DOWN />
                            </span>
                        </button>
                        <Show when=move || menu_open.get()>
                            <nav class=css::dropdown>
                                <SectionMenu current=current on_choose=on_choose />
                            </nav>
                        </Show>
                    </div>
                }.into_any()
            }}
        </header>
    }
}

/// Menu entries for every section, with the current one highlighted.
#[component]
fn SectionMenu(current: Memo<Option<SectionId>>, on_choose: Callback<SectionId>) -> impl IntoView {
    CATALOG
        .iter()
        .map(|entry| {
            let id = entry.id;
            let item_class = move || {
                if current.get() == Some(id) {
                    format!("{} {}", css::menuItem, css::menuItemActive)
                } else {
                    css::menuItem.to_string()
                }
            };
            view! {
                <button class=item_class on:click=move |_| on_choose.run(id)>
                    <span class=css::menuAvatar style:background=entry.background()>
                        <Icon icon=section_icon(id) />
                    </span>
                    <span>{entry.display_name}</span>
                </button>
            }
        })
        .collect_view()
}
