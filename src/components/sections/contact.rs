//! Contact panel.
//!
//! The form never sends anything itself: submitting builds a `mailto:` link
//! for the visitor's mail client, and "Copy template" puts the same email on
//! the clipboard for visitors without one.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::SectionHeading;
use crate::app::AppContext;
use crate::components::hooks::TimedFlag;
use crate::components::icons as ic;
use crate::config::contact::COPY_FEEDBACK_MS;
use crate::core::EmailTemplate;
use crate::core::contact::validate;
use crate::core::error::ContactError;
use crate::models::{ContactCopy, ContactForm, OpportunityType, VisitorType};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sections/contact.module.css");
stylance::import_crate_style!(shared, "src/components/sections/sections.module.css");

/// Note shown under the form once the visitor says who they are.
fn tailored_note(copy: &ContactCopy, visitor: Option<VisitorType>) -> Option<&str> {
    match visitor? {
        VisitorType::Recruiter => Some(&copy.recruiter_note),
        VisitorType::Collaborator => Some(&copy.collaborator_note),
        VisitorType::General => Some(&copy.general_note),
    }
}

/// Apply a visitor-type `<select>` change. Leaving "recruiter" drops any
/// opportunity already picked.
fn set_visitor(form: &mut ContactForm, value: &str) {
    form.visitor = value.parse().ok();
    if form.visitor != Some(VisitorType::Recruiter) {
        form.opportunity = None;
    }
}

#[component]
pub fn ContactPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (owner, copy) = ctx
        .content
        .with_value(|p| (p.owner.clone(), p.contact.clone()));

    let form = RwSignal::new(ContactForm::default());
    let error = RwSignal::new(None::<ContactError>);
    let sent = RwSignal::new(false);
    let copied = TimedFlag::new(COPY_FEEDBACK_MS);

    let recipient = StoredValue::new(owner.first_name().to_string());
    let address = StoredValue::new(owner.email.clone());
    let copy = StoredValue::new(copy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let result = validate(&current).and_then(|()| {
            let template = recipient.with_value(|r| EmailTemplate::for_form(&current, r));
            address.with_value(|a| dom::open_url(&template.mailto(a)))
        });
        match result {
            Ok(()) => {
                log::info!("contact: opened mail client for {:?}", current.visitor);
                error.set(None);
                sent.set(true);
                form.set(ContactForm::default());
            }
            Err(e) => {
                log::warn!("contact: {}", e);
                sent.set(false);
                error.set(Some(e));
            }
        }
    };

    let on_copy = move |_: leptos::ev::MouseEvent| {
        let text = form.with_untracked(|f| {
            recipient.with_value(|r| EmailTemplate::for_form(f, r).clipboard_text())
        });
        spawn_local(async move {
            match dom::copy_to_clipboard(&text).await {
                Ok(()) => copied.raise(),
                Err(e) => {
                    log::warn!("contact: {}", e);
                    error.set(Some(e));
                }
            }
        });
    };

    let is_recruiter = move || form.with(|f| f.visitor == Some(VisitorType::Recruiter));

    view! {
        <div class=shared::section>
            <SectionHeading title="Let's Connect" />
            <div class=css::layout>
                <aside class=css::info>
                    <p class=css::intro>{copy.with_value(|c| c.intro.clone())}</p>

                    <h2 class=css::infoTitle>"What I'm Looking For"</h2>
                    <ul class=css::lookingFor>
                        {copy.with_value(|c| {
                            c.looking_for
                                .iter()
                                .map(|item| view! { <li><Icon icon=ic::CHECK />{item.clone()}</li> })
                                .collect_view()
                        })}
                    </ul>

                    <div class=css::infoCards>
                        <a class=format!("{} {}", shared::card, css::infoCard) href=format!("mailto:{}", owner.email)>
                            <span class=css::infoIcon><Icon icon=ic::MAIL /></span>
                            <span>
                                <strong>"Email"</strong>
                                <span>{owner.email.clone()}</span>
                            </span>
                        </a>
                        <div class=format!("{} {}", shared::card, css::infoCard)>
                            <span class=css::infoIcon><Icon icon=ic::LOCATION /></span>
                            <span>
                                <strong>"Location"</strong>
                                <span>{copy.with_value(|c| c.location.clone())}</span>
                            </span>
                        </div>
                    </div>

                    <div class=css::socials>
                        <a href=owner.linkedin.clone() target="_blank" rel="noopener noreferrer" aria-label="LinkedIn profile">
                            <Icon icon=ic::LINKEDIN />
                        </a>
                        <a href=owner.github.clone() target="_blank" rel="noopener noreferrer" aria-label="GitHub profile">
                            <Icon icon=ic::GITHUB />
                        </a>
                    </div>
                </aside>

                <form class=format!("{} {}", shared::card, css::form) on:submit=on_submit novalidate=true>
                    <label class=css::field>
                        <span>"Name"</span>
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>

                    <label class=css::field>
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>

                    <label class=css::field>
                        <span>"I am a..."</span>
                        <select
                            prop:value=move || form.with(|f| f.visitor.map(VisitorType::value).unwrap_or_default())
                            on:change=move |ev| form.update(|f| set_visitor(f, &event_target_value(&ev)))
                        >
                            <option value="">"Select one"</option>
                            {VisitorType::ALL
                                .into_iter()
                                .map(|v| view! { <option value=v.value()>{v.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <Show when=is_recruiter>
                        <label class=css::field>
                            <span>"What type of opportunity?"</span>
                            <select
                                required=true
                                prop:value=move || form.with(|f| f.opportunity.map(OpportunityType::value).unwrap_or_default())
                                on:change=move |ev| form.update(|f| f.opportunity = event_target_value(&ev).parse().ok())
                            >
                                <option value="">"Select one"</option>
                                {OpportunityType::ALL
                                    .into_iter()
                                    .map(|o| view! { <option value=o.value()>{o.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </Show>

                    {move || {
                        let visitor = form.with(|f| f.visitor);
                        copy.with_value(|c| tailored_note(c, visitor).map(str::to_string))
                            .map(|note| view! { <p class=css::note>{note}</p> })
                    }}

                    <label class=css::field>
                        <span>"Message"</span>
                        <textarea
                            required=true
                            rows="5"
                            placeholder="Anything you'd like to add"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>

                    {move || error.get().map(|e| view! { <p class=css::error role="alert">{e.to_string()}</p> })}
                    <Show when=move || sent.get()>
                        <p class=css::success role="status">"Your mail client should open with the message ready to send."</p>
                    </Show>

                    <div class=css::formActions>
                        <button type="submit" class=shared::primaryButton>
                            <Icon icon=ic::SEND /> "Send Email"
                        </button>
                        <button type="button" class=shared::secondaryButton on:click=on_copy>
                            {move || if copied.get() {
                                view! { <Icon icon=ic::CHECK /> "Copied!" }.into_any()
                            } else {
                                view! { <Icon icon=ic::COPY /> "Copy Template" }.into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portfolio;

    #[test]
    fn test_leaving_recruiter_clears_opportunity() {
        let mut form = ContactForm::default();
        set_visitor(&mut form, "recruiter");
        form.opportunity = Some(OpportunityType::Internship);

        set_visitor(&mut form, "recruiter");
        assert_eq!(form.opportunity, Some(OpportunityType::Internship));

        set_visitor(&mut form, "collaborator");
        assert_eq!(form.visitor, Some(VisitorType::Collaborator));
        assert_eq!(form.opportunity, None);
    }

    #[test]
    fn test_placeholder_clears_visitor() {
        let mut form = ContactForm::default();
        set_visitor(&mut form, "general");
        set_visitor(&mut form, "");
        assert_eq!(form.visitor, None);
    }

    #[test]
    fn test_tailored_note_follows_visitor() {
        let copy = Portfolio::bundled().unwrap().contact;
        assert_eq!(tailored_note(&copy, None), None);
        assert_eq!(
            tailored_note(&copy, Some(VisitorType::Recruiter)),
            Some(copy.recruiter_note.as_str())
        );
        assert_eq!(
            tailored_note(&copy, Some(VisitorType::General)),
            Some(copy.general_note.as_str())
        );
    }
}
