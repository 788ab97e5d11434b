use leptos::prelude::*;
use leptos::task::spawn_local;
use thgc::profile::{
    Anchor, EMAILS, PHONES, POSTAL_LOCATION, SUBMIT_FAILURE_NOTICE, SUBMIT_SUCCESS_NOTICE,
    WHY_CHOOSE_US, mailto,
};
use thgc::{InquiryDraft, RequiredField, ServiceKind};

use super::icons::{ICON_CHECK_CIRCLE, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, Icon};
use super::toast::Toaster;
use crate::SiteDesk;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id=Anchor::Contact.id() class="contact">
            <div class="container">
                <h2 class="section-title">"Get Your " <span class="accent">"Free Estimate"</span></h2>
                <div class="section-rule"></div>

                <div class="contact-grid">
                    <ContactInfo />
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info">
            <h3>"Contact Information"</h3>

            <div class="contact-row">
                <Icon paths=ICON_PHONE class="icon accent" />
                <div>
                    <p class="contact-label">"Phone"</p>
                    {PHONES
                        .into_iter()
                        .map(|line| view! {
                            <a href=line.href() class="contact-link">
                                {line.display} " (" {line.label} ")"
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="contact-row">
                <Icon paths=ICON_MAIL class="icon accent" />
                <div>
                    <p class="contact-label">"Email"</p>
                    {EMAILS
                        .into_iter()
                        .map(|address| view! {
                            <a href=mailto(address) class="contact-link">{address}</a>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="contact-row">
                <Icon paths=ICON_MAP_PIN class="icon accent" />
                <div>
                    <p class="contact-label">"Location"</p>
                    <p>{POSTAL_LOCATION}</p>
                </div>
            </div>

            <div class="card why-us">
                <h4>"Why Choose Us?"</h4>
                <ul class="check-list">
                    {WHY_CHOOSE_US
                        .into_iter()
                        .map(|reason| view! {
                            <li>
                                <Icon paths=ICON_CHECK_CIRCLE class="icon accent" />
                                <span>{reason}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn missing_notice(missing: &[RequiredField]) -> String {
    let labels: Vec<&str> = missing.iter().map(RequiredField::label).collect();
    format!("Please fill in: {}", labels.join(", "))
}

#[component]
fn ContactForm() -> impl IntoView {
    let desk = expect_context::<SiteDesk>();
    let toaster = expect_context::<Toaster>();

    let draft = RwSignal::new(InquiryDraft::default());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        let missing = current.missing_fields();
        if !missing.is_empty() {
            toaster.error(missing_notice(&missing));
            return;
        }

        set_submitting.set(true);
        let desk = desk.clone();
        spawn_local(async move {
            match desk.submit(current).await {
                Ok(_) => {
                    toaster.success(SUBMIT_SUCCESS_NOTICE);
                    draft.set(InquiryDraft::default());
                }
                Err(err) => {
                    tracing::error!(error = %err, "estimate request was not stored");
                    toaster.error(SUBMIT_FAILURE_NOTICE);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="card contact-form" on:submit=on_submit>
            <label class="field">
                <span>"Full Name *"</span>
                <input
                    type="text"
                    name="name"
                    required
                    placeholder="John Doe"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span>"Phone Number *"</span>
                <input
                    type="tel"
                    name="phone"
                    required
                    placeholder="(832) 555-0123"
                    prop:value=move || draft.with(|d| d.phone.clone())
                    on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span>"Email Address *"</span>
                <input
                    type="email"
                    name="email"
                    required
                    placeholder="john@example.com"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </label>

            <label class="field">
                <span>"Service Needed"</span>
                <select
                    name="service"
                    prop:value=move || {
                        draft.with(|d| d.service.as_ref().map(ServiceKind::as_form_value).unwrap_or_default())
                    }
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        match ServiceKind::from_form_value(&raw) {
                            Ok(service) => draft.update(|d| d.service = service),
                            Err(err) => tracing::warn!(error = %err, "ignoring service selection"),
                        }
                    }
                >
                    <option value="">"Select a service"</option>
                    {ServiceKind::ALL
                        .into_iter()
                        .map(|kind| view! {
                            <option value=kind.as_form_value()>{kind.display_name()}</option>
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="field">
                <span>"Project Details"</span>
                <textarea
                    name="message"
                    rows="4"
                    placeholder="Tell us about your project..."
                    prop:value=move || draft.with(|d| d.message.clone())
                    on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                ></textarea>
            </label>

            <button
                type="submit"
                class="btn btn-primary btn-block"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Sending..." } else { "Request Free Estimate" }}
            </button>
        </form>
    }
}
