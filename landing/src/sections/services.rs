use leptos::prelude::*;
use thgc::profile::{Anchor, SERVICES, ServiceOffering};

use super::icons::{ICON_CHECK_CIRCLE, ICON_DOLLAR, Icon};
use super::nav::ScrollButton;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id=Anchor::Services.id() class="services">
            <div class="container">
                <h2 class="section-title light">"Our " <span class="accent">"Services"</span></h2>
                <div class="section-rule"></div>

                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .map(|offering| view! { <ServiceCard offering=offering /> })
                        .collect_view()}
                </div>

                <div class="section-cta">
                    <ScrollButton
                        target=Anchor::Contact
                        label="Get Your Free Estimate"
                        class="btn btn-primary btn-lg"
                        arrow=true
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(offering: ServiceOffering) -> impl IntoView {
    view! {
        <article class="card service-card">
            <div class="service-media">
                <img src=offering.image alt=offering.title() />
                <div class="service-shade"></div>
            </div>
            <div class="service-body">
                <h3>{offering.title()}</h3>
                <p>{offering.description}</p>
                <ul class="check-list">
                    {offering
                        .highlights
                        .into_iter()
                        .map(|item| view! {
                            <li>
                                <Icon paths=ICON_CHECK_CIRCLE class="icon accent" />
                                <span>{item}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}

#[component]
pub fn Financing() -> impl IntoView {
    view! {
        <section class="financing">
            <div class="container centered">
                <Icon paths=ICON_DOLLAR class="icon icon-hero" />
                <h2>"Financing Available"</h2>
                <p>
                    "Get the project done without delaying your plans. "
                    "We offer flexible financing options to make your dream project a reality."
                </p>
                <ScrollButton
                    target=Anchor::Contact
                    label="Ask About Financing"
                    class="btn btn-light btn-lg"
                />
            </div>
        </section>
    }
}
