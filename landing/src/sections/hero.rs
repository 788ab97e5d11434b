use leptos::prelude::*;
use thgc::profile::{Anchor, HERO_IMAGE, HOME_TOWN, MAIN_PHONE, YEARS_EXPERIENCE};

use super::icons::{ICON_CHECK_CIRCLE, ICON_DOLLAR, ICON_PHONE, ICON_SHIELD, Icon};
use super::nav::ScrollButton;

#[component]
pub fn Hero() -> impl IntoView {
    let tagline = format!(
        "Construction, Roofing & Remodeling with {} Years of Experience",
        YEARS_EXPERIENCE
    );

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=HERO_IMAGE alt="Professional Construction Team" />
                <div class="hero-shade"></div>
            </div>

            <div class="container hero-content">
                <h2 class="hero-title">
                    "Your Trusted General Contractor in "
                    <span class="accent">{HOME_TOWN}</span>
                </h2>
                <p class="hero-tagline">{tagline}</p>

                <div class="hero-badges">
                    <HeroBadge paths=ICON_SHIELD text="Licensed & Insured" />
                    <HeroBadge paths=ICON_DOLLAR text="Financing Available" />
                    <HeroBadge paths=ICON_CHECK_CIRCLE text="Free Estimates" />
                </div>

                <div class="hero-actions">
                    <a href=MAIN_PHONE.href() class="btn btn-primary btn-lg">
                        <Icon paths=ICON_PHONE />
                        "Call Now: " {MAIN_PHONE.display}
                    </a>
                    <ScrollButton
                        target=Anchor::Contact
                        label="Request Free Estimate"
                        class="btn btn-light btn-lg"
                        arrow=true
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroBadge(paths: &'static [&'static str], text: &'static str) -> impl IntoView {
    view! {
        <div class="hero-badge">
            <Icon paths=paths class="icon accent" />
            <span>{text}</span>
        </div>
    }
}
