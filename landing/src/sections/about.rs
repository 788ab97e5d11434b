use leptos::prelude::*;
use thgc::profile::{Anchor, BRAND_LEAD, BRAND_REST, HOME_TOWN, LEGAL_NAME};

use super::icons::{ICON_AWARD, ICON_CHECK_CIRCLE, ICON_MAP_PIN, ICON_SHIELD, Icon};

#[component]
pub fn TrustStats() -> impl IntoView {
    view! {
        <section class="trust">
            <div class="container trust-grid">
                <StatCard paths=ICON_AWARD figure="20+" caption="Years Experience" />
                <StatCard paths=ICON_CHECK_CIRCLE figure="100%" caption="Customer Satisfaction" />
                <StatCard paths=ICON_MAP_PIN figure="50" caption="Miles Coverage" />
                <StatCard paths=ICON_SHIELD figure="Licensed" caption="& Insured" />
            </div>
        </section>
    }
}

#[component]
fn StatCard(
    paths: &'static [&'static str],
    figure: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <Icon paths=paths class="icon icon-xl accent" />
            <h3 class="stat-figure">{figure}</h3>
            <p class="stat-caption">{caption}</p>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="about">
            <div class="container narrow">
                <h2 class="section-title">
                    "About " <span class="accent">{BRAND_LEAD} " " {BRAND_REST}</span>
                </h2>
                <div class="section-rule"></div>

                <div class="prose">
                    <p>
                        "With over " <strong>"20 years of experience"</strong>
                        " serving " {HOME_TOWN} " and surrounding areas, " {LEGAL_NAME}
                        " has built a reputation for quality, reliability, and exceptional customer service."
                    </p>
                    <p>
                        "We specialize in delivering complete construction solutions, from new builds to roofing "
                        "and remodeling. Our team handles every aspect of your project with precision and care, "
                        "ensuring you're informed every step of the way."
                    </p>
                    <p>
                        <strong>"Our commitment is simple:"</strong>
                        " Clear communication, transparent processes, and 100% customer satisfaction. "
                        "We don't just build structures; we build lasting relationships with our clients."
                    </p>
                    <p>
                        "Whether you're planning a new construction project, need expert roofing services, or want "
                        "to transform your space with a remodel, we're here to bring your vision to life, "
                        "on time and within budget."
                    </p>
                </div>
            </div>
        </section>
    }
}
