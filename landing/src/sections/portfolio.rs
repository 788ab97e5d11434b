use leptos::prelude::*;
use thgc::profile::{
    Anchor, HOME_TOWN, PORTFOLIO, SERVICE_RADIUS_MILES, service_area_sentence,
};

use super::icons::{ICON_MAP_PIN, Icon};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id=Anchor::Portfolio.id() class="portfolio">
            <div class="container">
                <h2 class="section-title">"Our " <span class="accent">"Work"</span></h2>
                <div class="section-rule"></div>
                <p class="section-lead">
                    "Take a look at some of our completed projects. We take pride in delivering "
                    "exceptional quality and craftsmanship in every job."
                </p>

                <div class="portfolio-grid">
                    {PORTFOLIO
                        .into_iter()
                        .enumerate()
                        .map(|(index, src)| {
                            let alt = format!("Project {}", index + 1);
                            view! {
                                <figure class="portfolio-tile">
                                    <img src=src alt=alt loading="lazy" />
                                    <figcaption class="portfolio-overlay">
                                        <span>"View Project"</span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ServiceArea() -> impl IntoView {
    let coverage = format!("We cover {} miles around {}", SERVICE_RADIUS_MILES, HOME_TOWN);

    view! {
        <section class="service-area">
            <div class="container centered">
                <Icon paths=ICON_MAP_PIN class="icon icon-hero accent" />
                <h2>"Service Area"</h2>
                <p class="service-area-lead"><strong>{coverage}</strong></p>
                <p class="muted">{service_area_sentence()}</p>
            </div>
        </section>
    }
}
