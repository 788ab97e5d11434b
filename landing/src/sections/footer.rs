use leptos::prelude::*;
use thgc::profile::{
    Anchor, BRAND_LEAD, BRAND_REST, EMAILS, HOME_TOWN, LEGAL_NAME, PHONES, SERVICES, mailto,
};

use crate::browser::{current_year, scroll_to_section};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {}. All rights reserved.", current_year(), LEGAL_NAME);

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <h3 class="footer-brand">
                        {BRAND_LEAD} " " <span class="accent">{BRAND_REST}</span>
                    </h3>
                    <p class="muted">
                        "Your trusted partner for construction, roofing, and remodeling in "
                        {HOME_TOWN} " and surrounding areas."
                    </p>
                </div>

                <div>
                    <h4>"Quick Links"</h4>
                    <ul class="footer-links">
                        {Anchor::NAV
                            .into_iter()
                            .map(|anchor| view! {
                                <li>
                                    <button
                                        class="footer-link"
                                        on:click=move |_| {
                                            scroll_to_section(anchor.id());
                                        }
                                    >
                                        {anchor.label()}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4>"Services"</h4>
                    <ul class="footer-links">
                        {SERVICES
                            .into_iter()
                            .map(|offering| view! { <li class="muted">{offering.title()}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4>"Contact"</h4>
                    <ul class="footer-links">
                        {PHONES
                            .into_iter()
                            .map(|line| view! {
                                <li><a href=line.href() class="footer-link">{line.display}</a></li>
                            })
                            .collect_view()}
                        <li>
                            <a href=mailto(EMAILS[0]) class="footer-link">{EMAILS[0]}</a>
                        </li>
                    </ul>
                </div>
            </div>

            <p class="footer-copyright">{copyright}</p>
        </footer>
    }
}
