use leptos::prelude::*;
use thgc::profile::{Anchor, BRAND_LEAD, BRAND_REST, MAIN_PHONE};

use super::icons::{ICON_ARROW_RIGHT, ICON_MENU, ICON_PHONE, ICON_X, Icon};
use crate::browser::scroll_to_section;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go = move |anchor: Anchor| {
        if scroll_to_section(anchor.id()) {
            set_menu_open.set(false);
        }
    };

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="#" class="brand">
                    {BRAND_LEAD} " " <span class="accent">{BRAND_REST}</span>
                </a>

                <nav class="nav-desktop">
                    {Anchor::NAV
                        .into_iter()
                        .map(|anchor| view! {
                            <button class="nav-link" on:click=move |_| go(anchor)>
                                {anchor.label()}
                            </button>
                        })
                        .collect_view()}
                    <a href=MAIN_PHONE.href() class="nav-phone">
                        <Icon paths=ICON_PHONE class="icon icon-sm" />
                        {MAIN_PHONE.display}
                    </a>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <Show
                        when=move || menu_open.get()
                        fallback=|| view! { <Icon paths=ICON_MENU /> }
                    >
                        <Icon paths=ICON_X />
                    </Show>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">
                    {Anchor::NAV
                        .into_iter()
                        .map(|anchor| view! {
                            <button class="nav-link" on:click=move |_| go(anchor)>
                                {anchor.label()}
                            </button>
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

/// Sticky call bar, mobile only.
#[component]
pub fn CallBar() -> impl IntoView {
    view! {
        <div class="call-bar">
            <a href=MAIN_PHONE.href()>
                <Icon paths=ICON_PHONE />
                "Call Now: " {MAIN_PHONE.display}
            </a>
        </div>
    }
}

/// Button that smooth-scrolls to a section.
#[component]
pub fn ScrollButton(
    target: Anchor,
    label: &'static str,
    #[prop(default = "btn btn-primary")] class: &'static str,
    #[prop(default = false)] arrow: bool,
) -> impl IntoView {
    view! {
        <button
            class=class
            on:click=move |_| {
                scroll_to_section(target.id());
            }
        >
            {label}
            {arrow.then(|| view! { <Icon paths=ICON_ARROW_RIGHT class="icon icon-trailing" /> })}
        </button>
    }
}
