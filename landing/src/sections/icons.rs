//! Inline stroke icons (Lucide paths, 24x24 grid).

use leptos::prelude::*;

pub const ICON_PHONE: &[&str] = &[
    "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
];
pub const ICON_MAIL: &[&str] = &[
    "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
    "m22 6-10 7L2 6",
];
pub const ICON_MAP_PIN: &[&str] = &[
    "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
    "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
];
pub const ICON_CHECK_CIRCLE: &[&str] = &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"];
pub const ICON_AWARD: &[&str] = &[
    "M12 2a6 6 0 1 0 0 12a6 6 0 1 0 0-12z",
    "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
];
pub const ICON_SHIELD: &[&str] = &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"];
pub const ICON_DOLLAR: &[&str] = &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"];
pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];
pub const ICON_MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
pub const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

/// Renders one of the `ICON_*` path sets.
#[component]
pub fn Icon(
    paths: &'static [&'static str],
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
