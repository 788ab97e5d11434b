// T&H General Contractor landing page, Leptos 0.8 CSR.

mod browser;
mod sections;

use browser::{BrowserLatency, BrowserStore};
use leptos::prelude::*;
use sections::*;
use thgc::{ContactDesk, SiteConfig};

/// Desk wired to `window.localStorage` with a real timer delay.
pub type SiteDesk = ContactDesk<BrowserStore, BrowserLatency>;

const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::load_str(SITE_TOML);
    tracing::debug!(
        storage_key = %config.desk.storage_key,
        latency_ms = config.desk.latency_ms,
        "landing configured"
    );

    provide_context::<SiteDesk>(ContactDesk::with_config(
        BrowserStore,
        BrowserLatency,
        config.desk,
    ));
    provide_context(Toaster::new());

    view! {
        <Nav />
        <main>
            <Hero />
            <TrustStats />
            <Services />
            <About />
            <Financing />
            <Portfolio />
            <ServiceArea />
            <ContactSection />
        </main>
        <Footer />
        <CallBar />
        <ToastHost />
    }
}
