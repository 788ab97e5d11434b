//! Browser adapters for the contact desk and in-page navigation.

use std::future::Future;
use std::time::Duration;

use thgc::{KeyValueStore, Latency, StoreError, StoreResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// `window.localStorage`, resolved on every call.
///
/// Holding no handle keeps the type `Send + Sync`, so the desk can live in
/// Leptos context.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(describe(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(describe(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| {
            let quota = e
                .dyn_ref::<web_sys::DomException>()
                .is_some_and(|ex| ex.name() == "QuotaExceededError");
            if quota {
                StoreError::QuotaExceeded {
                    key: key.to_string(),
                    bytes: value.len(),
                }
            } else {
                StoreError::Unavailable(describe(&e))
            }
        })
    }
}

/// `setTimeout`-backed delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLatency;

impl Latency for BrowserLatency {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                    .is_ok()
            });
            if !scheduled {
                let _ = resolve.call0(&JsValue::UNDEFINED);
            }
        });

        async move {
            let _ = JsFuture::from(promise).await;
        }
    }
}

/// Smooth-scroll to the element with `id`. Returns `false` if it is not on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn describe(value: &JsValue) -> String {
    if let Some(ex) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", ex.name(), ex.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
