//! Transient notifications for the estimate form.

use std::time::Duration;

use leptos::prelude::*;

const TOAST_TTL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    kind: ToastKind,
    text: String,
    serial: u64,
}

/// Handle shared through context. Only the newest toast is shown; a newer one
/// is not cleared by an older one's timer.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    current: RwSignal<Option<Toast>>,
    serial: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            serial: StoredValue::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: ToastKind, text: String) {
        self.serial.update_value(|n| *n += 1);
        let serial = self.serial.get_value();
        self.current.set(Some(Toast { kind, text, serial }));

        let current = self.current;
        set_timeout(
            move || {
                let still_showing = current.with_untracked(|toast| {
                    toast.as_ref().is_some_and(|t| t.serial == serial)
                });
                if still_showing {
                    current.set(None);
                }
            },
            TOAST_TTL,
        );
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            {move || {
                toaster.current.get().map(|toast| {
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toaster.dismiss()>
                            {toast.text}
                        </div>
                    }
                })
            }}
        </div>
    }
}
