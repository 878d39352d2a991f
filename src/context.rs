//! Dashboard Context
//!
//! Shared signals provided via Leptos Context API.

use confirm_gate::ConfirmGate;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::error::ApiError;
use crate::notify::{push_toast, remove_toast, Toast, ToastKind, TOAST_TIMEOUT_MS};

/// Dashboard-wide signals provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    /// Trigger to re-fetch sweets from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch sweets from the server - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
    /// Yes/no prompt guarding deletes
    pub confirm: ConfirmGate,
}

impl DashboardContext {
    pub fn new(confirm: ConfirmGate) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            reload_trigger,
            set_reload_trigger,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
            confirm,
        }
    }

    /// Trigger a re-fetch of the sweet list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn notify_success(&self, title: impl Into<String>, text: impl Into<String>) {
        self.notify(ToastKind::Success, title.into(), text.into());
    }

    pub fn notify_error(&self, title: impl Into<String>, text: impl Into<String>) {
        self.notify(ToastKind::Error, title.into(), text.into());
    }

    /// Log a failed remote call and tell the user the best available message
    pub fn report(&self, title: &str, err: &ApiError, fallback: &str) {
        log::error!("{}: {}", title, err);
        self.notify_error(title, err.user_message(fallback));
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| remove_toast(toasts, id));
    }

    fn notify(&self, kind: ToastKind, title: String, text: String) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| push_toast(toasts, Toast { id, kind, title, text }));

        let ctx = *self;
        Timeout::new(TOAST_TIMEOUT_MS, move || ctx.dismiss(id)).forget();
    }
}

pub fn use_dashboard_context() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
