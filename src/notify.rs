//! Notifications
//!
//! Toast messages shown after remote operations.

/// How long a toast stays up before dismissing itself
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Oldest toasts are dropped beyond this many
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub text: String,
}

/// Append a toast, evicting the oldest ones past `MAX_TOASTS`
pub fn push_toast(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_TOASTS {
        let overflow = toasts.len() - MAX_TOASTS;
        toasts.drain(..overflow);
    }
}

pub fn remove_toast(toasts: &mut Vec<Toast>, id: u32) {
    toasts.retain(|t| t.id != id);
}

/// Success text for a purchase, mentioning lines the server refused
pub fn purchase_summary(rejected: usize) -> String {
    match rejected {
        0 => "Sweets were successfully purchased.".to_string(),
        1 => "Purchase complete, but 1 item could not be fulfilled.".to_string(),
        n => format!("Purchase complete, but {} items could not be fulfilled.", n),
    }
}
