//! Toast Stack Component
//!
//! Success/error notifications; click to dismiss early.

use leptos::prelude::*;

use crate::context::use_dashboard_context;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_dashboard_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status" on:click=move |_| ctx.dismiss(id)>
                            <strong class="toast-title">{toast.title}</strong>
                            <div class="toast-text">{toast.text}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
