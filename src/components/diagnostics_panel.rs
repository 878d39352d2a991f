//! Diagnostics Panel
//!
//! Collapsible view of recent warnings and errors from the rolling logger.

use leptos::prelude::*;
use log::Level;

use crate::context::use_dashboard_context;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn DiagnosticsPanel() -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();
    let (open, set_open) = signal(false);

    // Re-read the buffer whenever the panel opens, a fetch starts or settles,
    // or a toast reports a mutation outcome
    let lines = move || {
        let _ = ctx.reload_trigger.get();
        let _ = ctx.toasts.get();
        let _ = store.loading().get();
        let _ = store.error().get();
        rolling_logger::global()
            .map(|logger| logger.recent_at_least(Level::Warn))
            .unwrap_or_default()
    };

    view! {
        <footer class="diagnostics">
            <button class="diagnostics-toggle" on:click=move |_| set_open.update(|o| *o = !*o)>
                {move || if open.get() { "Hide diagnostics" } else { "Show diagnostics" }}
            </button>
            <Show when=move || open.get()>
                <ul class="diagnostics-lines">
                    {move || {
                        let lines = lines();
                        if lines.is_empty() {
                            view! { <li class="diagnostics-empty">"No warnings or errors."</li> }.into_any()
                        } else {
                            lines.into_iter()
                                .rev()
                                .map(|line| view! { <li>{line.to_string()}</li> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </ul>
            </Show>
        </footer>
    }
}
