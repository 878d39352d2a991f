//! Sweet List Component
//!
//! Renders the fetched catalog, replaced wholesale on every successful fetch.

use leptos::prelude::*;

use crate::components::SweetCard;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SweetList() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <section class="sweet-list">
            <Show when=move || store.loading().get()>
                <div class="loading">"Loading sweets..."</div>
            </Show>

            {move || store.error().get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <Show when=move || !store.loading().get() && store.error().read().is_none() && store.sweets().read().is_empty()>
                <div class="empty">"No sweets found."</div>
            </Show>

            <div class="sweet-grid">
                {move || store.sweets().get().into_iter().map(|sweet| view! {
                    <SweetCard sweet=sweet />
                }).collect_view()}
            </div>

            <p class="sweet-count">{move || format!("{} sweets", store.sweets().read().len())}</p>
        </section>
    }
}
