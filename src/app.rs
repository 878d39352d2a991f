//! Sweet Shop Dashboard App
//!
//! Main component: catalog, search, cart and modals.

use confirm_gate::{bind_escape_to_decline, create_confirm_gate, ConfirmDialog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    AddSweetModal, CartPanel, DiagnosticsPanel, PurchaseModal, RestockModal, SearchBar, SweetList,
    ToastStack,
};
use crate::context::DashboardContext;
use crate::store::{
    store_apply_fetch_error, store_apply_sweets, store_begin_fetch, DashboardState,
    DashboardStateStoreFields,
};

const LOAD_FAILED: &str = "Failed to load sweets. Please try again later.";

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(DashboardState::new());
    let confirm = create_confirm_gate();
    let ctx = DashboardContext::new(confirm);

    // Provide store and context to all children
    provide_context(store);
    provide_context(ctx);
    bind_escape_to_decline(confirm);

    // Fetch when the trigger changes; criteria are read untracked so typing
    // in the search form does not fire requests
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let criteria = store.criteria().get_untracked();
        store_begin_fetch(&store);
        log::info!("[APP] Fetching sweets, trigger={}, criteria={:?}", trigger, criteria);
        spawn_local(async move {
            match api::list_sweets(&criteria).await {
                Ok(sweets) => {
                    log::info!("[APP] Loaded {} sweets", sweets.len());
                    store_apply_sweets(&store, sweets);
                }
                Err(err) => {
                    log::error!("[APP] Error fetching sweets: {}", err);
                    store_apply_fetch_error(&store, err.user_message(LOAD_FAILED));
                }
            }
        });
    });

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Sweet Shop"</h1>
                <span class="cart-count">
                    {move || format!("Cart: {}", store.cart().read().total_items())}
                </span>
                <button class="add-btn" on:click=move |_| store.show_add().set(true)>
                    "Add Sweet"
                </button>
            </header>

            <SearchBar />

            <div class="dashboard-body">
                <main class="main-content">
                    <SweetList />
                </main>
                <CartPanel />
            </div>

            <AddSweetModal />
            <RestockModal />
            <PurchaseModal />
            <ConfirmDialog gate=confirm />
            <ToastStack />
            <DiagnosticsPanel />
        </div>
    }
}
