//! Cart Panel Component
//!
//! Pending purchase lines and the submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::cart::sweet_name;
use crate::context::use_dashboard_context;
use crate::notify::purchase_summary;
use crate::store::{
    store_apply_purchase, store_remove_cart_entry, use_dashboard_store, DashboardStateStoreFields,
};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();

    let on_purchase = move |_| {
        let items = store.cart().read_untracked().entries().to_vec();
        if items.is_empty() {
            return;
        }
        log::info!("[PURCHASE] Submitting {} cart lines", items.len());
        spawn_local(async move {
            match store_apply_purchase(&store, api::purchase(&items).await) {
                Ok(rejected) => {
                    if rejected > 0 {
                        log::warn!("[PURCHASE] Server refused {} of {} lines", rejected, items.len());
                    }
                    ctx.reload();
                    ctx.notify_success("Purchase Complete!", purchase_summary(rejected));
                }
                Err(err) => ctx.report("Purchase Failed", &err, "Something went wrong while purchasing."),
            }
        });
    };

    view! {
        <aside class="cart-panel">
            <h2>"Cart"</h2>
            <Show
                when=move || !store.cart().read().is_empty()
                fallback=|| view! { <p class="cart-empty">"Your cart is empty."</p> }
            >
                <ul class="cart-lines">
                    {move || {
                        let sweets = store.sweets().get();
                        let cart = store.cart().get();
                        cart.entries().iter().enumerate().map(|(index, entry)| {
                            let label = sweet_name(&sweets, &entry.sweet_id).to_string();
                            view! {
                                <li class="cart-line">
                                    <span class="cart-line-name">{label}</span>
                                    <span class="cart-line-qty">{format!("x {}", entry.quantity)}</span>
                                    <button
                                        class="remove-btn"
                                        title="Remove"
                                        on:click=move |_| store_remove_cart_entry(&store, index)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }).collect_view()
                    }}
                </ul>
                <p class="cart-total">{move || format!("{} items", store.cart().read().total_items())}</p>
                <button class="purchase-btn" on:click=on_purchase>"Purchase"</button>
            </Show>
        </aside>
    }
}
