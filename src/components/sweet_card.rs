//! Sweet Card Component
//!
//! One catalog entry with its cart, restock and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_dashboard_context, DashboardContext};
use crate::models::{format_price, Sweet};
use crate::store::{
    store_apply_mutation, use_dashboard_store, DashboardStateStoreFields, DashboardStore, Mutation,
};

/// Ask for confirmation, then delete and re-fetch
fn confirm_delete(ctx: DashboardContext, store: DashboardStore, sweet_id: String) {
    ctx.confirm.ask(
        "Delete Sweet",
        "Are you sure you want to delete this sweet?",
        move |accepted| {
            if !accepted {
                return;
            }
            spawn_local(async move {
                match store_apply_mutation(&store, Mutation::Delete, api::delete_sweet(&sweet_id).await) {
                    Ok(_) => {
                        log::info!("[DELETE] Removed sweet {}", sweet_id);
                        ctx.reload();
                        ctx.notify_success("Sweet Deleted", "The sweet was removed successfully.");
                    }
                    Err(err) => ctx.report("Delete Failed", &err, "Could not delete the sweet."),
                }
            });
        },
    );
}

#[component]
pub fn SweetCard(sweet: Sweet) -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();

    let in_stock = sweet.in_stock();
    let price = format_price(sweet.price);
    let final_price = format_price(sweet.discounted_price());
    let has_discount = sweet.has_discount();
    let discount = sweet.discount;

    let for_cart = sweet.clone();
    let for_restock = sweet.clone();
    let id = sweet.id.clone();

    view! {
        <div class={if in_stock { "sweet-card" } else { "sweet-card sold-out" }}>
            {sweet.image_url.clone().map(|src| view! {
                <img class="sweet-image" src=src alt=sweet.name.clone() />
            })}
            <div class="sweet-body">
                <h3 class="sweet-name">{sweet.name.clone()}</h3>
                <span class="sweet-category">{sweet.category.clone()}</span>
                {sweet.description.clone().map(|text| view! { <p class="sweet-description">{text}</p> })}

                <div class="sweet-price">
                    {if has_discount {
                        view! {
                            <span class="price-original">{price}</span>
                            <span class="price-final">{final_price}</span>
                            <span class="discount-badge">{format!("-{}%", discount)}</span>
                        }.into_any()
                    } else {
                        view! { <span class="price-final">{final_price}</span> }.into_any()
                    }}
                </div>

                <div class="sweet-stock">
                    {if in_stock {
                        format!("{} in stock", sweet.quantity)
                    } else {
                        "Out of stock".to_string()
                    }}
                    {(!sweet.is_available).then(|| view! {
                        <span class="listed-unavailable">"Listed unavailable"</span>
                    })}
                </div>
            </div>

            <div class="sweet-actions">
                <button
                    class="cart-btn"
                    disabled={!in_stock}
                    on:click=move |_| store.purchase_target().set(Some(for_cart.clone()))
                >
                    "Add to cart"
                </button>
                <button
                    class="restock-btn"
                    on:click=move |_| store.restock_target().set(Some(for_restock.clone()))
                >
                    "Restock"
                </button>
                <button
                    class="delete-btn"
                    on:click=move |_| confirm_delete(ctx, store, id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
