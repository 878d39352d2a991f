//! Purchase Modal
//!
//! Picks a quantity of the selected sweet and queues it in the cart.
//! Nothing is sent to the server until the cart is submitted.

use leptos::prelude::*;

use crate::cart::check_stock;
use crate::models::{format_price, parse_positive_quantity, Sweet};
use crate::store::{store_add_to_cart, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn PurchaseModal() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        {move || store.purchase_target().get().map(|sweet| view! { <PurchaseForm sweet=sweet /> })}
    }
}

#[component]
fn PurchaseForm(sweet: Sweet) -> impl IntoView {
    let store = use_dashboard_store();

    let (quantity, set_quantity) = signal(String::from("1"));
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let close = move || store.purchase_target().set(None);
    let unit_price = sweet.discounted_price();
    let name = sweet.name.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let in_cart = store.cart().read_untracked().quantity_of(&sweet.id);
        let checked = parse_positive_quantity(&quantity.get())
            .and_then(|amount| check_stock(&sweet, in_cart, amount).map(|_| amount));
        match checked {
            Ok(amount) => {
                store_add_to_cart(&store, &sweet.id, amount);
                log::debug!("[CART] Queued {} x {}", amount, sweet.id);
                store.purchase_target().set(None);
            }
            Err(err) => set_form_error.set(Some(err.to_string())),
        }
    };

    let subtotal = move || {
        let amount = quantity.get().trim().parse::<u32>().unwrap_or(0);
        format_price(unit_price * f64::from(amount))
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Add " {name} " to cart"</h2>
                <p class="modal-hint">{format!("{} each", format_price(unit_price))}</p>

                <label class="form-field">
                    <span>"Quantity"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                </label>

                <p class="modal-subtotal">"Subtotal: " {subtotal}</p>

                {move || form_error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                <div class="modal-actions">
                    <button type="button" class="secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit">"Add to cart"</button>
                </div>
            </form>
        </div>
    }
}
