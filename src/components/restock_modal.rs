//! Restock Modal
//!
//! Increases the stock of the selected sweet.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_dashboard_context;
use crate::models::{parse_positive_quantity, Sweet};
use crate::store::{store_apply_mutation, use_dashboard_store, DashboardStateStoreFields, Mutation};

#[component]
pub fn RestockModal() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        {move || store.restock_target().get().map(|sweet| view! { <RestockForm sweet=sweet /> })}
    }
}

#[component]
fn RestockForm(sweet: Sweet) -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();

    let (quantity, set_quantity) = signal(String::from("0"));
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let close = move || store.restock_target().set(None);
    let sweet_id = sweet.id.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let amount = match parse_positive_quantity(&quantity.get()) {
            Ok(amount) => amount,
            Err(err) => {
                set_form_error.set(Some(err.to_string()));
                return;
            }
        };
        set_form_error.set(None);

        let sweet_id = sweet_id.clone();
        spawn_local(async move {
            match store_apply_mutation(&store, Mutation::Restock, api::restock_sweet(&sweet_id, amount).await) {
                Ok(response) => {
                    log::info!("[RESTOCK] {} now has {:?} in stock", sweet_id, response.updated_stock);
                    ctx.reload();
                    ctx.notify_success(
                        "Sweet Restocked",
                        response.message.unwrap_or_else(|| "Restock successful".to_string()),
                    );
                }
                Err(err) => ctx.report("Restock Failed", &err, "Could not restock the sweet."),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Restock " {sweet.name.clone()}</h2>
                <p class="modal-hint">{format!("Currently {} in stock", sweet.quantity)}</p>

                <label class="form-field">
                    <span>"Quantity to add"</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                </label>

                {move || form_error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                <div class="modal-actions">
                    <button type="button" class="secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit">"Restock"</button>
                </div>
            </form>
        </div>
    }
}
