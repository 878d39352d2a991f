//! Add Sweet Modal
//!
//! Form for creating a new catalog entry. Closing the modal discards the draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_dashboard_context;
use crate::models::{SweetDraft, SWEET_CATEGORIES};
use crate::store::{store_apply_mutation, use_dashboard_store, DashboardStateStoreFields, Mutation};

#[component]
pub fn AddSweetModal() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <Show when=move || store.show_add().get()>
            <AddSweetForm />
        </Show>
    }
}

/// Draft fields edited through a plain input
#[derive(Clone, Copy)]
enum DraftField {
    Name,
    Price,
    Quantity,
    Discount,
    ImageUrl,
}

impl DraftField {
    fn get(self, draft: &SweetDraft) -> &String {
        match self {
            DraftField::Name => &draft.name,
            DraftField::Price => &draft.price,
            DraftField::Quantity => &draft.quantity,
            DraftField::Discount => &draft.discount,
            DraftField::ImageUrl => &draft.image_url,
        }
    }

    fn set(self, draft: &mut SweetDraft, value: String) {
        match self {
            DraftField::Name => draft.name = value,
            DraftField::Price => draft.price = value,
            DraftField::Quantity => draft.quantity = value,
            DraftField::Discount => draft.discount = value,
            DraftField::ImageUrl => draft.image_url = value,
        }
    }
}

/// Text input bound to one draft field
#[component]
fn DraftInput(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    draft: RwSignal<SweetDraft>,
    field: DraftField,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                prop:value=move || draft.with(|d| field.get(d).clone())
                on:input=move |ev| draft.update(|d| field.set(d, event_target_value(&ev)))
            />
        </label>
    }
}

/// Rendered only while the modal is open; a fresh draft on every open
#[component]
fn AddSweetForm() -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();

    let draft = RwSignal::new(SweetDraft::default());
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    let close = move || store.show_add().set(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.with(SweetDraft::to_payload) {
            Ok(payload) => payload,
            Err(err) => {
                set_form_error.set(Some(err.to_string()));
                return;
            }
        };
        set_form_error.set(None);

        spawn_local(async move {
            match store_apply_mutation(&store, Mutation::Create, api::create_sweet(&payload).await) {
                Ok(response) => {
                    log::info!("[ADD] Created sweet {:?}", response.sweet_id);
                    ctx.reload();
                    ctx.notify_success("Sweet Added", "The sweet was added successfully.");
                }
                Err(err) => ctx.report("Add Failed", &err, "Could not add the sweet."),
            }
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close()>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=on_submit>
                <h2>"Add Sweet"</h2>

                <DraftInput label="Name" draft=draft field=DraftField::Name />

                <label class="form-field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        {SWEET_CATEGORIES.iter().map(|category| view! {
                            <option value=*category>{*category}</option>
                        }).collect_view()}
                    </select>
                </label>

                <DraftInput label="Price" input_type="number" draft=draft field=DraftField::Price />
                <DraftInput label="Quantity" input_type="number" draft=draft field=DraftField::Quantity />
                <DraftInput label="Discount (%)" input_type="number" draft=draft field=DraftField::Discount />

                <label class="form-field">
                    <span>"Description"</span>
                    <textarea
                        maxlength="200"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <DraftInput label="Image URL" input_type="url" draft=draft field=DraftField::ImageUrl />

                {move || form_error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                <div class="modal-actions">
                    <button type="button" class="secondary" on:click=move |_| close()>"Cancel"</button>
                    <button type="submit">"Add"</button>
                </div>
            </form>
        </div>
    }
}
