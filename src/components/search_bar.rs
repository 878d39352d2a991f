//! Search Bar Component
//!
//! Free-text query, sort and category filter. Criteria are only sent when
//! the form is submitted.

use leptos::prelude::*;

use crate::context::use_dashboard_context;
use crate::models::{SearchCriteria, SortField, SortOrder};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_dashboard_context();
    let store = use_dashboard_store();

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.reload();
    };

    let on_reset = move |_| {
        store.criteria().set(SearchCriteria::default());
        ctx.reload();
    };

    view! {
        <form class="search-bar" on:submit=on_search>
            <input
                type="search"
                placeholder="Search by name, category, description or price..."
                prop:value=move || store.criteria().read().query.clone()
                on:input=move |ev| {
                    store.criteria().write().query = event_target_value(&ev);
                }
            />

            <select
                class="sort-field"
                prop:value=move || store.criteria().read().sort_by.as_param().to_string()
                on:change=move |ev| {
                    store.criteria().write().sort_by = SortField::from_param(&event_target_value(&ev));
                }
            >
                {SortField::ALL.iter().map(|field| view! {
                    <option value=field.as_param()>{field.label()}</option>
                }).collect_view()}
            </select>

            <select
                class="sort-order"
                prop:value=move || store.criteria().read().order.as_param().to_string()
                on:change=move |ev| {
                    store.criteria().write().order = SortOrder::from_param(&event_target_value(&ev));
                }
            >
                <option value="asc">"Ascending"</option>
                <option value="desc">"Descending"</option>
            </select>

            <select
                class="category-filter"
                prop:value=move || store.criteria().read().category.clone()
                on:change=move |ev| {
                    store.criteria().write().category = event_target_value(&ev);
                }
            >
                <option value="">"All categories"</option>
                {move || store.categories().get().into_iter().map(|category| view! {
                    <option value=category.clone()>{category.clone()}</option>
                }).collect_view()}
            </select>

            <button type="submit">"Search"</button>
            <button type="button" class="secondary" on:click=on_reset>"Reset"</button>
        </form>
    }
}
