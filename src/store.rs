//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The sweet list is a read-only copy of the server's catalog and is only
//! ever replaced wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::Cart;
use crate::error::ApiError;
use crate::models::{PurchaseResponse, SearchCriteria, Sweet};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Last successfully fetched sweets
    pub sweets: Vec<Sweet>,
    /// Distinct categories of `sweets`, in first-seen order
    pub categories: Vec<String>,
    /// Criteria used by the next fetch
    pub criteria: SearchCriteria,
    pub loading: bool,
    /// Message of the last failed fetch, cleared on success
    pub error: Option<String>,
    pub cart: Cart,
    /// Add-sweet modal visibility
    pub show_add: bool,
    /// Sweet being restocked (None = restock modal closed)
    pub restock_target: Option<Sweet>,
    /// Sweet being added to the cart (None = purchase modal closed)
    pub purchase_target: Option<Sweet>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Distinct categories in first-appearance order
pub fn distinct_categories(sweets: &[Sweet]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for sweet in sweets {
        if !categories.iter().any(|c| *c == sweet.category) {
            categories.push(sweet.category.clone());
        }
    }
    categories
}

// ========================
// Store Helper Functions
// ========================

/// Idle -> Loading
pub fn store_begin_fetch(store: &DashboardStore) {
    store.loading().set(true);
}

/// Loading -> Idle+Populated: replace the list and recompute categories
pub fn store_apply_sweets(store: &DashboardStore, sweets: Vec<Sweet>) {
    store.categories().set(distinct_categories(&sweets));
    store.sweets().set(sweets);
    store.error().set(None);
    store.loading().set(false);
}

/// Loading -> Idle+Errored: keep the list, record the message
pub fn store_apply_fetch_error(store: &DashboardStore, message: String) {
    store.error().set(Some(message));
    store.loading().set(false);
}

/// Add to cart, merging with an existing line for the same sweet
pub fn store_add_to_cart(store: &DashboardStore, sweet_id: &str, quantity: u32) -> bool {
    store.cart().write().add(sweet_id, quantity)
}

pub fn store_remove_cart_entry(store: &DashboardStore, index: usize) {
    store.cart().write().remove(index);
}

pub fn store_clear_cart(store: &DashboardStore) {
    store.cart().write().clear();
}

/// Catalog edits that end in a reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Restock,
    Delete,
}

/// Apply the outcome of a catalog edit. Success closes the modal that issued
/// it; failure leaves the list, cart and open modal as they were.
pub fn store_apply_mutation<T>(
    store: &DashboardStore,
    kind: Mutation,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if result.is_ok() {
        match kind {
            Mutation::Create => store.show_add().set(false),
            Mutation::Restock => store.restock_target().set(None),
            Mutation::Delete => {}
        }
    }
    result
}

/// Apply a purchase outcome, returning how many lines the server refused.
/// Overall success empties the cart even if some lines failed; failure keeps it.
pub fn store_apply_purchase(
    store: &DashboardStore,
    result: Result<PurchaseResponse, ApiError>,
) -> Result<usize, ApiError> {
    let response = result?;
    store_clear_cart(store);
    Ok(response.rejected_entries())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sweet(id: &str, category: &str) -> Sweet {
        Sweet {
            id: id.to_string(),
            name: format!("Sweet {}", id),
            category: category.to_string(),
            price: 10.0,
            quantity: 5,
            discount: 0.0,
            description: None,
            image_url: None,
            is_available: true,
        }
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let sweets = vec![
            sweet("1", "Cake"),
            sweet("2", "Candy"),
            sweet("3", "Cake"),
            sweet("4", "Chocolate"),
            sweet("5", "Candy"),
        ];
        assert_eq!(distinct_categories(&sweets), vec!["Cake", "Candy", "Chocolate"]);
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_fetch_success_replaces_list_wholesale() {
        let store = Store::new(DashboardState::new());
        store_apply_sweets(&store, vec![sweet("1", "Cake"), sweet("2", "Candy")]);

        store_begin_fetch(&store);
        assert!(store.loading().get_untracked());

        store_apply_sweets(&store, vec![sweet("3", "Pastry")]);
        let ids: Vec<String> = store.sweets().get_untracked().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["3"]);
        assert_eq!(store.categories().get_untracked(), vec!["Pastry"]);
        assert!(!store.loading().get_untracked());
        assert_eq!(store.error().get_untracked(), None);
    }

    #[test]
    fn test_fetch_error_keeps_list_and_cart() {
        let store = Store::new(DashboardState::new());
        store_apply_sweets(&store, vec![sweet("1", "Cake")]);
        store_add_to_cart(&store, "1", 2);

        store_begin_fetch(&store);
        store_apply_fetch_error(&store, "Failed to load sweets.".to_string());

        assert_eq!(store.sweets().get_untracked().len(), 1);
        assert_eq!(store.categories().get_untracked(), vec!["Cake"]);
        assert_eq!(store.cart().get_untracked().total_items(), 2);
        assert_eq!(store.error().get_untracked().as_deref(), Some("Failed to load sweets."));
        assert!(!store.loading().get_untracked());
    }

    #[test]
    fn test_cart_helpers() {
        let store = Store::new(DashboardState::new());
        store_add_to_cart(&store, "x", 2);
        store_add_to_cart(&store, "x", 3);
        store_add_to_cart(&store, "y", 1);
        assert_eq!(store.cart().get_untracked().len(), 2);
        assert_eq!(store.cart().get_untracked().quantity_of("x"), 5);

        store_remove_cart_entry(&store, 0);
        assert_eq!(store.cart().get_untracked().entries()[0].sweet_id, "y");

        store_clear_cart(&store);
        assert!(store.cart().get_untracked().is_empty());
    }

    fn purchase_response(json: &str) -> PurchaseResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_partial_purchase_still_clears_cart() {
        let store = Store::new(DashboardState::new());
        store_add_to_cart(&store, "a", 1);
        store_add_to_cart(&store, "b", 2);

        let response = purchase_response(
            r#"{"status": true, "message": "Purchase processed", "results": [
                {"status": true, "remaining_quantity": 4},
                {"status": false, "message": "Insufficient stock"}
            ]}"#,
        );

        assert_eq!(store_apply_purchase(&store, Ok(response)), Ok(1));
        assert!(store.cart().get_untracked().is_empty());
    }

    #[test]
    fn test_failed_purchase_keeps_cart_and_list() {
        let store = Store::new(DashboardState::new());
        store_apply_sweets(&store, vec![sweet("a", "Cake")]);
        store_add_to_cart(&store, "a", 3);

        let err = ApiError::Rejected(Some("Purchase failed".to_string()));
        assert_eq!(store_apply_purchase(&store, Err(err.clone())), Err(err));

        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(store_apply_purchase(&store, Err(err.clone())), Err(err));

        assert_eq!(store.cart().get_untracked().quantity_of("a"), 3);
        assert_eq!(store.sweets().get_untracked().len(), 1);
    }

    #[test]
    fn test_failed_mutation_leaves_state_untouched() {
        let store = Store::new(DashboardState::new());
        store_apply_sweets(&store, vec![sweet("a", "Cake"), sweet("b", "Candy")]);
        store_add_to_cart(&store, "b", 2);
        store.show_add().set(true);
        store.restock_target().set(Some(sweet("a", "Cake")));

        for kind in [Mutation::Create, Mutation::Restock, Mutation::Delete] {
            let rejected = store_apply_mutation::<()>(
                &store,
                kind,
                Err(ApiError::Rejected(Some("Sweet not found".to_string()))),
            );
            assert!(rejected.is_err());
            let server = store_apply_mutation::<()>(
                &store,
                kind,
                Err(ApiError::Server { status: 422, message: Some("bad input".to_string()) }),
            );
            assert!(server.is_err());
        }

        let ids: Vec<String> = store.sweets().get_untracked().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.cart().get_untracked().quantity_of("b"), 2);
        assert!(store.show_add().get_untracked());
        assert!(store.restock_target().get_untracked().is_some());
    }

    #[test]
    fn test_successful_mutation_closes_its_modal() {
        let store = Store::new(DashboardState::new());
        store.show_add().set(true);
        store.restock_target().set(Some(sweet("a", "Cake")));

        assert_eq!(store_apply_mutation(&store, Mutation::Create, Ok(7)), Ok(7));
        assert!(!store.show_add().get_untracked());
        assert!(store.restock_target().get_untracked().is_some());

        assert!(store_apply_mutation(&store, Mutation::Restock, Ok(())).is_ok());
        assert_eq!(store.restock_target().get_untracked(), None);
    }
}
