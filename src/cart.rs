//! Purchase Cart
//!
//! In-memory list of pending purchase lines. One entry per sweet.

use crate::error::ValidationError;
use crate::models::{CartEntry, Sweet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Add `quantity` of a sweet, summing into an existing entry for the same id.
    /// Zero quantities are ignored; returns whether the cart changed.
    pub fn add(&mut self, sweet_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.sweet_id == sweet_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(quantity),
            None => self.entries.push(CartEntry {
                sweet_id: sweet_id.to_string(),
                quantity,
            }),
        }
        true
    }

    /// Remove the entry at `index`, keeping the others in order
    pub fn remove(&mut self, index: usize) -> Option<CartEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Quantity already requested for a sweet
    pub fn quantity_of(&self, sweet_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.sweet_id == sweet_id)
            .map_or(0, |e| e.quantity)
    }

    /// Sum of all requested quantities
    pub fn total_items(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }
}

/// Display name of a cart line, looked up in the loaded sweets
pub fn sweet_name<'a>(sweets: &'a [Sweet], sweet_id: &str) -> &'a str {
    sweets
        .iter()
        .find(|s| s.id == sweet_id)
        .map_or("Unknown", |s| s.name.as_str())
}

/// Refuse to queue more of a sweet than its last known stock
pub fn check_stock(sweet: &Sweet, in_cart: u32, requested: u32) -> Result<(), ValidationError> {
    let available = sweet.quantity.saturating_sub(in_cart);
    if requested > available {
        return Err(ValidationError::InsufficientStock { available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.entries().iter().map(|e| e.sweet_id.as_str()).collect()
    }

    #[test]
    fn test_add_same_sweet_merges_quantities() {
        let mut cart = Cart::new();
        cart.add("x", 2);
        cart.add("x", 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0], CartEntry { sweet_id: "x".to_string(), quantity: 5 });
    }

    #[test]
    fn test_zero_quantity_is_ignored() {
        let mut cart = Cart::new();
        assert!(!cart.add("x", 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut cart = Cart::new();
        cart.add("a", 1);
        cart.add("b", 1);
        cart.add("c", 1);
        cart.add("d", 1);

        let removed = cart.remove(1);
        assert_eq!(removed.map(|e| e.sweet_id), Some("b".to_string()));
        assert_eq!(ids(&cart), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = Cart::new();
        cart.add("a", 1);
        assert_eq!(cart.remove(5), None);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals_and_lookup() {
        let mut cart = Cart::new();
        cart.add("a", 2);
        cart.add("b", 4);
        cart.add("a", 1);

        assert_eq!(cart.total_items(), 7);
        assert_eq!(cart.quantity_of("a"), 3);
        assert_eq!(cart.quantity_of("missing"), 0);

        cart.clear();
        assert_eq!(cart.total_items(), 0);
    }

    fn barfi(quantity: u32) -> Sweet {
        Sweet {
            id: "a".to_string(),
            name: "Barfi".to_string(),
            category: "Milk-based".to_string(),
            price: 2.0,
            quantity,
            discount: 0.0,
            description: None,
            image_url: None,
            is_available: quantity > 0,
        }
    }

    #[test]
    fn test_check_stock_counts_queued_quantity() {
        let sweet = barfi(5);
        assert_eq!(check_stock(&sweet, 0, 5), Ok(()));
        assert_eq!(check_stock(&sweet, 3, 2), Ok(()));
        assert_eq!(
            check_stock(&sweet, 3, 3),
            Err(ValidationError::InsufficientStock { available: 2 })
        );
        assert_eq!(
            check_stock(&sweet, 9, 1),
            Err(ValidationError::InsufficientStock { available: 0 })
        );
    }

    #[test]
    fn test_sweet_name_unknown_when_not_loaded() {
        let sweets = vec![barfi(1)];
        assert_eq!(sweet_name(&sweets, "a"), "Barfi");
        assert_eq!(sweet_name(&sweets, "gone"), "Unknown");
    }
}
