//! The session cart: merge-by-identity adds and whole-line removes.
//!
//! A [`Cart`] is an insertion-ordered sequence of [`CartLine`]s, at most one
//! per product identifier. Repeated adds of the same product increment the
//! existing line's quantity in place; the line keeps its original position
//! and its originally captured name/price/image.
//!
//! # Captured-at-add semantics
//!
//! A line snapshots the product's name, unit price, and image at the moment
//! it is first added. Later adds of the same product do NOT refresh those
//! fields from the new input, and catalog price changes never propagate into
//! an open cart. This matches the storefront's observed behavior and is
//! intentional - do not "fix" it here without changing the documented
//! contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, Price, ProductId};

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The add-to-cart input carried an empty product identifier.
    ///
    /// This is a contract violation by the caller, not a user-visible
    /// condition; it must fail fast rather than corrupt cart state.
    #[error("product identifier must not be empty")]
    EmptyProductId,
}

/// The Product-shaped value carried by an add-to-cart event.
///
/// This is what the shopper's click hands to the cart: the fields of the
/// product card as displayed, not a fresh catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Opaque catalog identifier.
    pub id: ProductId,
    /// Display name at the time of the add.
    pub name: String,
    /// Unit price at the time of the add.
    pub unit_price: Price,
    /// Image locator at the time of the add.
    pub image_url: String,
}

/// One aggregated entry in the cart, unique per product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line represents.
    pub product_id: ProductId,
    /// Display name captured at add time.
    pub name: String,
    /// Unit price captured at add time.
    pub unit_price: Price,
    /// Image locator captured at add time.
    pub image_url: String,
    /// Strictly positive quantity. A line never exists with quantity 0.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// An insertion-ordered cart, owned by a single session.
///
/// Created empty per session, mutated only by [`Cart::add_item`] and
/// [`Cart::remove_item`], cleared as a whole after a checkout hand-off.
/// Totals and item counts are always recomputed from current state, never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same identifier already exists its quantity
    /// increments by 1 and every other field is left unchanged (see the
    /// module docs on captured-at-add semantics). Otherwise a new line is
    /// appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyProductId`] if the snapshot's identifier
    /// is empty; the cart is left untouched.
    pub fn add_item(&mut self, snapshot: ProductSnapshot) -> Result<(), CartError> {
        if snapshot.id.is_empty() {
            return Err(CartError::EmptyProductId);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == snapshot.id) {
            line.quantity += 1;
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: snapshot.id,
            name: snapshot.name,
            unit_price: snapshot.unit_price,
            image_url: snapshot.image_url,
            quantity: 1,
        });
        Ok(())
    }

    /// Remove the line matching `product_id` in full, regardless of quantity.
    ///
    /// Returns whether a line was actually removed; removing an absent
    /// identifier is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() != before
    }

    /// The cart total: sum of unit price times quantity over all lines.
    ///
    /// Exactly zero for an empty cart. Recomputed on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |l| l.unit_price.currency_code);

        self.lines
            .iter()
            .fold(Price::zero(currency), |acc, line| acc.plus(&line.subtotal()))
    }

    /// Sum of quantities across all lines (distinct from the line count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line. Called after a checkout hand-off.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn snapshot(id: &str, name: &str, minor: i64) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            name: name.to_owned(),
            unit_price: Price::from_minor_units(minor, CurrencyCode::BRL),
            image_url: format!("https://cdn.example/{id}.jpg"),
        }
    }

    #[test]
    fn test_add_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_merge_preserves_insertion_position() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.lines()[1].quantity, 1);
    }

    #[test]
    fn test_repeat_add_keeps_original_snapshot_fields() {
        // Captured-at-add: later adds do not refresh name/price/image.
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        let mut changed = snapshot("a", "Star (renamed)", 9999);
        changed.image_url = "https://cdn.example/other.jpg".to_owned();
        cart.add_item(changed).expect("add");

        let line = &cart.lines()[0];
        assert_eq!(line.name, "Star");
        assert_eq!(line.unit_price.display(), "R$ 10.00");
        assert_eq!(line.image_url, "https://cdn.example/a.jpg");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_distinct_products_keep_order_added() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Moon", "Star"]);
    }

    #[test]
    fn test_add_empty_id_is_rejected_and_cart_untouched() {
        let mut cart = Cart::new();
        let err = cart.add_item(snapshot("", "Ghost", 100)).unwrap_err();
        assert_eq!(err, CartError::EmptyProductId);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_line_subtotals() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");

        assert_eq!(cart.total().amount, Decimal::new(2100, 2));
        assert_eq!(cart.total().display(), "R$ 21.00");
    }

    #[test]
    fn test_empty_cart_total_is_exactly_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total().amount, Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_item_count_sums_quantities_not_lines() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_deletes_exactly_one_line_preserving_order() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");
        cart.add_item(snapshot("c", "Sun", 700)).expect("add");

        assert!(cart.remove_item(&ProductId::new("b")));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        assert!(cart.remove_item(&ProductId::new("a")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");

        let before = cart.clone();
        assert!(!cart.remove_item(&ProductId::new("zzz")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_add_remove_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.remove_item(&ProductId::new("a"));

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_cart_serde_round_trip() {
        // The storefront stores the cart inside the session record.
        let mut cart = Cart::new();
        cart.add_item(snapshot("a", "Star", 1000)).expect("add");
        cart.add_item(snapshot("b", "Moon", 550)).expect("add");

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
