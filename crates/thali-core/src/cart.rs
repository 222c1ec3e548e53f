//! # Cart
//!
//! The user's local cart: an ordered list of item copies.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User Action               Operation              Cart Change           │
//! │  ───────────               ─────────              ───────────           │
//! │                                                                         │
//! │  Click "Add" on item ─────► add_item(item) ─────► lines.push(copy)      │
//! │                                                                         │
//! │  Click remove on line ────► remove_at(i) ───────► lines.remove(i)       │
//! │                                                   (no-op if i ≥ len)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Adding the same item twice yields two independent lines; there is no
//!   quantity aggregation.
//! - A line's position is its only handle. Positions shift after a removal.
//! - Removing an out-of-range position never fails.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Item;

/// One added copy of an item.
///
/// Fields are frozen at the moment of adding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: Money,
}

impl From<&Item> for CartLine {
    fn from(item: &Item) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
        }
    }
}

/// Ordered cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Appends a copy of `item` to the end of the cart.
    pub fn add_item(&mut self, item: &Item) {
        self.lines.push(CartLine::from(item));
    }

    /// Removes the line at zero-based `position`.
    ///
    /// Returns the removed line, or `None` (leaving the cart untouched) when
    /// the position is out of bounds.
    pub fn remove_at(&mut self, position: usize) -> Option<CartLine> {
        (position < self.lines.len()).then(|| self.lines.remove(position))
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Functional form of [`Cart::add_item`].
pub fn add_item(mut cart: Cart, item: &Item) -> Cart {
    cart.add_item(item);
    cart
}

/// Functional form of [`Cart::remove_at`].
pub fn remove_at(mut cart: Cart, position: usize) -> Cart {
    cart.remove_at(position);
    cart
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, minor: i64) -> Item {
        Item::new(id, name, Money::from_minor_units(minor))
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.lines().iter().map(|l| l.item_id.as_str()).collect()
    }

    #[test]
    fn test_add_then_remove_first() {
        let a = item("a", "Veg Pizza", 19900);
        let b = item("b", "Paneer Tikka", 22900);

        let cart = add_item(add_item(Cart::new(), &a), &b);
        let cart = remove_at(cart, 0);

        assert_eq!(ids(&cart), vec!["b"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Veg Pizza", 19900));
        cart.add_item(&item("b", "Paneer Tikka", 22900));
        let before = cart.clone();

        assert!(cart.remove_at(5).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_on_empty_cart() {
        let cart = remove_at(Cart::new(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_duplicate_adds_are_independent_lines() {
        let a = item("a", "Lassi", 6000);
        let mut cart = Cart::new();
        cart.add_item(&a);
        cart.add_item(&a);
        assert_eq!(cart.len(), 2);

        let removed = cart.remove_at(1).unwrap();
        assert_eq!(removed.item_id, "a");
        assert_eq!(ids(&cart), vec!["a"]);
    }

    #[test]
    fn test_line_is_a_snapshot_of_item() {
        let mut a = item("a", "Lassi", 6000);
        let mut cart = Cart::new();
        cart.add_item(&a);

        a.price = Money::from_minor_units(1);
        a.name = "Changed".to_string();

        let line = &cart.lines()[0];
        assert_eq!(line.name, "Lassi");
        assert_eq!(line.price, Money::from_minor_units(6000));
    }

    #[test]
    fn test_total_is_derivable_from_lines() {
        let mut cart = Cart::new();
        cart.add_item(&item("a", "Lassi", 6000));
        cart.add_item(&item("b", "Naan", 4050));
        let total: Money = cart.lines().iter().map(|l| l.price).sum();
        assert_eq!(total, Money::from_minor_units(10050));
    }
}
