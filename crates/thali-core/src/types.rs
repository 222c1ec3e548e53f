//! # Domain Types
//!
//! The loaded menu: categories holding items, in source order.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Menu ── Vec<Category>                                                  │
//! │             │                                                           │
//! │  ┌──────────▼──────┐        ┌─────────────────┐                        │
//! │  │    Category     │        │      Item       │                        │
//! │  │  ─────────────  │ 1    * │  ─────────────  │                        │
//! │  │  id             │───────►│  id             │                        │
//! │  │  name           │        │  name           │                        │
//! │  │  items          │        │  price (Money)  │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! - Category ids are unique within the menu.
//! - Item ids are unique within their category only. The same id may appear
//!   in two categories.
//!
//! Everything here is created once at load time and never mutated.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A purchasable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within its category.
    pub id: String,

    /// Display name; the search query matches against this.
    pub name: String,

    /// Price as published by the menu source.
    pub price: Money,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Item {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A named grouping of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Items in source order.
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<Item>) -> Self {
        Category {
            id: id.into(),
            name: name.into(),
            items,
        }
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The ordered category list produced by a successful load.
///
/// An empty menu is a valid, if degenerate, state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    categories: Vec<Category>,
}

impl Menu {
    pub fn new(categories: Vec<Category>) -> Self {
        Menu { categories }
    }

    /// Categories in source order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The first category, which becomes active after load.
    pub fn first_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    /// Finds a category by id. First match wins if ids repeat.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl From<Vec<Category>> for Menu {
    fn from(categories: Vec<Category>) -> Self {
        Menu::new(categories)
    }
}
