//! # Selection & Search
//!
//! Which category is active, what the user typed, and the item list those
//! two derive.
//!
//! ## Derivation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    visible_items(menu, state)                           │
//! │                                                                         │
//! │  active_category_id ──► find category ──► none? ──► []                 │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  query ──lowercase──► keep items whose lowercase name contains it      │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                     items in source order                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions here are pure: same inputs, same outputs, nothing hidden.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Item, Menu};

/// Active category plus the current search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Id of the active category, if any.
    pub active_category_id: Option<String>,

    /// Free-text search; empty matches everything.
    pub query: String,
}

impl SelectionState {
    /// Selection installed right after a successful load.
    ///
    /// The first category is active when the menu has one; otherwise nothing
    /// is active.
    pub fn initial(menu: &Menu) -> Self {
        SelectionState {
            active_category_id: menu.first_category().map(|c| c.id.clone()),
            query: String::new(),
        }
    }
}

/// Makes `id` the active category and clears the query.
///
/// The id is not checked against the menu. An unknown id simply resolves to
/// an empty visible list.
pub fn select_category(_menu: &Menu, id: impl Into<String>) -> SelectionState {
    SelectionState {
        active_category_id: Some(id.into()),
        query: String::new(),
    }
}

/// Replaces the query, keeping the active category.
pub fn set_query(state: &SelectionState, text: impl Into<String>) -> SelectionState {
    SelectionState {
        active_category_id: state.active_category_id.clone(),
        query: text.into(),
    }
}

/// The category the selection points at, if it exists in the menu.
pub fn active_category<'m>(menu: &'m Menu, state: &SelectionState) -> Option<&'m Category> {
    state
        .active_category_id
        .as_deref()
        .and_then(|id| menu.category(id))
}

/// Items of the active category whose name contains the query,
/// case-insensitively, in source order.
pub fn visible_items<'m>(menu: &'m Menu, state: &SelectionState) -> Vec<&'m Item> {
    let Some(category) = active_category(menu, state) else {
        return Vec::new();
    };

    let needle = state.query.to_lowercase();
    category
        .items
        .iter()
        .filter(|item| name_matches(&item.name, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}
