//! # Session
//!
//! The three states a browsing session moves through, and the operations
//! available once the menu is in.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐   load() Ok(menu)    ┌──────────────────────────────┐   │
//! │   │ Loading  │─────────────────────►│ Ready(MenuSession)           │   │
//! │   └────┬─────┘                      │  select_category / set_query │   │
//! │        │                            │  add_visible_at / remove     │   │
//! │        │ load() Err(_)              └──────────────────────────────┘   │
//! │        ▼                                                                │
//! │   ┌──────────┐                                                          │
//! │   │ Failed   │  (terminal: no retry)                                   │
//! │   └──────────┘                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::cart::{Cart, CartLine};
use crate::error::{CoreError, CoreResult};
use crate::selection::{self, SelectionState};
use crate::types::{Category, Item, Menu};

// =============================================================================
// Menu Session
// =============================================================================

/// Menu, selection and cart of a loaded session.
#[derive(Debug, Clone, Serialize)]
pub struct MenuSession {
    menu: Menu,
    selection: SelectionState,
    cart: Cart,
}

impl MenuSession {
    /// Installs a freshly loaded menu with the initial selection and an
    /// empty cart.
    pub fn new(menu: Menu) -> Self {
        let selection = SelectionState::initial(&menu);
        MenuSession {
            menu,
            selection,
            cart: Cart::new(),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Switches category and clears the query.
    pub fn select_category(&mut self, id: impl Into<String>) {
        self.selection = selection::select_category(&self.menu, id);
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.selection = selection::set_query(&self.selection, text);
    }

    pub fn active_category(&self) -> Option<&Category> {
        selection::active_category(&self.menu, &self.selection)
    }

    pub fn visible_items(&self) -> Vec<&Item> {
        selection::visible_items(&self.menu, &self.selection)
    }

    /// Adds the item at zero-based `position` of the visible list.
    ///
    /// Item ids are not unique even within a category, so rows are picked by
    /// position rather than by id.
    pub fn add_visible_at(&mut self, position: usize) -> CoreResult<&CartLine> {
        let item = selection::visible_items(&self.menu, &self.selection)
            .get(position)
            .map(|item| (*item).clone())
            .ok_or(CoreError::NoVisibleItemAt { position })?;

        self.cart.add_item(&item);
        Ok(&self.cart.lines()[self.cart.len() - 1])
    }

    /// Removes the cart line at `position`; out of range is a no-op.
    pub fn remove_cart_line(&mut self, position: usize) -> Option<CartLine> {
        self.cart.remove_at(position)
    }
}

// =============================================================================
// Session Phase
// =============================================================================

/// What the user is looking at.
#[derive(Debug, Clone, Default)]
pub enum SessionPhase {
    /// The menu fetch is outstanding.
    #[default]
    Loading,

    /// The fetch failed. `reason` is for logs, not for the user.
    Failed { reason: String },

    /// The menu is installed.
    Ready(MenuSession),
}

impl SessionPhase {
    /// Builds the phase that follows a load attempt.
    pub fn from_load<E: std::fmt::Display>(result: Result<Menu, E>) -> Self {
        match result {
            Ok(menu) => SessionPhase::Ready(MenuSession::new(menu)),
            Err(e) => SessionPhase::Failed {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionPhase::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SessionPhase::Ready(_))
    }

    pub fn ready(&self) -> CoreResult<&MenuSession> {
        match self {
            SessionPhase::Ready(session) => Ok(session),
            SessionPhase::Loading => Err(CoreError::MenuLoading),
            SessionPhase::Failed { reason } => Err(CoreError::MenuUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    pub fn ready_mut(&mut self) -> CoreResult<&mut MenuSession> {
        match self {
            SessionPhase::Ready(session) => Ok(session),
            SessionPhase::Loading => Err(CoreError::MenuLoading),
            SessionPhase::Failed { reason } => Err(CoreError::MenuUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}
