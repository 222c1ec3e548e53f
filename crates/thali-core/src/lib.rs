//! # thali-core: Pure Menu & Cart Logic for Thali
//!
//! This crate is the state machine behind the menu browser. It turns one
//! decoded menu into navigable, filterable state plus a cart, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Thali Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Browser (terminal front end)                    │   │
//! │  │    Categories ──► Search ──► Item list ──► Cart                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ thali-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selection │  │   cart    │  │  session  │  │   │
//! │  │   │ Category  │  │ query     │  │ CartLine  │  │  Loading  │  │   │
//! │  │   │ Item      │  │ visible   │  │ remove_at │  │  Ready    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │             thali-loader (fetch + payload decode)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu, Category, Item
//! - [`money`] - Integer minor-unit money
//! - [`selection`] - Active category, query, visible items
//! - [`cart`] - Cart lines, add / remove by position
//! - [`session`] - Loading / Failed / Ready phases
//! - [`validation`] - Menu integrity audit
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use thali_core::{Category, Item, Menu, MenuSession, Money};
//!
//! let menu = Menu::new(vec![Category::new(
//!     "1",
//!     "Starters",
//!     vec![
//!         Item::new("a", "Veg Pizza", Money::from_minor_units(19900)),
//!         Item::new("b", "Paneer Tikka", Money::from_minor_units(22900)),
//!     ],
//! )]);
//!
//! let mut session = MenuSession::new(menu);
//! session.set_query("pan");
//! assert_eq!(session.visible_items().len(), 1);
//!
//! session.add_visible_at(0).unwrap();
//! assert_eq!(session.cart().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod selection;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::SelectionState;
pub use session::{MenuSession, SessionPhase};
pub use types::*;
