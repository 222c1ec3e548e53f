//! # Cart Commands
//!
//! Cart manipulation. Lines are copies of items; the same dish added twice
//! is two lines.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐ add_to_cart_at ┌──────────┐                              │
//! │  │  Empty   │───────────────►│ In Cart  │◄──┐ add_to_cart_at           │
//! │  │  Cart    │◄───────────────│          │───┘ remove_from_cart         │
//! │  └──────────┘ remove last    └──────────┘                              │
//! │                                                                         │
//! │  Discarded on exit; there is no checkout.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use thali_core::{Cart, CartLine, Money};

use crate::error::ApiError;
use crate::state::MenuState;

/// Totals derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            total: cart.lines().iter().map(|line| line.price).sum(),
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(menu: &MenuState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    menu.with_phase(|phase| -> Result<_, ApiError> {
        Ok(CartResponse::from(phase.ready()?.cart()))
    })
}

/// Adds the item at zero-based `position` of the visible list.
///
/// ## Returns
/// Updated cart, or `NOT_FOUND` naming the 1-based row when the list is
/// shorter than that
pub fn add_to_cart_at(menu: &MenuState, position: usize) -> Result<CartResponse, ApiError> {
    debug!(position, "add_to_cart_at command");
    menu.with_phase_mut(|phase| -> Result<_, ApiError> {
        let session = phase.ready_mut()?;
        session.add_visible_at(position)?;
        Ok(CartResponse::from(session.cart()))
    })
}

/// Removes the line at zero-based `position`. Out of range leaves the cart
/// unchanged.
pub fn remove_from_cart(menu: &MenuState, position: usize) -> Result<CartResponse, ApiError> {
    debug!(position, "remove_from_cart command");
    menu.with_phase_mut(|phase| -> Result<_, ApiError> {
        let session = phase.ready_mut()?;
        if session.remove_cart_line(position).is_none() {
            debug!(position, "No cart line at position, nothing removed");
        }
        Ok(CartResponse::from(session.cart()))
    })
}
