//! # Menu State
//!
//! Holds the session phase: the loaded menu, the current selection and the
//! cart once the fetch succeeds.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  User Action             Command                 Phase Change           │
//! │  ───────────             ───────                 ────────────           │
//! │                                                                         │
//! │  (startup) ────────────► install(load result) ─► Loading → Ready|Failed │
//! │                                                                         │
//! │  select 101 ───────────► select_category() ────► active = 101, query "" │
//! │                                                                         │
//! │  search pan ───────────► set_query() ──────────► query = "pan"          │
//! │                                                                         │
//! │  add 2 ────────────────► add_to_cart_at() ─────► cart.push(line)        │
//! │                                                                         │
//! │  remove 1 ─────────────► remove_from_cart() ───► cart.remove(0)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use thali_core::{Menu, SessionPhase};

/// Shared session phase.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    phase: Arc<Mutex<SessionPhase>>,
}

impl MenuState {
    /// Creates a state in the `Loading` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state that is already `Ready` with `menu`.
    pub fn ready(menu: Menu) -> Self {
        let state = Self::new();
        state.install::<std::convert::Infallible>(Ok(menu));
        state
    }

    /// Replaces the phase with the outcome of the load. Returns true when
    /// the menu is now browsable.
    pub fn install<E: std::fmt::Display>(&self, result: Result<Menu, E>) -> bool {
        self.with_phase_mut(|phase| {
            *phase = SessionPhase::from_load(result);
            phase.is_ready()
        })
    }

    /// Executes a function with read access to the phase.
    pub fn with_phase<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionPhase) -> R,
    {
        let phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        f(&phase)
    }

    /// Executes a function with write access to the phase.
    pub fn with_phase_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionPhase) -> R,
    {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut phase)
    }
}
