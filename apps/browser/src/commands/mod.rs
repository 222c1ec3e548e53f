//! # Commands Module
//!
//! Every operation the REPL can perform, one function each.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Categories, selection, search
//! └── cart.rs     ◄─── Cart add / remove / totals
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  repl: "search pan"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::menu::set_query(&menu_state, "pan")                          │
//! │      -> Result<VisibleItemsResponse, ApiError>                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  view::render_items(&response, &config)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take only the state they need and return plain DTOs, so they
//! can be driven without a terminal.

pub mod cart;
pub mod menu;
