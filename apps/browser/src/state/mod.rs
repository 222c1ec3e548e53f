//! # State Module
//!
//! Application state for the terminal browser.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │   MenuState                  │  │   ConfigState                │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<SessionPhase>>    │  │  restaurant name / address   │    │
//! │  │   Loading | Failed | Ready   │  │  hours, currency symbol      │    │
//! │  │   (menu, selection, cart)    │  │                              │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  • MenuState: every transition takes the lock                          │
//! │  • ConfigState: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod menu;

pub use config::ConfigState;
pub use menu::MenuState;
