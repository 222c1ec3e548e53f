//! # thali-loader: Menu Fetch for Thali
//!
//! Fetches one restaurant's menu over HTTP and decodes the double-encoded
//! response into [`thali_core::Menu`].
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  LoaderConfig::load()   defaults → thali.toml → THALI_* env             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  MenuLoader::new(&config.source)                                        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  MenuLoader::load().await                                               │
//! │        │   GET {endpoint}?ShopId=..&locale_id=..                        │
//! │        ▼                                                                │
//! │  payload::decode_response(status, body)                                 │
//! │        │   envelope.data ──► inner JSON ──► Menu                        │
//! │        ▼                                                                │
//! │  Ok(Menu) | Err(LoadError)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - TOML/env configuration
//! - [`loader`] - HTTP fetch
//! - [`payload`] - Two-stage response decode
//! - [`error`] - Load error types

pub mod config;
pub mod error;
pub mod loader;
pub mod payload;

pub use config::{LoaderConfig, RestaurantSettings, SourceSettings, DEFAULT_ENDPOINT};
pub use error::{LoadError, LoadResult};
pub use loader::MenuLoader;
pub use payload::{decode_envelope, decode_menu, decode_response};
