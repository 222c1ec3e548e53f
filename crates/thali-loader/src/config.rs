//! # Loader Configuration
//!
//! Where the menu comes from, and what the browser prints above it.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by the browser)      │
//! │     --endpoint, --shop-id, --locale-id                                 │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     THALI_ENDPOINT=http://localhost:8080/menu                          │
//! │     THALI_SHOP_ID=3161                                                 │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/thali/thali.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.thali.browser/thali.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     FoodChow demo shop 3161                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # thali.toml
//! [source]
//! endpoint = "https://www.foodchow.com/api/FoodChowWD/GetRestaurantMenuWDWidget_multi"
//! shop_id = "3161"
//! locale_id = "null"
//! # request_timeout_secs = 30
//!
//! [restaurant]
//! name = "FoodChow Demo India"
//! address = "Valsad, Gujarat, India"
//! hours = "07:00 AM - 11:00 PM"
//! currency_symbol = "Rs."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{LoadError, LoadResult};

/// Menu widget endpoint of the demo restaurant.
pub const DEFAULT_ENDPOINT: &str =
    "https://www.foodchow.com/api/FoodChowWD/GetRestaurantMenuWDWidget_multi";

// =============================================================================
// Source Settings
// =============================================================================

/// Where and how the menu is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Base URL of the menu endpoint, without query string.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Restaurant identifier, sent as `ShopId`.
    #[serde(default = "default_shop_id")]
    pub shop_id: String,

    /// Locale identifier, sent as `locale_id`. The API expects the literal
    /// text `null` when no locale is chosen.
    #[serde(default = "default_locale_id")]
    pub locale_id: String,

    /// Request timeout. Unset means the request waits as long as the
    /// transport allows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_shop_id() -> String {
    "3161".to_string()
}

fn default_locale_id() -> String {
    "null".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            endpoint: default_endpoint(),
            shop_id: default_shop_id(),
            locale_id: default_locale_id(),
            request_timeout_secs: None,
        }
    }
}

impl SourceSettings {
    /// Builds the full request URL with `ShopId` and `locale_id` appended.
    ///
    /// ```rust
    /// use thali_loader::SourceSettings;
    ///
    /// let url = SourceSettings::default().request_url().unwrap();
    /// assert_eq!(url.query(), Some("ShopId=3161&locale_id=null"));
    /// ```
    pub fn request_url(&self) -> LoadResult<Url> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("ShopId", self.shop_id.as_str()),
                ("locale_id", self.locale_id.as_str()),
            ],
        )?;
        Ok(url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

// =============================================================================
// Restaurant Settings
// =============================================================================

/// Header text and currency label shown by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    #[serde(default = "default_restaurant_name")]
    pub name: String,

    #[serde(default = "default_address")]
    pub address: String,

    /// Opening hours as free text.
    #[serde(default = "default_hours")]
    pub hours: String,

    /// Printed before every price.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_restaurant_name() -> String {
    "FoodChow Demo India".to_string()
}

fn default_address() -> String {
    "Valsad, Gujarat, India".to_string()
}

fn default_hours() -> String {
    "07:00 AM - 11:00 PM".to_string()
}

fn default_currency_symbol() -> String {
    "Rs.".to_string()
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        RestaurantSettings {
            name: default_restaurant_name(),
            address: default_address(),
            hours: default_hours(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete browser configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub restaurant: RestaurantSettings,
}

impl LoaderConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (thali.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist. The per-user default file is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> LoadResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) if !path.exists() => {
                return Err(LoadError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => config = Self::read_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => config = Self::read_file(&path)?,
                Some(path) => debug!(?path, "No config file, using defaults"),
                None => debug!("No config directory, using defaults"),
            },
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> LoadResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> LoadResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> LoadResult<()> {
        if self.source.shop_id.trim().is_empty() {
            return Err(LoadError::Config("shop_id must not be empty".into()));
        }

        let url = Url::parse(&self.source.endpoint)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(LoadError::InvalidUrl(format!(
                "Endpoint must start with http:// or https://, got: {}",
                self.source.endpoint
            )));
        }

        if self.source.request_timeout_secs == Some(0) {
            return Err(LoadError::Config(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `THALI_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; the environment is one source.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("THALI_ENDPOINT") {
            debug!(endpoint = %endpoint, "Overriding endpoint from environment");
            self.source.endpoint = endpoint;
        }

        if let Some(shop_id) = lookup("THALI_SHOP_ID") {
            debug!(shop_id = %shop_id, "Overriding shop id from environment");
            self.source.shop_id = shop_id;
        }

        if let Some(locale_id) = lookup("THALI_LOCALE_ID") {
            self.source.locale_id = locale_id;
        }

        if let Some(timeout) = lookup("THALI_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.source.request_timeout_secs = Some(secs),
                Err(_) => warn!(value = %timeout, "Ignoring non-numeric THALI_TIMEOUT_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "thali", "browser")
            .map(|dirs| dirs.config_dir().join("thali.toml"))
    }
}
