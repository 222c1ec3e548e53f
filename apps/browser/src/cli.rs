//! # Command-Line Flags
//!
//! Flags sit on top of the config file and `THALI_*` environment variables.

use std::path::PathBuf;

use clap::Parser;
use thali_loader::{LoadResult, LoaderConfig};

/// Browse a restaurant menu and build a cart from the terminal
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "thali-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a thali.toml config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Menu endpoint URL (without query string)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Restaurant id sent as ShopId
    #[arg(long)]
    pub shop_id: Option<String>,

    /// Locale id sent as locale_id
    #[arg(long)]
    pub locale_id: Option<String>,
}

impl Cli {
    /// Loads file and environment configuration, then applies the flags.
    pub fn resolve_config(&self) -> LoadResult<LoaderConfig> {
        let mut config = LoaderConfig::load(self.config.clone())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut LoaderConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(shop_id) = &self.shop_id {
            config.source.shop_id = shop_id.clone();
        }
        if let Some(locale_id) = &self.locale_id {
            config.source.locale_id = locale_id.clone();
        }
    }
}
