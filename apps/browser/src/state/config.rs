//! # Configuration State
//!
//! Header text and currency formatting, taken from the `[restaurant]` table
//! of the config file.
//!
//! Read-only after startup, so no mutex.

use serde::Serialize;
use thali_core::Money;
use thali_loader::RestaurantSettings;

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Restaurant name (first header line)
    pub restaurant_name: String,

    pub address: String,

    /// Opening hours, free text
    pub hours: String,

    /// Printed before every price
    pub currency_symbol: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState::from(&RestaurantSettings::default())
    }
}

impl From<&RestaurantSettings> for ConfigState {
    fn from(settings: &RestaurantSettings) -> Self {
        ConfigState {
            restaurant_name: settings.name.clone(),
            address: settings.address.clone(),
            hours: settings.hours.clone(),
            currency_symbol: settings.currency_symbol.clone(),
        }
    }
}

impl ConfigState {
    /// Formats an amount with the currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use thali_browser_lib::state::ConfigState;
    /// use thali_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_minor_units(12050)), "Rs. 120.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{} {}.{:02}",
            sign,
            self.currency_symbol,
            amount.major_part().abs(),
            amount.minor_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_minor_units(19900)), "Rs. 199.00");
        assert_eq!(config.format_currency(Money::from_minor_units(1)), "Rs. 0.01");
        assert_eq!(config.format_currency(Money::zero()), "Rs. 0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_minor_units(-1234)), "-Rs. 12.34");
    }

    #[test]
    fn test_from_settings() {
        let settings = RestaurantSettings {
            currency_symbol: "₹".to_string(),
            ..RestaurantSettings::default()
        };
        let config = ConfigState::from(&settings);
        assert_eq!(config.restaurant_name, "FoodChow Demo India");
        assert_eq!(config.format_currency(Money::from_minor_units(4900)), "₹ 49.00");
    }
}
