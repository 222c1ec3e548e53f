//! # View
//!
//! Text rendering of command responses. Pure: every function returns a
//! `String` and never touches the terminal.
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FoodChow Demo India                                                    │
//! │  📍 Valsad, Gujarat, India                                              │
//! │  Restaurant Is Open                                                     │
//! │  Timing: 07:00 AM - 11:00 PM                                            │
//! │                                                                         │
//! │  CATEGORIES                                                             │
//! │  > [101] Pizza                                                          │
//! │    [102] Drinks                                                         │
//! │                                                                         │
//! │  Pizza                                                                  │
//! │    1. Veg Pizza                        Rs. 199.00                       │
//! │    2. Paneer Tikka                     Rs. 229.00                       │
//! │                                                                         │
//! │  Your Cart                                                              │
//! │  Your Cart Is Empty! 🍽️😋                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::commands::cart::CartResponse;
use crate::commands::menu::{MenuResponse, VisibleItemsResponse};
use crate::state::ConfigState;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const OPEN_STATUS: &str = "Restaurant Is Open";
pub const EMPTY_CART_MESSAGE: &str = "Your Cart Is Empty! 🍽️😋";
pub const NO_ITEMS_MESSAGE: &str = "No dishes to show";

const NAME_WIDTH: usize = 34;

pub fn render_header(config: &ConfigState) -> String {
    format!(
        "{}\n📍 {}\n{}\nTiming: {}\n",
        config.restaurant_name, config.address, OPEN_STATUS, config.hours
    )
}

/// Category list with the active one marked by `>`.
pub fn render_categories(menu: &MenuResponse) -> String {
    let mut lines = vec!["CATEGORIES".to_string()];
    lines.extend(menu.categories.iter().map(|category| {
        let marker = if category.active { '>' } else { ' ' };
        format!("{} [{}] {}", marker, category.id, category.name)
    }));
    finish(lines)
}

/// Heading, active search and numbered items.
pub fn render_items(items: &VisibleItemsResponse, config: &ConfigState) -> String {
    let mut lines = vec![items.heading.clone()];
    if !items.query.is_empty() {
        lines.push(format!("Search: \"{}\"", items.query));
    }
    if items.items.is_empty() {
        lines.push(format!("  {}", NO_ITEMS_MESSAGE));
    }
    lines.extend(
        items
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| priced_row(index, &item.name, config.format_currency(item.price))),
    );
    finish(lines)
}

/// Cart lines with a total, or the empty-cart message.
pub fn render_cart(cart: &CartResponse, config: &ConfigState) -> String {
    let mut lines = vec!["Your Cart".to_string()];
    if cart.lines.is_empty() {
        lines.push(EMPTY_CART_MESSAGE.to_string());
        return finish(lines);
    }
    lines.extend(
        cart.lines
            .iter()
            .enumerate()
            .map(|(index, line)| priced_row(index, &line.name, config.format_currency(line.price))),
    );
    lines.push(format!(
        "Total ({} {}): {}",
        cart.totals.line_count,
        if cart.totals.line_count == 1 { "item" } else { "items" },
        config.format_currency(cart.totals.total)
    ));
    finish(lines)
}

/// One numbered row; `index` is zero-based.
fn priced_row(index: usize, name: &str, price: String) -> String {
    format!("{:>3}. {:<width$} {}", index + 1, name, price, width = NAME_WIDTH)
}

/// Joins rows, each terminated by a newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The whole screen, sections separated by blank lines.
pub fn render_screen(
    config: &ConfigState,
    menu: &MenuResponse,
    items: &VisibleItemsResponse,
    cart: &CartResponse,
) -> String {
    [
        render_header(config),
        render_categories(menu),
        render_items(items, config),
        render_cart(cart, config),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::CartTotals;
    use crate::commands::menu::CategorySummary;
    use thali_core::{CartLine, Item, Money};

    fn menu_response() -> MenuResponse {
        MenuResponse {
            categories: vec![
                CategorySummary {
                    id: "101".into(),
                    name: "Pizza".into(),
                    item_count: 2,
                    active: true,
                },
                CategorySummary {
                    id: "102".into(),
                    name: "Drinks".into(),
                    item_count: 0,
                    active: false,
                },
            ],
            active_category_id: Some("101".into()),
        }
    }

    fn items_response(query: &str) -> VisibleItemsResponse {
        VisibleItemsResponse {
            heading: "Pizza".into(),
            query: query.into(),
            items: vec![
                Item::new("1", "Veg Pizza", Money::from_minor_units(19900)),
                Item::new("2", "Paneer Tikka", Money::from_minor_units(22900)),
            ],
        }
    }

    fn empty_cart() -> CartResponse {
        CartResponse {
            lines: vec![],
            totals: CartTotals {
                line_count: 0,
                total: Money::zero(),
            },
        }
    }

    #[test]
    fn test_header() {
        let header = render_header(&ConfigState::default());
        assert_eq!(
            header,
            "FoodChow Demo India\n📍 Valsad, Gujarat, India\nRestaurant Is Open\nTiming: 07:00 AM - 11:00 PM\n"
        );
    }

    #[test]
    fn test_categories_mark_active() {
        assert_eq!(
            render_categories(&menu_response()),
            "CATEGORIES\n> [101] Pizza\n  [102] Drinks\n"
        );
    }

    #[test]
    fn test_items_are_numbered_with_prices() {
        let text = render_items(&items_response(""), &ConfigState::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Pizza");
        assert!(lines[1].starts_with("  1. Veg Pizza"));
        assert!(lines[1].ends_with("Rs. 199.00"));
        assert!(lines[2].starts_with("  2. Paneer Tikka"));
        assert!(!text.contains("Search:"));
    }

    #[test]
    fn test_items_show_query_and_empty_result() {
        let mut response = items_response("xyz");
        response.items.clear();

        let text = render_items(&response, &ConfigState::default());
        assert!(text.contains("Search: \"xyz\""));
        assert!(text.contains(NO_ITEMS_MESSAGE));
    }

    #[test]
    fn test_empty_cart() {
        let text = render_cart(&empty_cart(), &ConfigState::default());
        assert_eq!(text, format!("Your Cart\n{}\n", EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_cart_lines_and_total() {
        let cart = CartResponse {
            lines: vec![
                CartLine {
                    item_id: "1".into(),
                    name: "Veg Pizza".into(),
                    price: Money::from_minor_units(19900),
                },
                CartLine {
                    item_id: "1".into(),
                    name: "Veg Pizza".into(),
                    price: Money::from_minor_units(19900),
                },
            ],
            totals: CartTotals {
                line_count: 2,
                total: Money::from_minor_units(39800),
            },
        };

        let text = render_cart(&cart, &ConfigState::default());
        assert!(text.contains("  2. Veg Pizza"));
        assert!(text.ends_with("Total (2 items): Rs. 398.00\n"));
        assert!(!text.contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_screen_has_every_section() {
        let screen = render_screen(
            &ConfigState::default(),
            &menu_response(),
            &items_response(""),
            &empty_cart(),
        );
        for section in ["FoodChow Demo India", "CATEGORIES", "Pizza", "Your Cart"] {
            assert!(screen.contains(section), "missing {section}");
        }
    }
}
