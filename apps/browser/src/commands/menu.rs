//! # Menu Commands
//!
//! Category navigation and search.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  get_menu ──────────► category list, active one marked                 │
//! │                                                                         │
//! │  select_category ───► active = id, query cleared ──┐                   │
//! │                                                    ├──► visible items  │
//! │  set_query ─────────► query replaced ──────────────┘                   │
//! │                                                                         │
//! │  get_visible_items ─► (read only)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use thali_core::{Item, MenuSession};

use crate::error::ApiError;
use crate::state::MenuState;

/// Heading shown when no category resolves.
pub const DEFAULT_HEADING: &str = "Menu Items";

/// One entry of the category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub item_count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub categories: Vec<CategorySummary>,
    pub active_category_id: Option<String>,
}

impl From<&MenuSession> for MenuResponse {
    fn from(session: &MenuSession) -> Self {
        let active_id = session.selection().active_category_id.as_deref();
        MenuResponse {
            categories: session
                .menu()
                .categories()
                .iter()
                .map(|category| CategorySummary {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    item_count: category.items.len(),
                    active: active_id == Some(category.id.as_str()),
                })
                .collect(),
            active_category_id: active_id.map(str::to_string),
        }
    }
}

/// What the item pane shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleItemsResponse {
    pub heading: String,
    pub query: String,
    pub items: Vec<Item>,
}

impl From<&MenuSession> for VisibleItemsResponse {
    fn from(session: &MenuSession) -> Self {
        VisibleItemsResponse {
            heading: session
                .active_category()
                .map(|category| category.name.clone())
                .unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            query: session.selection().query.clone(),
            items: session.visible_items().into_iter().cloned().collect(),
        }
    }
}

/// Lists the categories in menu order.
pub fn get_menu(menu: &MenuState) -> Result<MenuResponse, ApiError> {
    debug!("get_menu command");
    menu.with_phase(|phase| -> Result<_, ApiError> {
        Ok(MenuResponse::from(phase.ready()?))
    })
}

/// Switches category. Unknown ids are accepted and show nothing.
pub fn select_category(
    menu: &MenuState,
    category_id: &str,
) -> Result<VisibleItemsResponse, ApiError> {
    debug!(category_id = %category_id, "select_category command");
    menu.with_phase_mut(|phase| -> Result<_, ApiError> {
        let session = phase.ready_mut()?;
        session.select_category(category_id);
        Ok(VisibleItemsResponse::from(&*session))
    })
}

/// Replaces the search text within the active category.
pub fn set_query(menu: &MenuState, query: &str) -> Result<VisibleItemsResponse, ApiError> {
    debug!(query = %query, "set_query command");
    menu.with_phase_mut(|phase| -> Result<_, ApiError> {
        let session = phase.ready_mut()?;
        session.set_query(query);
        Ok(VisibleItemsResponse::from(&*session))
    })
}

pub fn get_visible_items(menu: &MenuState) -> Result<VisibleItemsResponse, ApiError> {
    debug!("get_visible_items command");
    menu.with_phase(|phase| -> Result<_, ApiError> {
        Ok(VisibleItemsResponse::from(phase.ready()?))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use thali_core::{Category, Menu, Money};

    fn state() -> MenuState {
        MenuState::ready(Menu::new(vec![
            Category::new(
                "1",
                "Pizza",
                vec![
                    Item::new("11", "Veg Pizza", Money::from_minor_units(19900)),
                    Item::new("12", "Cheese Garlic Bread", Money::from_minor_units(12000)),
                    Item::new("13", "Paneer Tikka", Money::from_minor_units(22900)),
                ],
            ),
            Category::new(
                "2",
                "Drinks",
                vec![Item::new("21", "Sweet Lassi", Money::from_minor_units(7900))],
            ),
        ]))
    }

    fn names(response: &VisibleItemsResponse) -> Vec<&str> {
        response.items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_get_menu_marks_first_category_active() {
        let response = get_menu(&state()).unwrap();
        assert_eq!(response.active_category_id.as_deref(), Some("1"));
        assert!(response.categories[0].active);
        assert!(!response.categories[1].active);
        assert_eq!(response.categories[0].item_count, 3);
    }

    #[test]
    fn test_initial_visible_items() {
        let response = get_visible_items(&state()).unwrap();
        assert_eq!(response.heading, "Pizza");
        assert_eq!(response.query, "");
        assert_eq!(response.items.len(), 3);
    }

    #[test]
    fn test_search_then_switch_category() {
        let menu = state();

        let response = set_query(&menu, "pan").unwrap();
        assert_eq!(names(&response), vec!["Paneer Tikka"]);

        let response = select_category(&menu, "2").unwrap();
        assert_eq!(response.query, "");
        assert_eq!(response.heading, "Drinks");
        assert_eq!(names(&response), vec!["Sweet Lassi"]);
    }

    #[test]
    fn test_unknown_category_shows_nothing() {
        let menu = state();
        let response = select_category(&menu, "99").unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.heading, DEFAULT_HEADING);

        let listing = get_menu(&menu).unwrap();
        assert!(listing.categories.iter().all(|c| !c.active));
    }

    #[test]
    fn test_commands_before_load() {
        let menu = MenuState::new();
        let err = get_visible_items(&menu).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuLoading);

        menu.install::<String>(Err("timeout".into()));
        let err = set_query(&menu, "pan").unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuUnavailable);
    }
}
