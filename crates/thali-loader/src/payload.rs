//! # Payload Decode
//!
//! The menu API wraps its real document in a string field, so decoding takes
//! two passes.
//!
//! ## Decode Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP status ── != 200 ──────────────────────► LoadError::Status        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  body bytes ── not a JSON object ────────────► LoadError::Envelope      │
//! │  { "data": "<string>" }                                                 │
//! │       │ ── data absent / null / "" / non-string ► LoadError::MissingData│
//! │       ▼                                                                 │
//! │  inner string ── not JSON / wrong shape ─────► LoadError::Payload       │
//! │  { "CategoryList": [ { "CategryId", "CategryName",                      │
//! │                        "ItemListWidget": [ { "ItemId", "ItemName",      │
//! │                                              "Price" } ] } ] }          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Menu (source order preserved)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wire spelling (`CategryId`, sic) stays confined to this module.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use thali_core::{Category, Item, Menu, Money};

use crate::error::{LoadError, LoadResult};

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireMenu {
    #[serde(rename = "CategoryList", default)]
    category_list: Option<Vec<WireCategory>>,
}

#[derive(Debug, Deserialize)]
struct WireCategory {
    #[serde(rename = "CategryId", deserialize_with = "wire_id")]
    id: String,

    #[serde(rename = "CategryName", default, deserialize_with = "wire_text")]
    name: String,

    #[serde(rename = "ItemListWidget", default)]
    items: Option<Vec<WireItem>>,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    #[serde(rename = "ItemId", deserialize_with = "wire_id")]
    id: String,

    #[serde(rename = "ItemName", default, deserialize_with = "wire_text")]
    name: String,

    #[serde(rename = "Price", default)]
    price: Option<Value>,
}

/// Ids arrive as strings from some shops and numbers from others.
fn wire_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number id, found {}",
            json_kind(&other)
        ))),
    }
}

/// Names tolerate null; anything scalar is rendered as text.
fn wire_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Wire → Domain
// =============================================================================

impl WireCategory {
    fn into_domain(self) -> Category {
        let category_id = self.id;
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.into_domain(&category_id))
            .collect();
        Category {
            id: category_id,
            name: self.name,
            items,
        }
    }
}

impl WireItem {
    fn into_domain(self, category_id: &str) -> Item {
        let price = match decode_price(self.price.as_ref()) {
            Some(price) => price,
            None => {
                warn!(
                    category_id,
                    item_id = %self.id,
                    raw = ?self.price,
                    "Item price is not numeric, showing zero"
                );
                Money::zero()
            }
        };
        Item::new(self.id, self.name, price)
    }
}

/// Numbers and numeric strings become money; everything else is `None`.
fn decode_price(raw: Option<&Value>) -> Option<Money> {
    match raw? {
        Value::Number(n) => Money::parse_decimal(&n.to_string()),
        Value::String(s) => Money::parse_decimal(s.trim()),
        _ => None,
    }
}

// =============================================================================
// Decode Stages
// =============================================================================

/// Stage 1: extracts the `data` string from the response envelope.
pub fn decode_envelope(body: &[u8]) -> LoadResult<String> {
    let envelope: Value =
        serde_json::from_slice(body).map_err(|e| LoadError::Envelope(e.to_string()))?;

    let fields = envelope.as_object().ok_or_else(|| {
        LoadError::Envelope(format!(
            "expected a JSON object, found {}",
            json_kind(&envelope)
        ))
    })?;

    match fields.get("data") {
        Some(Value::String(data)) if !data.is_empty() => Ok(data.clone()),
        _ => Err(LoadError::MissingData),
    }
}

/// Stage 2: decodes the inner document into a menu.
pub fn decode_menu(inner: &str) -> LoadResult<Menu> {
    let wire: WireMenu = serde_json::from_str(inner)?;
    let categories = wire
        .category_list
        .unwrap_or_default()
        .into_iter()
        .map(WireCategory::into_domain)
        .collect::<Vec<_>>();
    Ok(Menu::new(categories))
}

/// Status check plus both decode stages.
pub fn decode_response(status: u16, body: &[u8]) -> LoadResult<Menu> {
    if status != 200 {
        return Err(LoadError::Status { status });
    }
    let inner = decode_envelope(body)?;
    decode_menu(&inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(inner: &Value) -> Vec<u8> {
        json!({ "data": inner.to_string() }).to_string().into_bytes()
    }

    fn sample_inner() -> Value {
        json!({
            "CategoryList": [
                {
                    "CategryId": 101,
                    "CategryName": "Pizza",
                    "ItemListWidget": [
                        { "ItemId": 1, "ItemName": "Veg Pizza", "Price": 199 },
                        { "ItemId": "2", "ItemName": "Cheese Garlic Bread", "Price": "120.5" }
                    ]
                },
                { "CategryId": "102", "CategryName": "Drinks", "ItemListWidget": null }
            ]
        })
    }

    #[test]
    fn test_decode_response_success() {
        let menu = decode_response(200, &envelope(&sample_inner())).unwrap();

        assert_eq!(menu.len(), 2);
        let pizza = &menu.categories()[0];
        assert_eq!(pizza.id, "101");
        assert_eq!(pizza.name, "Pizza");
        assert_eq!(pizza.items[0].id, "1");
        assert_eq!(pizza.items[0].price, Money::from_minor_units(19900));
        assert_eq!(pizza.items[1].price, Money::from_minor_units(12050));

        let drinks = &menu.categories()[1];
        assert_eq!(drinks.id, "102");
        assert!(drinks.items.is_empty());
    }

    #[test]
    fn test_non_200_status() {
        let err = decode_response(500, &envelope(&sample_inner())).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500 }));

        // Only exactly 200 counts as success.
        let err = decode_response(204, b"").unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 204 }));
    }

    #[test]
    fn test_envelope_not_json() {
        let err = decode_envelope(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LoadError::Envelope(_)));

        let err = decode_envelope(b"[1, 2]").unwrap_err();
        assert!(matches!(err, LoadError::Envelope(ref msg) if msg.contains("an array")));
    }

    #[test]
    fn test_missing_data() {
        for body in [
            r#"{}"#,
            r#"{"data": null}"#,
            r#"{"data": ""}"#,
            r#"{"data": {"CategoryList": []}}"#,
        ] {
            let err = decode_envelope(body.as_bytes()).unwrap_err();
            assert!(matches!(err, LoadError::MissingData), "body: {body}");
        }
    }

    #[test]
    fn test_unparsable_inner_string() {
        let body = json!({ "data": "not json at all" }).to_string();
        let err = decode_response(200, body.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Payload(_)));
    }

    #[test]
    fn test_absent_or_null_category_list_is_empty_menu() {
        assert!(decode_menu("{}").unwrap().is_empty());
        assert!(decode_menu(r#"{"CategoryList": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_payload_error() {
        let err = decode_menu(r#"{"CategoryList": "soon"}"#).unwrap_err();
        assert!(err.is_payload());

        // Category ids are required.
        let err = decode_menu(r#"{"CategoryList": [{"CategryName": "Pizza"}]}"#).unwrap_err();
        assert!(err.is_payload());

        let err = decode_menu(r#"{"CategoryList": [{"CategryId": true}]}"#).unwrap_err();
        assert!(matches!(err, LoadError::Payload(ref msg) if msg.contains("a boolean")));
    }

    #[test]
    fn test_lenient_names_and_prices() {
        let menu = decode_menu(
            r#"{"CategoryList": [{
                "CategryId": 1,
                "CategryName": null,
                "Unused": "ignored",
                "ItemListWidget": [
                    { "ItemId": 9 },
                    { "ItemId": 10, "ItemName": "Lassi", "Price": "on request" },
                    { "ItemId": 11, "ItemName": "Chaas", "Price": 49.999 }
                ]
            }]}"#,
        )
        .unwrap();

        let category = &menu.categories()[0];
        assert_eq!(category.name, "");
        assert_eq!(category.items[0].name, "");
        assert_eq!(category.items[0].price, Money::zero());
        assert_eq!(category.items[1].price, Money::zero());
        assert_eq!(category.items[2].price, Money::from_minor_units(5000));
    }

    #[test]
    fn test_order_preserved() {
        let inner = json!({
            "CategoryList": [
                { "CategryId": "c", "CategryName": "Third" },
                { "CategryId": "a", "CategryName": "First" },
                { "CategryId": "b", "CategryName": "Second" }
            ]
        });
        let menu = decode_response(200, &envelope(&inner)).unwrap();
        let ids: Vec<_> = menu.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
