//! # Validation Module
//!
//! Integrity checks over a decoded menu.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  Layer 1: Payload decode (thali-loader)                                │
//! │  ├── Envelope shape, inner JSON, required ids                          │
//! │  └── Failure here = LoadError, menu never installed                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Duplicate ids, blank ids and names                                │
//! │  └── Findings are reported, never fatal                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The menu source is trusted to be mostly right. A duplicated category id
//! makes the second category unreachable by selection, which is worth a log
//! line but not worth refusing the whole menu.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Category, Menu};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Collects every integrity issue in `menu`, in menu order.
///
/// ## Example
/// ```rust
/// use thali_core::{Category, Menu};
/// use thali_core::validation::audit_menu;
///
/// let menu = Menu::new(vec![
///     Category::new("1", "Pizza", vec![]),
///     Category::new("1", "Pasta", vec![]),
/// ]);
/// assert_eq!(audit_menu(&menu).len(), 1);
/// ```
pub fn audit_menu(menu: &Menu) -> Vec<ValidationError> {
    let mut issues = Vec::new();
    let mut seen_categories = HashSet::new();

    for category in menu.categories() {
        if !seen_categories.insert(category.id.as_str()) {
            issues.push(ValidationError::Duplicate {
                field: "category id".to_string(),
                value: category.id.clone(),
            });
        }
        issues.extend(validate_id("category id", &category.id).err());
        issues.extend(validate_name("category name", &category.name).err());
        audit_category(category, &mut issues);
    }

    issues
}

fn audit_category(category: &Category, issues: &mut Vec<ValidationError>) {
    let mut seen_items = HashSet::new();

    for item in &category.items {
        if !seen_items.insert(item.id.as_str()) {
            issues.push(ValidationError::Duplicate {
                field: format!("item id in category {}", category.id),
                value: item.id.clone(),
            });
        }
        issues.extend(validate_id("item id", &item.id).err());
        issues.extend(validate_name("item name", &item.name).err());
    }
}

/// A display name must contain something other than whitespace.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// An identifier must be non-blank.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}
