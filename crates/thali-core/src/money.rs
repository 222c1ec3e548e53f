//! # Money Module
//!
//! Provides the `Money` type for menu prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The menu API sends prices as JSON numbers: 120, 99.5, 149.99          │
//! │  Summed as floats: 0.1 + 0.2 = 0.30000000000000004  ❌                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paise)                              │
//! │    "149.99" ──parse_decimal──► 14999                                   │
//! │    The decimal TEXT is parsed; no f64 is ever involved                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use thali_core::money::Money;
//!
//! let price = Money::parse_decimal("149.99").unwrap();
//! assert_eq!(price.minor_units(), 14999);
//!
//! let total: Money = [price, Money::from_minor_units(1)].into_iter().sum();
//! assert_eq!(total.to_string(), "150.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Minor units per major unit (100 paise to the rupee).
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Where Money is Used
/// ```text
/// Wire "Price" ──parse_decimal──► Item.price ──► CartLine.price
///                                                     │
///                                                     ▼
///                                   CartTotals.total (sum over lines)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ```rust
    /// use thali_core::money::Money;
    ///
    /// let price = Money::from_minor_units(12050); // Rs. 120.50
    /// assert_eq!(price.major_part(), 120);
    /// assert_eq!(price.minor_part(), 50);
    /// ```
    #[inline]
    pub const fn from_minor_units(minor: i64) -> Self {
        Money(minor)
    }

    /// Parses a decimal string such as `"120"`, `"99.5"` or `"-3.25"`.
    ///
    /// Digits past the second fraction digit are rounded half up.
    /// Returns `None` for anything that is not a plain decimal number
    /// (exponents, stray characters, empty input, overflow).
    ///
    /// ```rust
    /// use thali_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("99.5").unwrap().minor_units(), 9950);
    /// assert_eq!(Money::parse_decimal("10.005").unwrap().minor_units(), 1001);
    /// assert!(Money::parse_decimal("1e3").is_none());
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Self> {
        let text = text.trim();
        let (negative, unsigned) = match text.as_bytes().first()? {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return None;
        }

        let mut major: i64 = 0;
        for digit in whole.bytes() {
            major = major
                .checked_mul(10)?
                .checked_add(i64::from(digit - b'0'))?;
        }

        let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = fraction_digits.next().unwrap_or(0);
        let hundredths = fraction_digits.next().unwrap_or(0);
        let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

        let minor = major
            .checked_mul(MINOR_PER_MAJOR)?
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))?;

        Some(Money(if negative { -minor } else { minor }))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion, truncated toward zero.
    #[inline]
    pub const fn major_part(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` without a currency symbol.
///
/// The browser's `ConfigState::format_currency` adds the symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major_part().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturates at the `i64` bounds; payload prices are not range checked.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
