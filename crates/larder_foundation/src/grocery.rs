//! The grocery record.
//!
//! One tracked household item and its attributes. A grocery is created with
//! only a name; every other field takes a default until explicitly edited.
//! The name is the sole identity key, compared case-insensitively; there is
//! no surrogate id, so renames are deliberately unsupported.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category assigned to groceries that have not been categorized yet.
pub const DEFAULT_CATEGORY: &str = "OTHERS";

/// One tracked household item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grocery {
    /// Display name; identity key under case-insensitive comparison.
    pub name: String,
    /// Units currently in stock.
    pub amount: u32,
    /// Expiration date, if one has been set.
    pub expiration: Option<NaiveDate>,
    /// Upper-cased category label.
    pub category: String,
    /// Cost per unit.
    pub cost: Decimal,
    /// Low-stock alert threshold.
    pub threshold: u32,
    /// Free-text remark.
    pub remark: String,
    /// Key of the location this grocery is stored in, if any.
    pub location: Option<String>,
    /// Rating from 1 to 5, if rated.
    pub rating: Option<u8>,
    /// Free-text review, if written.
    pub review: Option<String>,
}

impl Grocery {
    /// Creates a grocery with the given name and default attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: 0,
            expiration: None,
            category: DEFAULT_CATEGORY.to_string(),
            cost: Decimal::ZERO,
            threshold: 0,
            remark: String::new(),
            location: None,
            rating: None,
            review: None,
        }
    }

    /// The lookup key for this grocery: its name lower-cased.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether `name` refers to this grocery (case-insensitive).
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Low stock: some units remain but no more than the threshold.
    #[must_use]
    pub const fn is_low(&self) -> bool {
        self.amount > 0 && self.amount <= self.threshold
    }

    /// Depleted: no units remain.
    #[must_use]
    pub const fn is_depleted(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for Grocery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, amount: {}", self.name, self.amount)?;
        match self.expiration {
            Some(date) => write!(f, ", expiration: {date}")?,
            None => write!(f, ", expiration: not set")?,
        }
        Ok(())
    }
}
