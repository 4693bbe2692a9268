//! Column sorting for product tables.

use std::cmp::Ordering;

use crate::catalog::Product;
use crate::orders::SalesIndex;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Product name, collated.
    Name,
    /// Price, numeric.
    Price,
    /// Units sold across all orders, numeric.
    UnitsSold,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::UnitsSold => "sales",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "sales" | "units_sold" | "sold" => Some(SortKey::UnitsSold),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// A column plus a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on `key`.
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `key`.
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// Compare two products under this spec.
    pub fn compare(&self, a: &Product, b: &Product, sales: &SalesIndex) -> Ordering {
        let ord = match self.key {
            SortKey::Name => collate(&a.name, &b.name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::UnitsSold => sales.get(&a.id).cmp(&sales.get(&b.id)),
        };
        match self.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Base-letter key of a name: lowercased, canonically decomposed with the
/// combining marks dropped, and `đ` folded to `d`. "Ánh" and "anh" share a key.
pub fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'đ' { 'd' } else { c })
        .collect()
}

/// Human ordering for names: base letters first, then the accented text
/// case-insensitively, then the exact text.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}
