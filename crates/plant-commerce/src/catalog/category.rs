//! Category types for product organization.
//!
//! The catalog uses a fixed two-level hierarchy: a parent level (`lv0`, e.g.
//! "Indoor") and an optional child level (`lv1`, e.g. "Succulents").

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// The category levels assigned to a single product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductCategory {
    /// Parent level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv0: Option<String>,
    /// Child level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv1: Option<String>,
}

impl ProductCategory {
    /// Create a category with both levels.
    pub fn new(lv0: impl Into<String>, lv1: Option<String>) -> Self {
        Self {
            lv0: Some(lv0.into()),
            lv1,
        }
    }

    /// The parent level, if present and non-empty.
    pub fn primary(&self) -> Option<&str> {
        self.lv0.as_deref().filter(|s| !s.is_empty())
    }

    /// The child level, if present and non-empty.
    pub fn secondary(&self) -> Option<&str> {
        self.lv1.as_deref().filter(|s| !s.is_empty())
    }

    /// Present, non-empty levels in `lv0`, `lv1` order.
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.primary().into_iter().chain(self.secondary())
    }

    /// Whether any level of `self` equals any level of `other`.
    ///
    /// Absent or empty levels never match, so the relation is symmetric and
    /// two uncategorized products are not related.
    pub fn shares_level_with(&self, other: &ProductCategory) -> bool {
        self.levels().any(|mine| other.levels().any(|theirs| mine == theirs))
    }
}

/// A category from the `/categories` collection: a parent with its children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Category {
    /// Category identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CategoryId>,
    /// Parent level name.
    pub lv0: String,
    /// Child level names.
    #[serde(default)]
    pub lv1: Vec<String>,
}

impl Category {
    /// Create a parent category with the given children.
    pub fn new(lv0: impl Into<String>, children: Vec<String>) -> Self {
        Self {
            id: None,
            lv0: lv0.into(),
            lv1: children,
        }
    }

    /// Check if `name` is one of this category's children.
    pub fn has_child(&self, name: &str) -> bool {
        self.lv1.iter().any(|c| c == name)
    }
}

/// The state of the category selector in the product form.
///
/// `lv1` stays `None` until a child is chosen, so an edited product without a
/// child level never shows a placeholder secondary value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySelection {
    /// Selected parent level; empty when nothing is selected.
    pub lv0: String,
    /// Selected child level.
    pub lv1: Option<String>,
}

impl CategorySelection {
    /// Pre-select from an existing product's category.
    pub fn from_product(category: &ProductCategory) -> Self {
        Self {
            lv0: category.primary().unwrap_or_default().to_string(),
            lv1: category.secondary().map(str::to_string),
        }
    }

    /// Choose a parent level. Any previously chosen child is cleared.
    pub fn select_lv0(&mut self, lv0: impl Into<String>) {
        self.lv0 = lv0.into();
        self.lv1 = None;
    }

    /// Choose a child level.
    pub fn select_lv1(&mut self, lv1: impl Into<String>) {
        self.lv1 = Some(lv1.into());
    }

    /// True when no parent level has been chosen.
    pub fn is_empty(&self) -> bool {
        self.lv0.trim().is_empty()
    }

    /// Check the selection against the known category tree.
    pub fn is_valid_for(&self, categories: &[Category]) -> bool {
        categories.iter().any(|c| {
            c.lv0 == self.lv0
                && self
                    .lv1
                    .as_deref()
                    .map_or(true, |child| c.has_child(child))
        })
    }

    /// Convert into the category stored on a product.
    pub fn to_product_category(&self) -> ProductCategory {
        ProductCategory {
            lv0: Some(self.lv0.clone()).filter(|s| !s.is_empty()),
            lv1: self.lv1.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(lv0: Option<&str>, lv1: Option<&str>) -> ProductCategory {
        ProductCategory {
            lv0: lv0.map(String::from),
            lv1: lv1.map(String::from),
        }
    }

    #[test]
    fn test_shared_level_matches_across_levels() {
        let a = cat(Some("Indoor"), Some("Succulent"));
        let b = cat(Some("Succulent"), None);
        assert!(a.shares_level_with(&b));
        assert!(b.shares_level_with(&a));
    }

    #[test]
    fn test_absent_levels_never_match() {
        let empty = cat(None, None);
        assert!(!empty.shares_level_with(&empty));

        let blank = cat(Some(""), Some(""));
        assert!(!blank.shares_level_with(&cat(Some(""), None)));
    }

    #[test]
    fn test_relation_is_symmetric() {
        let samples = [
            cat(Some("Indoor"), None),
            cat(Some("Outdoor"), Some("Indoor")),
            cat(None, Some("Herb")),
            cat(Some("Herb"), Some("Outdoor")),
            cat(None, None),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a.shares_level_with(b), b.shares_level_with(a));
            }
        }
    }

    #[test]
    fn test_selection_without_child() {
        let sel = CategorySelection::from_product(&cat(Some("Indoor"), None));
        assert_eq!(sel.lv0, "Indoor");
        assert_eq!(sel.lv1, None);
        assert_eq!(sel.to_product_category().secondary(), None);
    }

    #[test]
    fn test_selecting_parent_clears_child() {
        let mut sel = CategorySelection::from_product(&cat(Some("Indoor"), Some("Fern")));
        sel.select_lv0("Outdoor");
        assert_eq!(sel.lv1, None);
    }

    #[test]
    fn test_selection_validity() {
        let tree = vec![Category::new("Indoor", vec!["Fern".into(), "Cactus".into()])];
        let mut sel = CategorySelection::default();
        sel.select_lv0("Indoor");
        assert!(sel.is_valid_for(&tree));
        sel.select_lv1("Cactus");
        assert!(sel.is_valid_for(&tree));
        sel.select_lv1("Orchid");
        assert!(!sel.is_valid_for(&tree));
    }
}
