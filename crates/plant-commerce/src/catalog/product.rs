//! Product types.

use crate::catalog::{derived_rating, Comment, ProductCategory};
use crate::ids::ProductId;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A plant in the catalog, as served by `/products`.
///
/// Every field except `id` tolerates being absent on the wire. `rating` is
/// recomputed from `comments` by the detail view and is not authoritative.
/// `comments`, `sales`, `discount` and `old_price` are owned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Current price.
    #[serde(default)]
    pub price: Price,
    /// Price before discount, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Category levels.
    #[serde(default)]
    pub category: ProductCategory,
    /// Common (vernacular) name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    /// Botanical name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Botanical family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_family: Option<String>,
    /// Mature height, free text (e.g. "30-40cm").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Origin, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Short description shown under the price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Long-form care notes shown in the information tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describe: Option<String>,
    /// Image references, first one is the cover.
    #[serde(default)]
    pub images: Vec<String>,
    /// Customer comments.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Derived rating.
    #[serde(default)]
    pub rating: f64,
    /// Server-maintained sales counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<u64>,
}

impl Product {
    /// Create a product with a name and price and nothing else.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Set the category levels.
    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = category;
        self
    }

    /// Append a comment.
    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Append an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    /// The cover image, if any.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Recompute `rating` from the embedded comments.
    pub fn refresh_rating(&mut self) {
        self.rating = derived_rating(&self.comments);
    }

    /// Whether `self` and `other` share a category level.
    pub fn is_related_to(&self, other: &Product) -> bool {
        self.category.shares_level_with(&other.category)
    }

    /// Check if the product shows a struck-through old price.
    pub fn is_on_sale(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}
