//! Request bodies.

use plant_commerce::prelude::*;
use serde::Serialize;

/// Body of `POST /products`.
///
/// The server owns comments, sales, discount and old price, so a created
/// product carries only the fields the admin form edits.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: ProductCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub describe: Option<String>,
    pub images: Vec<String>,
}

impl From<&Product> for NewProduct {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            category: p.category.clone(),
            common_name: p.common_name.clone(),
            scientific_name: p.scientific_name.clone(),
            plant_family: p.plant_family.clone(),
            height: p.height.clone(),
            origin: p.origin.clone(),
            description: p.description.clone(),
            describe: p.describe.clone(),
            images: p.images.clone(),
        }
    }
}
