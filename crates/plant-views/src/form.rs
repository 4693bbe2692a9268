//! The admin product form.

use std::fmt;

use plant_commerce::prelude::*;
use plant_data::NewProduct;
use thiserror::Error;

use crate::messages::Locale;

/// A field of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Price,
    Category,
    ScientificName,
    PlantFamily,
    Height,
    Origin,
    Description,
}

impl FormField {
    /// Fields that must be non-empty before anything is sent.
    pub const REQUIRED: [FormField; 8] = [
        FormField::Name,
        FormField::Price,
        FormField::Category,
        FormField::ScientificName,
        FormField::PlantFamily,
        FormField::Height,
        FormField::Origin,
        FormField::Description,
    ];

    /// Field label as shown on the form.
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (FormField::Name, Locale::Vi) => "Tên sản phẩm",
            (FormField::Price, Locale::Vi) => "Giá",
            (FormField::Category, Locale::Vi) => "Danh mục",
            (FormField::ScientificName, Locale::Vi) => "Tên khoa học",
            (FormField::PlantFamily, Locale::Vi) => "Họ thực vật",
            (FormField::Height, Locale::Vi) => "Chiều cao",
            (FormField::Origin, Locale::Vi) => "Nguồn gốc",
            (FormField::Description, Locale::Vi) => "Mô tả",
            (FormField::Name, Locale::En) => "Name",
            (FormField::Price, Locale::En) => "Price",
            (FormField::Category, Locale::En) => "Category",
            (FormField::ScientificName, Locale::En) => "Scientific name",
            (FormField::PlantFamily, Locale::En) => "Plant family",
            (FormField::Height, Locale::En) => "Height",
            (FormField::Origin, Locale::En) => "Origin",
            (FormField::Description, Locale::En) => "Description",
        }
    }

    /// The "must not be empty" hint shown under the field.
    pub fn required_message(self, locale: Locale) -> String {
        match locale {
            Locale::Vi => format!("{} không được để trống", self.label(locale)),
            Locale::En => format!("{} must not be empty", self.label(locale)),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// Form validation failure. No request is sent while one of these stands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required fields are empty: {}", list(.0))]
    MissingFields(Vec<FormField>),

    #[error("price is not a whole number of VND: {0:?}")]
    InvalidPrice(String),

    #[error("category is not in the category tree: {0}")]
    UnknownCategory(String),
}

impl FormError {
    /// Empty required fields, in form order.
    pub fn missing(&self) -> &[FormField] {
        match self {
            FormError::MissingFields(fields) => fields,
            FormError::InvalidPrice(_) | FormError::UnknownCategory(_) => &[],
        }
    }
}

fn list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw form state. Text fields hold what was typed; `price` is parsed on
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: CategorySelection,
    pub common_name: String,
    pub scientific_name: String,
    pub plant_family: String,
    pub height: String,
    pub origin: String,
    pub description: String,
    pub describe: String,
    pub images: Vec<String>,
}

impl ProductForm {
    /// An empty form for creating a product.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing product.
    ///
    /// The category selector gets `lv1` only when the product has one.
    pub fn from_product(product: &Product) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            name: product.name.clone(),
            price: product.price.amount().to_string(),
            category: CategorySelection::from_product(&product.category),
            common_name: text(&product.common_name),
            scientific_name: text(&product.scientific_name),
            plant_family: text(&product.plant_family),
            height: text(&product.height),
            origin: text(&product.origin),
            description: text(&product.description),
            describe: text(&product.describe),
            images: product.images.clone(),
        }
    }

    fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category.lv0,
            FormField::ScientificName => &self.scientific_name,
            FormField::PlantFamily => &self.plant_family,
            FormField::Height => &self.height,
            FormField::Origin => &self.origin,
            FormField::Description => &self.description,
        }
    }

    /// Check every required field and parse the price.
    pub fn validate(&self) -> Result<Price, FormError> {
        let missing: Vec<FormField> = FormField::REQUIRED
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        match Price::parse(&self.price) {
            Some(price) if !price.is_negative() => Ok(price),
            _ => Err(FormError::InvalidPrice(self.price.trim().to_string())),
        }
    }

    /// [`validate`](Self::validate), then require the selected category to
    /// exist in `categories`. An empty tree (not loaded) constrains nothing.
    pub fn validate_against(&self, categories: &[Category]) -> Result<Price, FormError> {
        let price = self.validate()?;
        if !categories.is_empty() && !self.category.is_valid_for(categories) {
            let levels: Vec<&str> = [Some(self.category.lv0.as_str()), self.category.lv1.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            return Err(FormError::UnknownCategory(levels.join(" / ")));
        }
        Ok(price)
    }

    /// Merge the editable fields onto `existing`.
    ///
    /// Id, comments, sales, discount, old price and rating come from
    /// `existing` unchanged.
    pub fn apply_to(&self, existing: &Product) -> Result<Product, FormError> {
        let price = self.validate()?;
        let mut product = existing.clone();
        product.name = self.name.trim().to_string();
        product.price = price;
        product.category = self.category.to_product_category();
        product.common_name = non_empty(&self.common_name);
        product.scientific_name = non_empty(&self.scientific_name);
        product.plant_family = non_empty(&self.plant_family);
        product.height = non_empty(&self.height);
        product.origin = non_empty(&self.origin);
        product.description = non_empty(&self.description);
        product.describe = non_empty(&self.describe);
        product.images = self.images.clone();
        Ok(product)
    }

    /// Build the create body under `id`.
    pub fn to_new_product(&self, id: ProductId) -> Result<NewProduct, FormError> {
        let product = self.apply_to(&Product {
            id,
            ..Product::default()
        })?;
        Ok(NewProduct::from(&product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        form.name = "Fern".into();
        form.price = "45.000".into();
        form.category.select_lv0("Indoor");
        form.scientific_name = "Nephrolepis exaltata".into();
        form.plant_family = "Nephrolepidaceae".into();
        form.height = "40cm".into();
        form.origin = "Tropics".into();
        form.description = "Loves humidity".into();
        form
    }

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let err = ProductForm::new().validate().unwrap_err();
        assert_eq!(err.missing(), &FormField::REQUIRED);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.origin = "   ".into();
        assert_eq!(
            form.validate(),
            Err(FormError::MissingFields(vec![FormField::Origin]))
        );
    }

    #[test]
    fn test_price_must_be_a_number() {
        let mut form = filled();
        form.price = "cheap".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidPrice(_))));
        form.price = "-5".into();
        assert!(matches!(form.validate(), Err(FormError::InvalidPrice(_))));
        form.price = "45.000".into();
        assert_eq!(form.validate(), Ok(Price::new(45_000)));
    }

    #[test]
    fn test_category_must_exist_in_tree() {
        let tree = vec![Category::new("Indoor", vec!["Fern".into()])];
        let mut form = filled();
        assert_eq!(form.validate_against(&tree), Ok(Price::new(45_000)));
        assert_eq!(form.validate_against(&[]), Ok(Price::new(45_000)));

        form.category.select_lv1("Cactus");
        assert_eq!(
            form.validate_against(&tree),
            Err(FormError::UnknownCategory("Indoor / Cactus".into()))
        );

        form.category.select_lv0("Outdoor");
        assert_eq!(
            form.validate_against(&tree),
            Err(FormError::UnknownCategory("Outdoor".into()))
        );
    }

    #[test]
    fn test_missing_fields_reported_before_category() {
        let tree = vec![Category::new("Indoor", vec![])];
        let mut form = filled();
        form.category.select_lv0("Nowhere");
        form.name.clear();
        assert_eq!(
            form.validate_against(&tree),
            Err(FormError::MissingFields(vec![FormField::Name]))
        );
    }

    #[test]
    fn test_required_message() {
        assert_eq!(
            FormField::Name.required_message(Locale::Vi),
            "Tên sản phẩm không được để trống"
        );
        assert_eq!(
            FormField::PlantFamily.required_message(Locale::En),
            "Plant family must not be empty"
        );
    }

    #[test]
    fn test_prefill_without_child_category() {
        let product = Product::new("1", "Fern", Price::new(45_000))
            .with_category(ProductCategory::new("Indoor", None));
        let form = ProductForm::from_product(&product);
        assert_eq!(form.category.lv0, "Indoor");
        assert_eq!(form.category.lv1, None);
        assert_eq!(form.price, "45000");
    }

    #[test]
    fn test_apply_preserves_server_owned_fields() {
        let mut existing = Product::new("9", "Old name", Price::new(1))
            .with_comment(Comment::new("c1", 4.0, "nice"));
        existing.sales = Some(7);
        existing.discount = Some(15.0);
        existing.old_price = Some(Price::new(60_000));

        let merged = filled().apply_to(&existing).unwrap();
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.name, "Fern");
        assert_eq!(merged.price, Price::new(45_000));
        assert_eq!(merged.comments, existing.comments);
        assert_eq!(merged.sales, Some(7));
        assert_eq!(merged.discount, Some(15.0));
        assert_eq!(merged.old_price, Some(Price::new(60_000)));
        assert_eq!(merged.category.primary(), Some("Indoor"));
    }

    #[test]
    fn test_new_product_body() {
        let body = filled().to_new_product(ProductId::new("123")).unwrap();
        assert_eq!(body.id.as_str(), "123");
        assert_eq!(body.name, "Fern");
        assert_eq!(body.common_name, None);
    }
}
