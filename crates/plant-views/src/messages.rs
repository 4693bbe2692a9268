//! User-facing notices in Vietnamese and English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the notices. Vietnamese is the storefront's own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vi" | "vi-vn" => Ok(Locale::Vi),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// Every notice the controllers send through the notifier port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    ProductsLoadFailed,
    CategoriesLoadFailed,
    ProductSaveFailed,
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    ProductDeleteFailed,
    FormIncomplete,
    UnknownCategory,
    LoginRequired,
    ProductNotFound,
    AddedToCart,
    AddToCartFailed,
}

impl Message {
    /// The notice text in `locale`.
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Vi => self.vi(),
            Locale::En => self.en(),
        }
    }

    fn vi(self) -> &'static str {
        match self {
            Message::ProductsLoadFailed => "Không thể lấy danh sách sản phẩm.",
            Message::CategoriesLoadFailed => "Không thể lấy danh mục.",
            Message::ProductSaveFailed => "Không thể lưu sản phẩm.",
            Message::ProductCreated => "Thêm sản phẩm mới thành công.",
            Message::ProductUpdated => "Cập nhật sản phẩm thành công.",
            Message::ProductDeleted => "Xóa sản phẩm thành công.",
            Message::ProductDeleteFailed => "Không thể xóa sản phẩm.",
            Message::FormIncomplete => "Vui lòng điền đầy đủ thông tin sản phẩm.",
            Message::UnknownCategory => "Danh mục không tồn tại.",
            Message::LoginRequired => "Vui lòng đăng nhập để thêm sản phẩm vào giỏ hàng",
            Message::ProductNotFound => "Không tìm thấy sản phẩm",
            Message::AddedToCart => "Đã thêm sản phẩm vào giỏ hàng",
            Message::AddToCartFailed => "Không thể thêm sản phẩm vào giỏ hàng",
        }
    }

    fn en(self) -> &'static str {
        match self {
            Message::ProductsLoadFailed => "Could not load the product list.",
            Message::CategoriesLoadFailed => "Could not load categories.",
            Message::ProductSaveFailed => "Could not save the product.",
            Message::ProductCreated => "Product created.",
            Message::ProductUpdated => "Product updated.",
            Message::ProductDeleted => "Product deleted.",
            Message::ProductDeleteFailed => "Could not delete the product.",
            Message::FormIncomplete => "Please fill in every required field.",
            Message::UnknownCategory => "The selected category does not exist.",
            Message::LoginRequired => "Please login to add product to cart",
            Message::ProductNotFound => "Product not found",
            Message::AddedToCart => "Added to cart",
            Message::AddToCartFailed => "Could not add the product to the cart",
        }
    }
}
