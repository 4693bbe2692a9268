//! REST client for the plant storefront backend.
//!
//! The view controllers talk to the backend through the [`StoreApi`] trait so
//! they can be driven by a fake in tests. [`StoreClient`] is the production
//! implementation over `reqwest`.
//!
//! | Path | GET | POST | PUT | DELETE |
//! |---|---|---|---|---|
//! | `/products` | list | create | | |
//! | `/products/{id}` | fetch | | replace | remove |
//! | `/orders` | list | | | |
//! | `/categories` | list | | | |
//!
//! # Example
//!
//! ```rust,ignore
//! use plant_data::{StoreApi, StoreClient};
//!
//! let client = StoreClient::with_base_url("http://localhost:3000", 10)?;
//! let products = client.list_products().await?;
//! ```

mod client;
mod error;
mod request;

use std::sync::Arc;

use async_trait::async_trait;
use plant_commerce::prelude::*;

pub use client::{StoreClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use request::NewProduct;

/// The backend collections consumed by the storefront views.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: &ProductId) -> Result<Product, FetchError>;

    /// `POST /products`, returning the stored product.
    async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError>;

    /// `PUT /products/{id}` with the full merged product.
    async fn update_product(&self, product: &Product) -> Result<Product, FetchError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &ProductId) -> Result<(), FetchError>;

    /// `GET /orders`
    async fn list_orders(&self) -> Result<Vec<Order>, FetchError>;

    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;
}

#[async_trait]
impl<T: StoreApi + ?Sized> StoreApi for Arc<T> {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).list_products().await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        (**self).get_product(id).await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError> {
        (**self).create_product(product).await
    }

    async fn update_product(&self, product: &Product) -> Result<Product, FetchError> {
        (**self).update_product(product).await
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), FetchError> {
        (**self).delete_product(id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        (**self).list_orders().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        (**self).list_categories().await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, NewProduct, StoreApi, StoreClient};
}
