//! In-memory `StoreApi` for controller tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use plant_commerce::prelude::*;
use plant_data::{FetchError, NewProduct, StoreApi};

#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    products: Mutex<Vec<Product>>,
    orders: Mutex<Vec<Order>>,
    categories: Mutex<Vec<Category>>,
    failing: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeStore {
    pub(crate) fn with_products(self, products: Vec<Product>) -> Self {
        self.set_products(products);
        self
    }

    pub(crate) fn with_orders(self, orders: Vec<Order>) -> Self {
        *self.orders.lock().unwrap() = orders;
        self
    }

    pub(crate) fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().unwrap() = categories;
        self
    }

    pub(crate) fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = products;
    }

    pub(crate) fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    /// Make every later call to `operation` answer with HTTP 500.
    pub(crate) fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub(crate) fn was_called(&self, operation: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| *c == operation)
    }

    fn enter(&self, operation: &'static str) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(operation);
        if self.failing.lock().unwrap().contains(operation) {
            return Err(FetchError::Status {
                status: 500,
                url: format!("fake://{operation}"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StoreApi for FakeStore {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.enter("list_products")?;
        Ok(self.products())
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.enter("get_product")?;
        self.products()
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: format!("fake://products/{id}"),
            })
    }

    async fn create_product(&self, body: &NewProduct) -> Result<Product, FetchError> {
        self.enter("create_product")?;
        let product = Product {
            id: body.id.clone(),
            name: body.name.clone(),
            price: body.price,
            category: body.category.clone(),
            common_name: body.common_name.clone(),
            scientific_name: body.scientific_name.clone(),
            plant_family: body.plant_family.clone(),
            height: body.height.clone(),
            origin: body.origin.clone(),
            description: body.description.clone(),
            describe: body.describe.clone(),
            images: body.images.clone(),
            ..Product::default()
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: &Product) -> Result<Product, FetchError> {
        self.enter("update_product")?;
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product.clone())
            }
            None => Err(FetchError::Status {
                status: 404,
                url: format!("fake://products/{}", product.id),
            }),
        }
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), FetchError> {
        self.enter("delete_product")?;
        self.products.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        self.enter("list_orders")?;
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.enter("list_categories")?;
        Ok(self.categories.lock().unwrap().clone())
    }
}
