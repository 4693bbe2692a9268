//! Admin product table controller.

use std::sync::Arc;

use plant_commerce::prelude::*;
use plant_commerce::search::matches_name;
use plant_data::StoreApi;
use plant_observability::FetchTimer;
use tracing::{debug, info, warn};

use crate::error::ViewError;
use crate::form::{FormError, ProductForm};
use crate::messages::{Locale, Message};
use crate::ports::{BusyGuard, Ports};

/// Rows per admin table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One row of the admin table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow<'a> {
    /// 1-based row number across pages.
    pub index: usize,
    pub product: &'a Product,
    pub units_sold: u64,
    /// Category levels that are present, parent first.
    pub tags: Vec<&'a str>,
}

/// State and operations of the admin product screen.
///
/// Holds the full product list, the search-filtered copy, the orders used
/// for units sold, and the category tree for the form. Remote mutations go
/// first; local lists change only after the backend accepted them.
pub struct ProductManager<A> {
    api: A,
    ports: Ports,
    locale: Locale,
    products: Vec<Product>,
    filtered: Vec<Product>,
    orders: Vec<Order>,
    sales: SalesIndex,
    categories: Vec<Category>,
    query: String,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
}

impl<A: StoreApi> ProductManager<A> {
    pub fn new(api: A, ports: Ports) -> Self {
        Self {
            api,
            ports,
            locale: Locale::default(),
            products: Vec::new(),
            filtered: Vec::new(),
            orders: Vec::new(),
            sales: SalesIndex::default(),
            categories: Vec::new(),
            query: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set rows per page (at least 1).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Fetch products, orders and categories.
    ///
    /// Products and orders are committed together or not at all. Categories
    /// are independent: their failure is reported separately and does not
    /// fail this call.
    pub async fn load_all(&mut self) -> Result<(), ViewError> {
        let busy = Arc::clone(&self.ports.busy);
        let _busy = BusyGuard::raise(busy.as_ref());

        let timer = FetchTimer::start("GET /products + /orders");
        let (products, orders, categories) = futures::join!(
            self.api.list_products(),
            self.api.list_orders(),
            self.api.list_categories()
        );

        let loaded = match (products, orders) {
            (Ok(products), Ok(orders)) => {
                timer.finish(true);
                info!(
                    products = products.len(),
                    orders = orders.len(),
                    "admin catalog loaded"
                );
                self.sales = SalesIndex::from_orders(&orders);
                self.products = products;
                self.orders = orders;
                self.refilter();
                self.set_page(self.page);
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => {
                timer.finish(false);
                warn!(error = %err, "failed to load products or orders");
                self.notify_error(Message::ProductsLoadFailed);
                Err(ViewError::from(err))
            }
        };

        match categories {
            Ok(categories) => {
                debug!(categories = categories.len(), "categories loaded");
                self.categories = categories;
            }
            Err(err) => {
                warn!(error = %err, "failed to load categories");
                self.notify_error(Message::CategoriesLoadFailed);
            }
        }

        loaded
    }

    /// Fetch only the category tree.
    pub async fn load_categories(&mut self) -> Result<(), ViewError> {
        match self.api.list_categories().await {
            Ok(categories) => {
                self.categories = categories;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load categories");
                self.notify_error(Message::CategoriesLoadFailed);
                Err(err.into())
            }
        }
    }

    /// Filter by name (case-insensitive substring) and go back to page 1.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
        self.page = 1;
        debug!(query, matches = self.filtered.len(), "search applied");
    }

    fn refilter(&mut self) {
        self.filtered = search_by_name(&self.products, &self.query);
    }

    /// Create or update a product from the form.
    ///
    /// With `editing`, the form is merged onto that product (keeping its
    /// comments, sales, discount and old price) and sent as a replace.
    /// Without, a clock-derived id is assigned and the product is created.
    pub async fn save(
        &mut self,
        form: &ProductForm,
        editing: Option<&ProductId>,
    ) -> Result<Product, ViewError> {
        if let Err(err) = form.validate_against(&self.categories) {
            debug!(error = %err, "product form rejected");
            let message = match err {
                FormError::UnknownCategory(_) => Message::UnknownCategory,
                FormError::MissingFields(_) | FormError::InvalidPrice(_) => Message::FormIncomplete,
            };
            self.notify_error(message);
            return Err(err.into());
        }

        match editing {
            Some(id) => self.update(form, id).await,
            None => self.create(form).await,
        }
    }

    async fn update(&mut self, form: &ProductForm, id: &ProductId) -> Result<Product, ViewError> {
        let Some(existing) = self.products.iter().find(|p| &p.id == id) else {
            warn!(product_id = %id, "edited product is not loaded");
            self.notify_error(Message::ProductSaveFailed);
            return Err(ViewError::UnknownProduct(id.to_string()));
        };
        let merged = form.apply_to(existing)?;

        if let Err(err) = self.api.update_product(&merged).await {
            warn!(product_id = %id, error = %err, "failed to update product");
            self.notify_error(Message::ProductSaveFailed);
            return Err(err.into());
        }

        for list in [&mut self.products, &mut self.filtered] {
            if let Some(slot) = list.iter_mut().find(|p| &p.id == id) {
                *slot = merged.clone();
            }
        }
        info!(product_id = %id, "product updated");
        self.notify_success(Message::ProductUpdated);
        Ok(merged)
    }

    async fn create(&mut self, form: &ProductForm) -> Result<Product, ViewError> {
        let body = form.to_new_product(ProductId::from_clock())?;

        let created = match self.api.create_product(&body).await {
            Ok(created) => created,
            Err(err) => {
                warn!(product_id = %body.id, error = %err, "failed to create product");
                self.notify_error(Message::ProductSaveFailed);
                return Err(err.into());
            }
        };

        if matches_name(&created, &self.query) {
            self.filtered.push(created.clone());
        }
        self.products.push(created.clone());
        info!(product_id = %created.id, "product created");
        self.notify_success(Message::ProductCreated);
        Ok(created)
    }

    /// Delete a product remotely, then locally.
    pub async fn remove(&mut self, id: &ProductId) -> Result<(), ViewError> {
        if let Err(err) = self.api.delete_product(id).await {
            warn!(product_id = %id, error = %err, "failed to delete product");
            self.notify_error(Message::ProductDeleteFailed);
            return Err(err.into());
        }

        self.products.retain(|p| &p.id != id);
        self.filtered.retain(|p| &p.id != id);
        self.set_page(self.page);
        info!(product_id = %id, "product deleted");
        self.notify_success(Message::ProductDeleted);
        Ok(())
    }

    /// Units of `id` sold across the loaded orders.
    pub fn units_sold(&self, id: &ProductId) -> u64 {
        units_sold(id, &self.orders)
    }

    /// Order the table by a column, or restore server order with `None`.
    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Go to page `page`, clamped to `[1, page_count]`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of table pages, never below 1.
    pub fn page_count(&self) -> usize {
        self.pagination().total_pages
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.filtered.len())
    }

    /// The current page of the filtered list, in display order.
    pub fn rows(&self) -> Vec<ProductRow<'_>> {
        let mut ordered: Vec<&Product> = self.filtered.iter().collect();
        if let Some(spec) = self.sort {
            ordered.sort_by(|a, b| spec.compare(a, b, &self.sales));
        }

        let pagination = self.pagination();
        pagination
            .slice(&ordered)
            .iter()
            .enumerate()
            .map(|(offset, &product)| ProductRow {
                index: pagination.row_number(offset),
                product,
                units_sold: self.sales.get(&product.id),
                tags: Self::category_tags(product),
            })
            .collect()
    }

    /// Category tags for the table; an absent child level yields no tag.
    pub fn category_tags(product: &Product) -> Vec<&str> {
        product.category.levels().collect()
    }

    /// The form for editing `product`, or an empty form for a new one.
    pub fn open_editor(&self, product: Option<&Product>) -> ProductForm {
        product.map_or_else(ProductForm::new, ProductForm::from_product)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    fn notify_error(&self, message: Message) {
        self.ports.notifier.error(message.text(self.locale));
    }

    fn notify_success(&self, message: Message) {
        self.ports.notifier.success(message.text(self.locale));
    }
}
