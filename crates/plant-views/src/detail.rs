//! Product detail page controller.

use std::sync::Arc;

use plant_commerce::prelude::*;
use plant_commerce::search::page_count;
use plant_data::StoreApi;
use plant_observability::FetchTimer;
use tracing::{debug, info, warn};

use crate::error::ViewError;
use crate::messages::{Locale, Message};
use crate::ports::{BusyGuard, Ports};

/// Related products shown per page.
pub const RELATED_PAGE_SIZE: usize = 4;

/// Window used to bound the related-page navigation buttons.
///
/// Differs from [`RELATED_PAGE_SIZE`]; the storefront has always paged this
/// way and both values are kept.
pub const RELATED_NAV_WINDOW: usize = 8;

/// Route the customer is sent to when add-to-cart needs a session.
pub const LOGIN_PATH: &str = "/login";

/// Ticket for one product load. A response is applied only if its ticket is
/// still the latest one issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub generation: u64,
    pub product_id: ProductId,
}

/// A labelled line of the product information tab. The last two lines
/// (origin and care notes) carry no label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: Option<&'static str>,
    pub value: String,
}

/// State and operations of one product page.
pub struct ProductDetail<A> {
    api: A,
    ports: Ports,
    locale: Locale,
    generation: u64,
    product: Option<Product>,
    quantity: u64,
    active_image: Option<String>,
    hovered_image: Option<String>,
    related: Vec<Product>,
    related_page: usize,
}

impl<A: StoreApi> ProductDetail<A> {
    pub fn new(api: A, ports: Ports) -> Self {
        Self {
            api,
            ports,
            locale: Locale::default(),
            generation: 0,
            product: None,
            quantity: 1,
            active_image: None,
            hovered_image: None,
            related: Vec::new(),
            related_page: 1,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Load `id`, then its related products against the product just
    /// loaded. Related products are not fetched when the load fails.
    pub async fn open(&mut self, id: &ProductId) -> Result<(), ViewError> {
        self.load(id).await?;
        self.load_related().await
    }

    /// Issue a ticket for loading `id`, superseding any earlier one.
    pub fn begin_load(&mut self, id: &ProductId) -> DetailRequest {
        self.generation += 1;
        DetailRequest {
            generation: self.generation,
            product_id: id.clone(),
        }
    }

    /// Whether `request` is the latest ticket.
    pub fn is_current(&self, request: &DetailRequest) -> bool {
        request.generation == self.generation
    }

    /// Fetch one product. Failures are logged only; the page keeps what it
    /// showed before.
    pub async fn load(&mut self, id: &ProductId) -> Result<(), ViewError> {
        let request = self.begin_load(id);
        let busy = Arc::clone(&self.ports.busy);
        let _busy = BusyGuard::raise(busy.as_ref());

        let timer = FetchTimer::start("GET /products/{id}");
        match self.api.get_product(id).await {
            Ok(product) => {
                timer.finish(true);
                self.apply_product(&request, product);
                Ok(())
            }
            Err(err) => {
                timer.finish(false);
                warn!(product_id = %id, error = %err, "failed to load product");
                Err(err.into())
            }
        }
    }

    /// Show a fetched product if `request` is still current.
    ///
    /// Sets the derived rating and points both the active and the hovered
    /// image at the first image. Returns `false` for a stale response.
    pub fn apply_product(&mut self, request: &DetailRequest, mut product: Product) -> bool {
        if !self.is_current(request) {
            debug!(
                product_id = %request.product_id,
                generation = request.generation,
                latest = self.generation,
                "discarding stale product response"
            );
            return false;
        }

        product.refresh_rating();
        if self.product.as_ref().map(|p| &p.id) != Some(&product.id) {
            self.related.clear();
            self.related_page = 1;
        }
        self.active_image = product.cover_image().map(str::to_string);
        self.hovered_image = self.active_image.clone();
        info!(product_id = %product.id, rating = product.rating, "product loaded");
        self.product = Some(product);
        true
    }

    /// Fetch the catalog and keep the products related to the loaded one.
    pub async fn load_related(&mut self) -> Result<(), ViewError> {
        let Some(product) = self.product.as_ref() else {
            debug!("no product loaded, skipping related products");
            return Err(ViewError::NoProduct);
        };
        let request = DetailRequest {
            generation: self.generation,
            product_id: product.id.clone(),
        };

        let busy = Arc::clone(&self.ports.busy);
        let _busy = BusyGuard::raise(busy.as_ref());

        let timer = FetchTimer::start("GET /products");
        match self.api.list_products().await {
            Ok(products) => {
                timer.finish(true);
                self.apply_related(&request, &products);
                Ok(())
            }
            Err(err) => {
                timer.finish(false);
                warn!(error = %err, "failed to load related products");
                Err(err.into())
            }
        }
    }

    /// Keep the products of `catalog` related to the product `request`
    /// was issued for. Returns `false` for a stale response.
    pub fn apply_related(&mut self, request: &DetailRequest, catalog: &[Product]) -> bool {
        let reference = match &self.product {
            Some(product) if self.is_current(request) && product.id == request.product_id => {
                product
            }
            _ => {
                debug!(
                    product_id = %request.product_id,
                    generation = request.generation,
                    "discarding stale related products"
                );
                return false;
            }
        };

        self.related = related_products(catalog, reference);
        debug!(product_id = %request.product_id, related = self.related.len(), "related products");
        true
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Derived rating of the loaded product, 0 before a load.
    pub fn rating(&self) -> f64 {
        self.product.as_ref().map_or(0.0, |p| p.rating)
    }

    pub fn comments(&self) -> &[Comment] {
        self.product
            .as_ref()
            .map(|p| p.comments.as_slice())
            .unwrap_or_default()
    }

    // Quantity stepper

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Step down, never below zero.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    /// Accept a typed quantity if it is a non-negative integer. Anything
    /// else leaves the quantity unchanged and returns `false`.
    pub fn enter_quantity(&mut self, text: &str) -> bool {
        match text.trim().parse::<u64>() {
            Ok(quantity) => {
                self.quantity = quantity;
                true
            }
            Err(_) => false,
        }
    }

    // Image gallery

    pub fn hover_image(&mut self, src: impl Into<String>) {
        self.hovered_image = Some(src.into());
    }

    pub fn leave_image(&mut self) {
        self.hovered_image = None;
    }

    pub fn select_image(&mut self, src: impl Into<String>) {
        self.active_image = Some(src.into());
    }

    pub fn active_image(&self) -> Option<&str> {
        self.active_image.as_deref()
    }

    /// The hovered image if any, else the active one.
    pub fn displayed_image(&self) -> Option<&str> {
        self.hovered_image.as_deref().or(self.active_image.as_deref())
    }

    // Related products

    pub fn related(&self) -> &[Product] {
        &self.related
    }

    /// The related products on the current page.
    pub fn related_slice(&self) -> &[Product] {
        window(&self.related, self.related_page, RELATED_PAGE_SIZE)
    }

    pub fn related_page(&self) -> usize {
        self.related_page
    }

    /// Last page reachable with the next button, at least 1.
    pub fn related_nav_bound(&self) -> usize {
        page_count(self.related.len(), RELATED_NAV_WINDOW).max(1)
    }

    pub fn can_go_next(&self) -> bool {
        self.related_page < self.related_nav_bound()
    }

    pub fn can_go_prev(&self) -> bool {
        self.related_page > 1
    }

    pub fn next_related_page(&mut self) {
        self.related_page = (self.related_page + 1).min(self.related_nav_bound());
    }

    pub fn prev_related_page(&mut self) {
        self.related_page = self.related_page.saturating_sub(1).max(1);
    }

    // Actions

    /// Put the current quantity of the loaded product in the cart.
    ///
    /// Without a session the customer is told to sign in and sent to
    /// [`LOGIN_PATH`]; the cart is not touched.
    pub fn add_to_cart(&self) -> Result<(), ViewError> {
        if !self.ports.auth.is_authenticated() {
            self.notify_error(Message::LoginRequired);
            self.ports.navigator.navigate(LOGIN_PATH);
            return Err(ViewError::LoginRequired);
        }

        let Some(product) = self.product.as_ref() else {
            self.notify_error(Message::ProductNotFound);
            return Err(ViewError::NoProduct);
        };

        match self.ports.cart.add_to_cart(product, self.quantity) {
            Ok(()) => {
                info!(product_id = %product.id, quantity = self.quantity, "added to cart");
                self.ports
                    .notifier
                    .success(Message::AddedToCart.text(self.locale));
                Ok(())
            }
            Err(err) => {
                warn!(product_id = %product.id, error = %err, "cart rejected item");
                self.notify_error(Message::AddToCartFailed);
                Err(err.into())
            }
        }
    }

    /// Link for the share button: `{origin}/products/{id}`.
    pub fn share_url(&self, origin: &str) -> Option<String> {
        self.product
            .as_ref()
            .map(|p| format!("{}/products/{}", origin.trim_end_matches('/'), p.id))
    }

    /// Lines of the product information tab.
    pub fn info_rows(&self) -> Vec<InfoRow> {
        let Some(product) = self.product.as_ref() else {
            return Vec::new();
        };
        let labels = match self.locale {
            Locale::Vi => ["Tên phổ thông", "Tên khoa học", "Họ thực vật", "Chiều cao"],
            Locale::En => ["Common name", "Scientific name", "Plant family", "Height"],
        };
        let values = [
            &product.common_name,
            &product.scientific_name,
            &product.plant_family,
            &product.height,
        ];

        let mut rows: Vec<InfoRow> = labels
            .into_iter()
            .zip(values)
            .map(|(label, value)| InfoRow {
                label: Some(label),
                value: value.clone().unwrap_or_default(),
            })
            .collect();
        for value in [&product.origin, &product.describe] {
            rows.push(InfoRow {
                label: None,
                value: value.clone().unwrap_or_default(),
            });
        }
        rows
    }

    fn notify_error(&self, message: Message) {
        self.ports.notifier.error(message.text(self.locale));
    }
}
