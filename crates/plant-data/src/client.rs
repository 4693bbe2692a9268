//! `reqwest`-backed implementation of [`StoreApi`].

use std::time::Duration;

use async_trait::async_trait;
use plant_commerce::prelude::*;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::{FetchError, NewProduct, StoreApi};

/// Default backend used by the storefront during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client for the storefront REST backend.
///
/// Use [`StoreClient::new`] for the default local backend or
/// [`StoreClient::with_base_url`] to point at another server (or a mock
/// server in tests).
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Url,
}

impl StoreClient {
    /// Create a client for [`DEFAULT_BASE_URL`].
    pub fn new(timeout_secs: u64) -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Create a client for `base_url`.
    ///
    /// The base may carry a path prefix (`https://shop.example/api`); the
    /// collection paths are appended to it.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("plant-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("'{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { client, base_url })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized + Sync>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Vec<u8>, FetchError> {
        debug!(%method, %url, "storefront request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "storefront request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        context: &str,
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments)?;
        let bytes = self.send::<()>(Method::GET, url, None).await?;
        decode(&bytes, context)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8], context: &str) -> Result<T, FetchError> {
    serde_json::from_slice(bytes).map_err(|source| FetchError::Deserialize {
        context: context.to_string(),
        source,
    })
}

#[async_trait]
impl StoreApi for StoreClient {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.get_json(&["products"], "GET /products").await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.get_json(&["products", id.as_str()], &format!("GET /products/{id}"))
            .await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError> {
        let url = self.endpoint(&["products"])?;
        let bytes = self.send(Method::POST, url, Some(product)).await?;
        decode(&bytes, "POST /products")
    }

    async fn update_product(&self, product: &Product) -> Result<Product, FetchError> {
        let url = self.endpoint(&["products", product.id.as_str()])?;
        let bytes = self.send(Method::PUT, url, Some(product)).await?;
        // Some backends answer a replace with an empty body.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(product.clone());
        }
        decode(&bytes, &format!("PUT /products/{}", product.id))
    }

    async fn delete_product(&self, id: &ProductId) -> Result<(), FetchError> {
        let url = self.endpoint(&["products", id.as_str()])?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, FetchError> {
        self.get_json(&["orders"], "GET /orders").await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json(&["categories"], "GET /categories").await
    }
}
