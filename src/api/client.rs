//! reqwest-based client for the catalog service.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::types::{CaptionResponse, ProductMap, SaveResponse, SearchResponse};
use crate::api::ApiError;
use crate::catalog::{Product, ProductContent};
use crate::config::Timeouts;

/// Result of a text search: the replacement collection plus the advisory
/// answer text.
#[derive(Debug, Clone)]
pub struct TextSearchResult {
    pub answer: Option<String>,
    pub products: Vec<Product>,
}

/// HTTP client for the catalog service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeouts: Timeouts) -> Self {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .expect("Failed to build catalog client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Fetch the default/featured product collection.
    pub async fn homepage(&self) -> Result<Vec<Product>, ApiError> {
        let endpoint = "/api/v1/homepage";
        let resp = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        let map: ProductMap = decode(endpoint, resp).await?;
        Ok(map.into_products())
    }

    /// Text search. Sends the raw query string untrimmed.
    pub async fn search(&self, query: &str) -> Result<TextSearchResult, ApiError> {
        let endpoint = "/api/v1/search";
        let resp = self
            .client
            .get(self.url(endpoint))
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        let body: SearchResponse = decode(endpoint, resp).await?;
        Ok(TextSearchResult {
            answer: body.answer,
            products: body.products.into_products(),
        })
    }

    /// Visual similarity search over the raw image bytes.
    pub async fn image_search(
        &self,
        image: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Result<Vec<Product>, ApiError> {
        let endpoint = "/api/v1/image_search";
        let form = Form::new().part("image", Part::bytes(image).file_name(file_name.into()));
        let resp = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        let map: ProductMap = decode(endpoint, resp).await?;
        Ok(map.into_products())
    }

    /// Upload an image for captioning; returns the temp asset handle and
    /// the machine-generated caption.
    pub async fn upload_for_caption(
        &self,
        image: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Result<CaptionResponse, ApiError> {
        let endpoint = "/api/v1/image";
        let form = Form::new().part("image", Part::bytes(image).file_name(file_name.into()));
        let resp = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        decode(endpoint, resp).await
    }

    /// Generate candidate product content from a caption.
    pub async fn generate(&self, caption: &str) -> Result<ProductContent, ApiError> {
        let endpoint = "/api/v1/generate";
        let resp = self
            .client
            .post(self.url(endpoint))
            .query(&[("caption", caption)])
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        decode(endpoint, resp).await
    }

    /// Persist the authored product. Returns the new product id.
    ///
    /// A 2xx response without a `product_id` still counts as a failure.
    pub async fn save_product(
        &self,
        temp_image_id: &str,
        content: &ProductContent,
    ) -> Result<String, ApiError> {
        let endpoint = "/api/v1/products";
        let resp = self
            .client
            .post(self.url(endpoint))
            .query(&[("temp_image_id", temp_image_id)])
            .json(content)
            .send()
            .await
            .map_err(|e| network(endpoint, e))?;
        let body: SaveResponse = decode(endpoint, resp).await?;
        body.product_id.ok_or(ApiError::MissingProductId)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn network(endpoint: &str, source: reqwest::Error) -> ApiError {
    ApiError::Network {
        endpoint: endpoint.to_string(),
        source,
    }
}

/// Check the status and decode the JSON body.
async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        debug!(endpoint, status = status.as_u16(), "service error");
        return Err(ApiError::Service {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: truncate_message(status, message),
        });
    }
    resp.json().await.map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source: e,
    })
}

fn truncate_message(status: StatusCode, message: String) -> String {
    const MAX: usize = 256;
    if message.is_empty() {
        return status.canonical_reason().unwrap_or("unknown").to_string();
    }
    if message.len() > MAX {
        let mut end = MAX;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message[..end].to_string()
    } else {
        message
    }
}
