//! Wire types for the catalog service endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::catalog::{Product, ProductContent};

/// Content returned by the generation endpoint.
///
/// Shape-identical to [`ProductContent`]: it is the candidate content of
/// the product being authored.
pub type GeneratedContent = ProductContent;

/// Response of the caption-upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionResponse {
    /// Server-issued handle for the uploaded image, pending association
    /// with a saved product.
    pub temp_image_id: String,
    pub caption: String,
}

/// Response of the persist endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResponse {
    /// Absent when the save did not go through.
    pub product_id: Option<String>,
}

/// Response of the text-search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Advisory free-text answer, displayed separately from the results.
    #[serde(default)]
    pub answer: Option<String>,
    pub products: ProductMap,
}

/// The id→Product mapping the service uses for result collections.
///
/// JSON objects carry no reliable order, so the collection is flattened
/// into a deterministic id-sorted sequence.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ProductMap(pub HashMap<String, Product>);

impl ProductMap {
    pub fn into_products(self) -> Vec<Product> {
        let mut products: Vec<Product> = self.0.into_values().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        products
    }
}
