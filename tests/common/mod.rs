#![allow(dead_code)]

pub mod mock_catalog;

use std::time::Duration;

use shopfront::api::ApiClient;
use shopfront::config::Timeouts;

#[allow(unused_imports)]
pub use mock_catalog::{CapturedRequest, MockCatalog, MockResponse};

/// Client pointed at the mock with short test timeouts.
pub fn test_client(mock: &MockCatalog) -> ApiClient {
    ApiClient::new(
        mock.base_url(),
        Timeouts {
            connect: Duration::from_secs(1),
            request: Duration::from_secs(5),
        },
    )
}

/// Homepage/image-search payload: a two-product id→Product mapping.
pub fn two_product_map() -> &'static str {
    r#"{
        "p1": {
            "id": "p1",
            "content": { "title": "Red Sneaker", "content": "A bright red sneaker.", "tags": ["shoes", "red"] },
            "image_uri": "http://cdn.example/p1.jpg"
        },
        "p2": {
            "id": "p2",
            "content": { "title": "Blue Scarf", "content": "A soft blue scarf.", "tags": ["accessories"] },
            "image_uri": "http://cdn.example/p2.jpg"
        }
    }"#
}

/// Text-search payload with an advisory answer and a single product.
pub fn search_payload() -> &'static str {
    r#"{
        "answer": "Try the Red Sneaker.",
        "products": {
            "p1": {
                "id": "p1",
                "content": { "title": "Red Sneaker", "content": "A bright red sneaker.", "tags": ["shoes", "red"] },
                "image_uri": "http://cdn.example/p1.jpg"
            }
        }
    }"#
}
