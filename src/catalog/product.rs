//! Product value types as served by the catalog.

use serde::{Deserialize, Serialize};

/// A catalog product summary.
///
/// Externally sourced and read-only to the client; the `id` is opaque and
/// unique within one result-store snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub content: ProductContent,
    /// Resolvable reference to the display asset.
    pub image_uri: String,
}

/// Textual content of a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductContent {
    pub title: String,
    /// Free-text description.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_shape() {
        let raw = r#"{
            "id": "p1",
            "content": {
                "title": "Red Sneaker",
                "content": "A bright red sneaker.",
                "tags": ["shoes", "red"]
            },
            "image_uri": "http://cdn.example/p1.jpg"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.content.title, "Red Sneaker");
        assert_eq!(product.content.tags, vec!["shoes", "red"]);
    }

    #[test]
    fn tags_default_to_empty() {
        let raw = r#"{
            "id": "p2",
            "content": { "title": "Plain", "content": "No tags." },
            "image_uri": "http://cdn.example/p2.jpg"
        }"#;

        let product: Product = serde_json::from_str(raw).unwrap();
        assert!(product.content.tags.is_empty());
    }
}
