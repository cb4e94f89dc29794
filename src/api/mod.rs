//! HTTP client for the catalog service.
//!
//! All remote calls (homepage, search, captioning, generation, persist)
//! go through [`ApiClient`]; the wire shapes live in [`types`].

mod client;
mod error;
pub mod types;

pub use client::{ApiClient, TextSearchResult};
pub use error::ApiError;
