//! Producer selection and result-store writes.
//!
//! The dispatcher is the only writer of the [`ResultStore`]. Each of the
//! three producers (homepage, text search, image search) takes a request
//! token at issuance; the store applies a response only when its token is
//! still the newest, so a slow response can never clobber the results of
//! a later request.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, ApiError};
use crate::catalog::ResultStore;

/// Which producer the last-requested results came from.
///
/// The presentation layer uses this to choose the "query echo": the
/// advisory answer text for a text search, the submitted image for an
/// image search. Flipped synchronously at issuance, before the response
/// resolves. The homepage producer does not change the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Text,
    Image,
}

/// Routes user search gestures to the right producer and writes the
/// outcome into the shared [`ResultStore`].
#[derive(Clone)]
pub struct QueryDispatcher {
    client: ApiClient,
    store: ResultStore,
    mode: Arc<RwLock<SearchMode>>,
}

impl QueryDispatcher {
    pub fn new(client: ApiClient, store: ResultStore) -> Self {
        Self {
            client,
            store,
            mode: Arc::new(RwLock::new(SearchMode::default())),
        }
    }

    /// The store this dispatcher writes to.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Producer of the last-requested results.
    pub fn mode(&self) -> SearchMode {
        *self.mode.read()
    }

    /// Fetch the default/featured collection, typically once at mount.
    ///
    /// Errors are surfaced to the caller; the store keeps its prior
    /// contents, so a stale result set may stay visible.
    pub async fn load_homepage(&self) -> Result<bool, ApiError> {
        let token = self.store.issue_token();
        let products = self.client.homepage().await.inspect_err(|e| {
            warn!(error = %e, "homepage fetch failed, keeping prior results");
        })?;
        info!(count = products.len(), "homepage loaded");
        Ok(self.store.replace(token, products, None))
    }

    /// Text search on an explicit commit gesture.
    ///
    /// Queries that are empty after trimming are rejected before any
    /// request is issued and before the mode or store is touched; the
    /// query itself is sent untrimmed. On success both the advisory
    /// answer and the replacement collection are written.
    ///
    /// Returns whether the response was applied (`false` when a later
    /// request superseded this one while it was in flight).
    pub async fn search_text(&self, query: &str) -> Result<bool, ApiError> {
        if query.trim().is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        *self.mode.write() = SearchMode::Text;
        let token = self.store.issue_token();

        let result = self.client.search(query).await.inspect_err(|e| {
            warn!(error = %e, "text search failed, keeping prior results");
        })?;

        let applied = self.store.replace(token, result.products, result.answer);
        if !applied {
            debug!(token, "text search superseded before it resolved");
        }
        Ok(applied)
    }

    /// Visual search, triggered on file selection.
    ///
    /// Never populates the answer text; the submitted image is the query
    /// echo instead.
    pub async fn search_image(
        &self,
        image: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Result<bool, ApiError> {
        *self.mode.write() = SearchMode::Image;
        let token = self.store.issue_token();

        let products = self
            .client
            .image_search(image, file_name)
            .await
            .inspect_err(|e| {
                warn!(error = %e, "image search failed, keeping prior results");
            })?;

        let applied = self.store.replace(token, products, None);
        if !applied {
            debug!(token, "image search superseded before it resolved");
        }
        Ok(applied)
    }
}
