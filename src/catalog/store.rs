//! Shared result store for the currently visible product collection.
//!
//! One store instance is shared by the dispatcher and the presentation
//! layer. Producers replace the whole collection atomically; there is no
//! partial update API. Replacements are guarded by monotonic request
//! tokens so that a slow response can never overwrite the result of a
//! later-issued request.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::catalog::Product;

/// Handle returned by [`ResultStore::subscribe`], used to unsubscribe.
pub type SubscriberId = u64;

type Callback = Box<dyn Fn(&[Product]) + Send + Sync>;

struct StoreInner {
    products: Vec<Product>,
    /// Advisory answer text from the last text search, if any.
    answer: Option<String>,
    /// High-water mark of issued request tokens.
    latest_issued: u64,
}

#[derive(Default)]
struct Subscribers {
    callbacks: HashMap<SubscriberId, Callback>,
    next_id: SubscriberId,
}

/// Reactive container for the current product result set.
///
/// Cheap to clone; clones share the same underlying state. Subscribers
/// are notified synchronously with respect to each accepted replacement.
#[derive(Clone)]
pub struct ResultStore {
    inner: Arc<RwLock<StoreInner>>,
    subscribers: Arc<RwLock<Subscribers>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                products: Vec::new(),
                answer: None,
                latest_issued: 0,
            })),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
        }
    }

    /// Issue the next request token.
    ///
    /// Producers must call this before sending a request and pass the
    /// token back to [`replace`](Self::replace) when the response
    /// resolves. Issuing a token immediately supersedes all earlier ones.
    pub fn issue_token(&self) -> u64 {
        let mut inner = self.inner.write();
        inner.latest_issued += 1;
        inner.latest_issued
    }

    /// Replace the entire collection, if `token` is still the latest.
    ///
    /// Returns `true` when the replacement was applied. A stale token
    /// (superseded by a later [`issue_token`](Self::issue_token) call)
    /// leaves the store untouched, which is how late responses from
    /// abandoned requests are discarded.
    pub fn replace(&self, token: u64, products: Vec<Product>, answer: Option<String>) -> bool {
        let snapshot = {
            let mut inner = self.inner.write();
            if token != inner.latest_issued {
                debug!(
                    token,
                    latest = inner.latest_issued,
                    "discarding stale result replacement"
                );
                return false;
            }
            inner.products = products;
            inner.answer = answer;
            inner.products.clone()
        };

        // Notify outside the data lock so callbacks may read the store.
        let subscribers = self.subscribers.read();
        for callback in subscribers.callbacks.values() {
            callback(&snapshot);
        }
        true
    }

    /// Current collection, in the insertion order of the last producer
    /// that wrote the store.
    pub fn snapshot(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    /// Advisory answer text from the last applied text search.
    pub fn answer(&self) -> Option<String> {
        self.inner.read().answer.clone()
    }

    /// Register a callback invoked with the new snapshot on every
    /// accepted replacement.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&[Product]) + Send + Sync + 'static,
    {
        let mut subscribers = self.subscribers.write();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.callbacks.insert(id, Box::new(callback));
        id
    }

    /// Remove a previously registered subscriber.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().callbacks.remove(&id);
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
