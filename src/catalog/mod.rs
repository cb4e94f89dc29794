//! Product data model and the shared result store.

mod product;
mod store;

pub use product::{Product, ProductContent};
pub use store::{ResultStore, SubscriberId};
