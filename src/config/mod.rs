//! Client configuration: service endpoint, timeouts, authoring knobs.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{AuthoringConfig, Config, TimeoutConfig, Timeouts};
