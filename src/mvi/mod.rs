//! Model-View-Intent (MVI) primitives for client state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presentation
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a component's state
//! - **Intent**: user gestures and service resolutions
//! - **Reducer**: pure function that transforms state based on intents
//!
//! Side effects (network calls, timers) live in the drivers that dispatch
//! intents, never in reducers.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
