//! Base trait for intents (user gestures / service resolutions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User gestures (file selection, text edits, button clicks)
/// - Service resolutions (HTTP responses, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
