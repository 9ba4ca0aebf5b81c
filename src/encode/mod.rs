//! Persisting finished canvases.
//!
//! Sinks receive each finished canvas once, in catalog order.

/// PNG byte encoding.
pub mod png;
/// Asset sink trait and built-in sinks.
pub mod sink;
