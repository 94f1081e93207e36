//! # MindKit Core
//!
//! Core types for the MindKit overview widget: 2D geometry value types,
//! a typed single-threaded signal primitive, shared-state aliases, and
//! error types.

pub mod error;
pub mod geometry;
pub mod signal;
pub mod types;

pub use error::{ConfigError, Error, Result};
pub use geometry::{Dimension, Insets, Point, Rect, Transform};
pub use signal::{Signal, SubscriptionId};
pub use types::{shared, Callback, Shared, SharedOption, SharedWeak};
