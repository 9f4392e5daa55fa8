//! pn-core: value model for porenet settings.
//!
//! Contains:
//! - value (dynamic option values + typed extraction)
//! - types (type tags, inference and first-write-wins narrowing)
//! - error (shared error types)

pub mod error;
pub mod types;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ValueError, ValueResult};
pub use types::ValueType;
pub use value::{FromValue, Value};
