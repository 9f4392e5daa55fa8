//! pn-settings: typed, validated settings for simulation objects.
//!
//! Provides:
//! - `SettingsStore`: ordered options whose types are fixed on declaration
//!   or on first write
//! - `SettingsView`: shared by-name view over a store that hides reserved
//!   `_`-prefixed bookkeeping options
//! - `SettingsSchema`: class-like declarations with defaults and docs
//! - YAML/JSON settings files
//!
//! # Example
//!
//! ```
//! use pn_settings::SettingsView;
//!
//! let view = SettingsView::from_mapping([("a", 5), ("e", 6)]).unwrap();
//! assert!(view.set("e", 5.5).is_err());
//! view.set("a", 2).unwrap();
//! assert_eq!(view.get_as::<i64>("a").unwrap(), 2);
//! ```

pub mod error;
pub mod format;
pub(crate) mod indexing;
pub mod io;
pub mod schema;
pub mod store;
pub mod view;

// Re-exports for ergonomics
pub use error::{SettingsError, SettingsResult};
pub use io::{load_json, load_yaml, parse_json, parse_yaml, save_json, save_yaml};
pub use pn_core::{FromValue, Value, ValueType};
pub use schema::SettingsSchema;
pub use store::{OptionEntry, SettingsStore};
pub use view::{RESERVED_PREFIX, SettingsView};

/// Ordered name→value pairs, as read from a settings file.
pub type Mapping = Vec<(String, Value)>;
