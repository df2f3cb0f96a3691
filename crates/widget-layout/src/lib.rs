//! Persisted dashboard widget layout store
//!
//! This crate holds the ordered collection of dashboard widget descriptors,
//! persists it across sessions, and exposes whole-collection update and
//! reset operations.
//!
//! # Lifecycle
//!
//! - First run: the seven-widget default set
//! - Later runs: the stored collection, verbatim (no merge with defaults)
//! - `update_widgets`: full replacement, then write-through
//! - `reset_layout`: a fresh copy of the default set, then write-through
//!
//! A failed write never discards the in-memory layout; it only costs
//! durability.
//!
//! # Examples
//!
//! ```
//! use widget_layout::{edit, LayoutStore, MemoryBackend};
//!
//! let mut store = LayoutStore::open(MemoryBackend::new());
//! assert_eq!(store.widgets().len(), 7);
//!
//! let hidden = edit::set_visible(store.widgets(), "voicemails", false).unwrap();
//! store.update_widgets(hidden).unwrap();
//! assert_eq!(store.arranged().len(), 6);
//!
//! store.reset_layout();
//! assert_eq!(store.arranged().len(), 7);
//! ```

#![warn(missing_docs)]

mod defaults;
pub mod edit;
mod error;
mod persist;
mod schema;
mod store;
mod types;

// Re-export all public types
pub use defaults::{default_widgets, DEFAULT_WIDGET_IDS};
pub use error::{EditError, Error, PersistError, Result, ValidationError};
pub use persist::{
    default_layout_path, FileBackend, LayoutBackend, MemoryBackend, LAYOUT_FILE_NAME, STORE_NAME,
};
pub use schema::{decode, encode, StoredLayout, SCHEMA_VERSION};
pub use store::{LayoutStore, LoadSource, SaveStatus, Validation};
pub use types::{arrange, Geometry, Widget, WidgetSize};
