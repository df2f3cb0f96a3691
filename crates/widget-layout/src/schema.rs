//! Persisted layout record schema
//!
//! Current document (version 1):
//! ```json
//! { "version": 1, "widgets": [ ... ] }
//! ```
//!
//! Version 0 documents are accepted in two shapes and migrated on load:
//! - `{ "widgets": [ ... ] }`
//! - `{ "state": { "widgets": [ ... ] }, "version": 0 }`
//!
//! Unknown fields are ignored at every level. Widgets are taken verbatim;
//! defaults are never merged into a stored set.

use crate::error::PersistError;
use crate::types::Widget;
use serde::{Deserialize, Serialize};

/// Schema version written by this build
pub const SCHEMA_VERSION: u32 = 1;

/// Versioned layout record as written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLayout {
    /// Schema version of the record
    pub version: u32,
    /// Widget collection, in stored order
    pub widgets: Vec<Widget>,
}

impl StoredLayout {
    /// Wraps a widget collection in a current-version record.
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            widgets,
        }
    }
}

#[derive(Deserialize)]
struct EnvelopeState {
    widgets: Vec<Widget>,
}

/// Every document shape that has ever been written
#[derive(Deserialize)]
#[serde(untagged)]
enum AnyDocument {
    Envelope {
        state: EnvelopeState,
        #[serde(default)]
        version: u32,
    },
    Flat {
        #[serde(default)]
        version: u32,
        widgets: Vec<Widget>,
    },
}

/// Parse a stored document of any known shape.
///
/// The returned `version` is the one found in the document (0 when absent),
/// so callers can tell a migrated record from a current one. Writing the
/// record back with [`StoredLayout::new`] upgrades it.
///
/// # Errors
///
/// - `PersistError::Parse` if the document matches no known shape
/// - `PersistError::UnsupportedVersion` if it was written by a newer schema
pub fn decode(content: &str) -> Result<StoredLayout, PersistError> {
    let document: AnyDocument = serde_json::from_str(content).map_err(|e| {
        PersistError::Parse(format!("not a layout record ({})", e))
    })?;

    let (version, widgets) = match document {
        AnyDocument::Envelope { state, version } => (version, state.widgets),
        AnyDocument::Flat { version, widgets } => (version, widgets),
    };

    if version > SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    if version < SCHEMA_VERSION {
        log::info!(
            "Migrating layout record from version {} to {}",
            version,
            SCHEMA_VERSION
        );
    }

    Ok(StoredLayout { version, widgets })
}

/// Serialize a record as pretty-printed JSON.
///
/// # Errors
///
/// Returns `PersistError::Serialize` if serialization fails.
pub fn encode(layout: &StoredLayout) -> Result<String, PersistError> {
    serde_json::to_string_pretty(layout).map_err(|e| PersistError::Serialize(e.to_string()))
}
