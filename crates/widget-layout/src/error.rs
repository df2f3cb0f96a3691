//! Error types for widget-layout
//!
//! Persistence, validation and edit failures are separate enums so callers
//! can tell a durability problem from a rejected layout.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for widget-layout operations
#[derive(Debug, Error)]
pub enum Error {
    /// Persisted record I/O or format error
    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    /// Layout rejected by validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Edit helper error
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}

/// Errors reading or writing the persisted layout record
#[derive(Debug, Error)]
pub enum PersistError {
    /// I/O error on the layout file
    #[error("Failed to access layout file {path}: {source}")]
    Io {
        /// Path of the layout file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not a recognizable layout record
    #[error("Failed to parse layout record: {0}")]
    Parse(String),

    /// Layout could not be serialized
    #[error("Failed to serialize layout: {0}")]
    Serialize(String),

    /// Atomic rename failed; temp file left as a safety copy
    #[error("Failed to write {path} atomically. Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Target path
        path: PathBuf,
        /// Temp file preserved as safety copy
        temp_path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Record was written by a newer schema version
    #[error("Layout record version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Version found in the record
        found: u32,
        /// Highest version this build understands
        supported: u32,
    },

    /// Simulated or backend-specific write failure
    #[error("Layout storage unavailable: {0}")]
    Unavailable(String),
}

/// Reasons a layout is rejected under strict validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Widget has an empty id
    #[error("Widget at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position in the submitted sequence
        index: usize,
    },

    /// Two widgets share an id
    #[error("Duplicate widget id '{id}' at positions {first} and {second}")]
    DuplicateId {
        /// Repeated id
        id: String,
        /// Position of the first occurrence
        first: usize,
        /// Position of the repeat
        second: usize,
    },

    /// Widget names no renderer
    #[error("Widget '{id}' has an empty component name")]
    EmptyComponent {
        /// Widget id
        id: String,
    },

    /// Widget spans zero columns or rows
    #[error("Widget '{id}' has zero width or height ({w}x{h})")]
    ZeroSize {
        /// Widget id
        id: String,
        /// Grid width
        w: u32,
        /// Grid height
        h: u32,
    },

    /// Component is not in the configured allow-list
    #[error("Widget '{id}' uses unknown component '{component}'")]
    UnknownComponent {
        /// Widget id
        id: String,
        /// Rejected component name
        component: String,
    },
}

/// Errors from the edit helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No widget with the given id
    #[error("No widget with id '{0}'")]
    UnknownWidget(String),

    /// Widget is fixed and cannot be hidden or moved
    #[error("Widget '{0}' is fixed and cannot be hidden or moved")]
    FixedWidget(String),

    /// Requested display position does not exist
    #[error("Position {position} is out of range (1..={len})")]
    PositionOutOfRange {
        /// Requested 1-based position
        position: usize,
        /// Number of widgets
        len: usize,
    },
}

/// Result type alias for widget-layout operations
pub type Result<T> = std::result::Result<T, Error>;
