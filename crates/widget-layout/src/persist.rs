//! Persistence adapters for the layout record
//!
//! A backend stores exactly one named layout record. [`FileBackend`] keeps it
//! in a JSON file written with the temp-file-then-rename pattern;
//! [`MemoryBackend`] keeps the serialized document in memory.

use crate::error::PersistError;
use crate::schema::{self, StoredLayout};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the persisted layout record
pub const STORE_NAME: &str = "dashboard-layout";

/// File name of the layout record inside the data directory
pub const LAYOUT_FILE_NAME: &str = "layout.json";

/// Storage for a single layout record
pub trait LayoutBackend {
    /// Read the stored record.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<StoredLayout>, PersistError>;

    /// Replace the stored record.
    fn save(&mut self, layout: &StoredLayout) -> Result<(), PersistError>;

    /// Remove the stored record. Removing an absent record succeeds.
    fn clear(&mut self) -> Result<(), PersistError>;

    /// Human-readable location of the record, for diagnostics.
    fn location(&self) -> String;
}

/// Returns the default path of the layout file
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/dashboard-layout/layout.json` (if env var set)
/// 2. Platform data directory (`~/.local/share` on Linux,
///    `~/Library/Application Support` on macOS)
/// 3. `./dashboard-layout/layout.json` if no data directory is known
pub fn default_layout_path() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(STORE_NAME).join(LAYOUT_FILE_NAME)
}

/// Layout record stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the given file path. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a backend at [`default_layout_path`].
    pub fn at_default_location() -> Self {
        Self::new(default_layout_path())
    }

    /// Path of the layout file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LayoutBackend for FileBackend {
    fn load(&self) -> Result<Option<StoredLayout>, PersistError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        schema::decode(&content).map(Some)
    }

    /// Write the layout file atomically
    ///
    /// 1. Write to `<file>.tmp.<timestamp>`
    /// 2. Fsync to disk
    /// 3. Rename temp to target
    ///
    /// A failed write or fsync removes the temp file. On rename failure the
    /// temp file is preserved as a safety copy.
    fn save(&mut self, layout: &StoredLayout) -> Result<(), PersistError> {
        let json = schema::encode(layout)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let timestamp = Local::now().format("%Y%m%d-%H%M%S%.3f").to_string();
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| LAYOUT_FILE_NAME.to_string());
        let temp = TempFile::new(
            self.path
                .with_file_name(format!("{}.tmp.{}", file_name, timestamp)),
        );

        fs::write(temp.path(), json).map_err(|e| self.io_error(e))?;

        let file = fs::File::open(temp.path()).map_err(|e| self.io_error(e))?;
        file.sync_all().map_err(|e| self.io_error(e))?;
        drop(file);

        let renamed = fs::rename(temp.path(), &self.path);
        let temp_path = temp.keep();
        renamed.map_err(|source| PersistError::WriteAtomic {
            path: self.path.clone(),
            temp_path,
            source,
        })?;

        log::debug!("Saved layout to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Temp file that is removed on drop unless kept
struct TempFile {
    path: PathBuf,
    keep: bool,
}

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Disarms removal and returns the path.
    fn keep(mut self) -> PathBuf {
        self.keep = true;
        std::mem::take(&mut self.path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if !self.keep {
            if let Err(e) = fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to remove temp file {}: {}", self.path.display(), e);
                }
            }
        }
    }
}

/// Layout record kept in memory as a serialized document
///
/// Useful for sessions that should not touch disk and for simulating
/// restarts: hand the document of one backend to a new one with
/// [`MemoryBackend::with_document`].
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Option<String>,
    fail_writes: bool,
    saves: usize,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that already holds a stored document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    /// Makes every subsequent `save` fail with `PersistError::Unavailable`.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The stored document, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LayoutBackend for MemoryBackend {
    fn load(&self) -> Result<Option<StoredLayout>, PersistError> {
        self.document.as_deref().map(schema::decode).transpose()
    }

    fn save(&mut self, layout: &StoredLayout) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Unavailable(
                "memory backend is set to fail writes".to_string(),
            ));
        }
        self.document = Some(schema::encode(layout)?);
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.document = None;
        Ok(())
    }

    fn location(&self) -> String {
        format!("memory:{}", STORE_NAME)
    }
}
