//! Layout store: the single source of truth for the dashboard widget set.
//!
//! The store owns the widget collection and a persistence backend. It is
//! built once with [`LayoutStore::open`] (load-or-default) and handed to
//! whatever renders or edits the dashboard. Mutation only happens through
//! [`LayoutStore::update_widgets`] and [`LayoutStore::reset_layout`]; both
//! commit in memory first and then write through to the backend.

use crate::defaults::default_widgets;
use crate::error::{PersistError, ValidationError};
use crate::persist::LayoutBackend;
use crate::schema::StoredLayout;
use crate::types::{arrange, Widget};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// How submitted layouts are checked before they replace the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validation {
    /// Reject empty or duplicate ids, empty component names, zero-sized
    /// widgets and, when the list is non-empty, components outside it.
    Strict {
        /// Allowed component names; empty allows any name
        components: Vec<String>,
    },
    /// Accept any sequence verbatim.
    #[default]
    Permissive,
}

impl Validation {
    /// Strict validation with no component allow-list.
    pub fn strict() -> Self {
        Validation::Strict {
            components: Vec::new(),
        }
    }

    /// Checks a submitted layout against this policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, in sequence order.
    pub fn check(&self, widgets: &[Widget]) -> Result<(), ValidationError> {
        let components = match self {
            Validation::Permissive => return Ok(()),
            Validation::Strict { components } => components,
        };

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(widgets.len());
        for (index, widget) in widgets.iter().enumerate() {
            if widget.id.trim().is_empty() {
                return Err(ValidationError::EmptyId { index });
            }
            if let Some(&first) = seen.get(widget.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    id: widget.id.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(widget.id.as_str(), index);

            if widget.component.trim().is_empty() {
                return Err(ValidationError::EmptyComponent {
                    id: widget.id.clone(),
                });
            }
            if widget.w == 0 || widget.h == 0 {
                return Err(ValidationError::ZeroSize {
                    id: widget.id.clone(),
                    w: widget.w,
                    h: widget.h,
                });
            }
            if !components.is_empty() && !components.iter().any(|c| *c == widget.component) {
                return Err(ValidationError::UnknownComponent {
                    id: widget.id.clone(),
                    component: widget.component.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Where the initial widget set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing was stored; the default set was used.
    Defaults,
    /// A stored record was loaded verbatim.
    Persisted {
        /// Schema version found in the record; below
        /// [`SCHEMA_VERSION`](crate::SCHEMA_VERSION) means it was migrated
        version: u32,
    },
    /// A stored record exists but could not be read; the default set was used.
    Fallback,
}

/// Outcome of the write-through after a mutation.
///
/// The in-memory state is committed regardless of this value.
#[derive(Debug)]
pub enum SaveStatus {
    /// The backend accepted the new record.
    Saved,
    /// The backend failed; only durability is affected.
    Failed(PersistError),
}

impl SaveStatus {
    /// Returns true if the record reached the backend.
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }
}

/// Widget layout state container with write-through persistence.
pub struct LayoutStore<B: LayoutBackend> {
    widgets: Vec<Widget>,
    backend: B,
    validation: Validation,
    source: LoadSource,
    changes: watch::Sender<Arc<[Widget]>>,
}

impl<B: LayoutBackend> std::fmt::Debug for LayoutStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutStore")
            .field("widgets", &self.widgets)
            .field("backend", &self.backend.location())
            .field("validation", &self.validation)
            .field("source", &self.source)
            .field("subscriber_count", &self.changes.receiver_count())
            .finish()
    }
}

impl<B: LayoutBackend> LayoutStore<B> {
    /// Opens a store with permissive validation.
    ///
    /// See [`LayoutStore::open_with`].
    pub fn open(backend: B) -> Self {
        Self::open_with(backend, Validation::Permissive)
    }

    /// Opens a store, loading the stored record or falling back to defaults.
    ///
    /// - No stored record: the default set.
    /// - Unreadable record: the default set, with a warning. The record is
    ///   left in place until the next mutation overwrites it.
    /// - Stored record: its widgets, verbatim. Default widgets added after
    ///   the record was written are not merged in.
    ///
    /// Opening never fails and never writes.
    pub fn open_with(backend: B, validation: Validation) -> Self {
        let (widgets, source) = match backend.load() {
            Ok(Some(layout)) => {
                log::debug!(
                    "Loaded {} widgets from {}",
                    layout.widgets.len(),
                    backend.location()
                );
                (
                    layout.widgets,
                    LoadSource::Persisted {
                        version: layout.version,
                    },
                )
            }
            Ok(None) => {
                log::debug!(
                    "No layout stored at {}, using defaults",
                    backend.location()
                );
                (default_widgets(), LoadSource::Defaults)
            }
            Err(e) => {
                log::warn!(
                    "Could not load layout from {}: {}. Using defaults",
                    backend.location(),
                    e
                );
                (default_widgets(), LoadSource::Fallback)
            }
        };

        let (changes, _rx) = watch::channel(Arc::from(widgets.clone()));
        Self {
            widgets,
            backend,
            validation,
            source,
            changes,
        }
    }

    /// Current widget collection, in stored order.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Looks up a widget by id.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Visible widgets in display order (by `order`, ties by position).
    pub fn arranged(&self) -> Vec<&Widget> {
        arrange(&self.widgets)
    }

    /// Where the initial widget set came from.
    pub fn load_source(&self) -> LoadSource {
        self.source
    }

    /// Active validation policy.
    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    /// The persistence backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the persistence backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Subscribes to layout changes.
    ///
    /// The receiver always holds the latest committed collection.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Widget]>> {
        self.changes.subscribe()
    }

    /// Replaces the whole widget collection.
    ///
    /// This is replacement, not merge: afterwards `widgets()` returns exactly
    /// `widgets`. The new collection is committed in memory before the
    /// backend write; a failed write is logged and reported in the returned
    /// [`SaveStatus`] but never rolls the state back.
    ///
    /// # Errors
    ///
    /// Under [`Validation::Strict`], returns a [`ValidationError`] and leaves
    /// both memory and storage untouched.
    pub fn update_widgets(&mut self, widgets: Vec<Widget>) -> Result<SaveStatus, ValidationError> {
        self.validation.check(&widgets)?;
        Ok(self.commit(widgets))
    }

    /// Restores the default widget set.
    ///
    /// The restored set is freshly built, so it shares nothing with any
    /// previously returned collection. Calling it repeatedly yields the same
    /// state.
    pub fn reset_layout(&mut self) -> SaveStatus {
        log::info!("Resetting layout to defaults");
        self.commit(default_widgets())
    }

    /// Consumes the store and returns its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn commit(&mut self, widgets: Vec<Widget>) -> SaveStatus {
        self.widgets = widgets;
        self.changes.send_replace(Arc::from(self.widgets.clone()));

        match self.backend.save(&StoredLayout::new(self.widgets.clone())) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                log::warn!(
                    "Layout kept in memory but not saved to {}: {}",
                    self.backend.location(),
                    e
                );
                SaveStatus::Failed(e)
            }
        }
    }
}
