//! Layout command handlers.
//!
//! Each editing handler builds a full replacement sequence with
//! `widget_layout::edit` and submits it through `update_widgets`, the same
//! path a dashboard front end takes after a drag or toggle.

use std::fs;
use std::path::Path;

use widget_layout::{
    edit, Geometry, LayoutBackend, LayoutStore, SaveStatus, Widget, WidgetSize,
};

use crate::commands::{render, CommandError};

/// What `list` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Aligned table
    Table,
    /// JSON array
    Json,
}

/// Lists widgets in display order.
///
/// Without `all`, only visible widgets are listed. With `all`, every widget
/// is listed in display order and the table gains a visibility column.
pub fn list<B: LayoutBackend>(
    store: &LayoutStore<B>,
    all: bool,
    format: ListFormat,
) -> Result<String, CommandError> {
    let widgets: Vec<&Widget> = if all {
        let mut every: Vec<&Widget> = store.widgets().iter().collect();
        every.sort_by_key(|w| w.order);
        every
    } else {
        store.arranged()
    };

    match format {
        ListFormat::Table => Ok(render::table(&widgets, all)),
        ListFormat::Json => render::json(&widgets),
    }
}

/// Shows or hides a widget.
pub fn set_visible<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    id: &str,
    visible: bool,
) -> Result<SaveStatus, CommandError> {
    let updated = edit::set_visible(store.widgets(), id, visible)?;
    Ok(store.update_widgets(updated)?)
}

/// Moves a widget to a 1-based display position.
pub fn move_widget<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    id: &str,
    position: usize,
) -> Result<SaveStatus, CommandError> {
    let updated = edit::move_to(store.widgets(), id, position)?;
    Ok(store.update_widgets(updated)?)
}

/// Changes the size hint of a widget.
pub fn resize<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    id: &str,
    size: WidgetSize,
) -> Result<SaveStatus, CommandError> {
    let updated = edit::resize(store.widgets(), id, size)?;
    Ok(store.update_widgets(updated)?)
}

/// Sets the grid geometry of a widget.
pub fn place<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    id: &str,
    geometry: Geometry,
) -> Result<SaveStatus, CommandError> {
    let updated = edit::place(store.widgets(), id, geometry)?;
    Ok(store.update_widgets(updated)?)
}

/// Restores the default widget set.
pub fn reset<B: LayoutBackend>(store: &mut LayoutStore<B>) -> SaveStatus {
    store.reset_layout()
}

/// Current widgets, in stored order, as a JSON array.
pub fn export<B: LayoutBackend>(store: &LayoutStore<B>) -> Result<String, CommandError> {
    let widgets: Vec<&Widget> = store.widgets().iter().collect();
    render::json(&widgets)
}

/// Writes the export to a file.
pub fn export_to_file<B: LayoutBackend>(
    store: &LayoutStore<B>,
    path: &Path,
) -> Result<(), CommandError> {
    let content = export(store)?;
    fs::write(path, content).map_err(|source| CommandError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the whole layout with a JSON array of widgets.
pub fn import<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    content: &str,
) -> Result<SaveStatus, CommandError> {
    let widgets: Vec<Widget> =
        serde_json::from_str(content).map_err(|e| CommandError::InvalidImport(e.to_string()))?;
    tracing::info!("Importing {} widgets", widgets.len());
    Ok(store.update_widgets(widgets)?)
}

/// Reads a JSON array of widgets from a file and imports it.
pub fn import_from_file<B: LayoutBackend>(
    store: &mut LayoutStore<B>,
    path: &Path,
) -> Result<SaveStatus, CommandError> {
    let content = fs::read_to_string(path).map_err(|source| CommandError::File {
        path: path.to_path_buf(),
        source,
    })?;
    import(store, &content)
}

/// Deletes the stored record. The next run starts from the default set.
pub fn forget<B: LayoutBackend>(store: &mut LayoutStore<B>) -> Result<(), CommandError> {
    store.backend_mut().clear()?;
    tracing::info!("Cleared layout at {}", store.backend().location());
    Ok(())
}
