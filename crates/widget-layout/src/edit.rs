//! Layout edits as pure functions (no I/O)
//!
//! Each helper takes the current collection and returns a complete
//! replacement sequence for [`LayoutStore::update_widgets`]. These are the
//! rules a dashboard front end applies on drag, resize and show/hide, and the
//! place where `fixed` widgets are protected.
//!
//! [`LayoutStore::update_widgets`]: crate::LayoutStore::update_widgets

use crate::error::EditError;
use crate::types::{Geometry, Widget, WidgetSize};

fn position_of(widgets: &[Widget], id: &str) -> Result<usize, EditError> {
    widgets
        .iter()
        .position(|w| w.id == id)
        .ok_or_else(|| EditError::UnknownWidget(id.to_string()))
}

/// Show or hide a widget.
///
/// # Errors
///
/// - `EditError::UnknownWidget` if no widget has `id`
/// - `EditError::FixedWidget` when hiding a fixed widget
pub fn set_visible(widgets: &[Widget], id: &str, visible: bool) -> Result<Vec<Widget>, EditError> {
    let index = position_of(widgets, id)?;
    if !visible && widgets[index].is_fixed() {
        return Err(EditError::FixedWidget(id.to_string()));
    }
    let mut updated = widgets.to_vec();
    updated[index].visible = visible;
    Ok(updated)
}

/// Move a widget to a 1-based display position.
///
/// Positions count every widget, hidden ones included, in display order
/// (`order`, ties by position). The result is emitted in the new display
/// order with `order` renumbered from 1. Fixed widgets keep their display
/// position, so a move may not pass over one.
///
/// # Errors
///
/// - `EditError::UnknownWidget` if no widget has `id`
/// - `EditError::FixedWidget` if the widget is fixed, or a fixed widget sits
///   between its current and target position (named in the error)
/// - `EditError::PositionOutOfRange` if `position` is 0 or past the end
pub fn move_to(widgets: &[Widget], id: &str, position: usize) -> Result<Vec<Widget>, EditError> {
    let mut ordered = widgets.to_vec();
    ordered.sort_by_key(|w| w.order);

    let current = position_of(&ordered, id)?;
    if ordered[current].is_fixed() {
        return Err(EditError::FixedWidget(id.to_string()));
    }
    if position == 0 || position > ordered.len() {
        return Err(EditError::PositionOutOfRange {
            position,
            len: ordered.len(),
        });
    }

    let target = position - 1;
    let span = current.min(target)..=current.max(target);
    if let Some(blocker) = ordered[span].iter().find(|w| w.is_fixed()) {
        return Err(EditError::FixedWidget(blocker.id.clone()));
    }

    let moving = ordered.remove(current);
    ordered.insert(target, moving);

    for (widget, order) in ordered.iter_mut().zip(1..) {
        widget.order = order;
    }
    Ok(ordered)
}

/// Change the size hint of a widget.
///
/// # Errors
///
/// Returns `EditError::UnknownWidget` if no widget has `id`.
pub fn resize(widgets: &[Widget], id: &str, size: WidgetSize) -> Result<Vec<Widget>, EditError> {
    let index = position_of(widgets, id)?;
    let mut updated = widgets.to_vec();
    updated[index].size = size;
    Ok(updated)
}

/// Set the grid position and span of a widget.
///
/// Overlaps with other widgets are not checked.
///
/// # Errors
///
/// - `EditError::UnknownWidget` if no widget has `id`
/// - `EditError::FixedWidget` if the widget is fixed
pub fn place(widgets: &[Widget], id: &str, geometry: Geometry) -> Result<Vec<Widget>, EditError> {
    let index = position_of(widgets, id)?;
    if widgets[index].is_fixed() {
        return Err(EditError::FixedWidget(id.to_string()));
    }
    let mut updated = widgets.to_vec();
    updated[index].set_geometry(geometry);
    Ok(updated)
}
