//! Text and JSON output of widget collections.

use std::fmt::Write;
use widget_layout::{PersistError, Widget};

use crate::commands::CommandError;

/// Renders widgets as an aligned table, one row per widget, in the given order.
///
/// The `SHOWN` column is included when `with_visibility` is set. Fixed
/// widgets are marked with `*` after their id.
pub fn table(widgets: &[&Widget], with_visibility: bool) -> String {
    let id_width = widgets
        .iter()
        .map(|w| w.id.len() + usize::from(w.is_fixed()))
        .chain(std::iter::once(2))
        .max()
        .unwrap_or(2);
    let title_width = widgets
        .iter()
        .map(|w| w.title.len())
        .chain(std::iter::once(5))
        .max()
        .unwrap_or(5);

    let mut out = String::new();
    let shown_header = if with_visibility { "SHOWN  " } else { "" };
    let _ = writeln!(
        out,
        "{:>5}  {:<id_width$}  {:<title_width$}  {}{:<6}  {:<9}  COMPONENT",
        "ORDER", "ID", "TITLE", shown_header, "SIZE", "GRID",
    );

    for widget in widgets {
        let id = if widget.is_fixed() {
            format!("{}*", widget.id)
        } else {
            widget.id.clone()
        };
        let shown = match (with_visibility, widget.visible) {
            (false, _) => "",
            (true, true) => "yes    ",
            (true, false) => "no     ",
        };
        let grid = format!("{},{} {}x{}", widget.x, widget.y, widget.w, widget.h);
        let _ = writeln!(
            out,
            "{:>5}  {:<id_width$}  {:<title_width$}  {}{:<6}  {:<9}  {}",
            widget.order,
            id,
            widget.title,
            shown,
            widget.size.to_string(),
            grid,
            widget.component,
        );
    }
    out
}

/// Renders widgets as a pretty JSON array.
pub fn json(widgets: &[&Widget]) -> Result<String, CommandError> {
    serde_json::to_string_pretty(widgets)
        .map_err(|e| CommandError::Persist(PersistError::Serialize(e.to_string())))
}
