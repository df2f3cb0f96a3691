//! Core domain types for widget-layout
//!
//! This module defines the types that model a dashboard layout: Widget,
//! WidgetSize and Geometry. Field names serialize exactly as they appear in
//! the persisted layout record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display size hint for a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    /// Single grid cell tile
    Small,
    /// Two-column tile
    Medium,
    /// Full-width tile
    Large,
}

impl fmt::Display for WidgetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WidgetSize::Small => "small",
            WidgetSize::Medium => "medium",
            WidgetSize::Large => "large",
        };
        f.write_str(name)
    }
}

impl FromStr for WidgetSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(WidgetSize::Small),
            "medium" => Ok(WidgetSize::Medium),
            "large" => Ok(WidgetSize::Large),
            other => Err(format!(
                "unknown widget size '{}' (expected small, medium or large)",
                other
            )),
        }
    }
}

/// Grid position and span of a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    /// Column of the top-left cell
    pub x: u32,
    /// Row of the top-left cell
    pub y: u32,
    /// Width in grid columns
    pub w: u32,
    /// Height in grid rows
    pub h: u32,
}

/// Descriptor of one dashboard tile
///
/// `id` is the only identity key. Everything else is display metadata that
/// the store persists but never interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Stable identifier, never reused across logical widgets
    pub id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Whether the widget is currently shown
    pub visible: bool,
    /// User-controlled display order (not required to be unique)
    pub order: i32,
    /// Display size hint
    pub size: WidgetSize,
    /// Grid column
    pub x: u32,
    /// Grid row
    pub y: u32,
    /// Grid width
    pub w: u32,
    /// Grid height
    pub h: u32,
    /// Symbolic name of the renderer to mount for this widget
    pub component: String,
    /// Non-rearrangeable, non-hideable marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<bool>,
}

impl Widget {
    /// Returns true when the widget is marked fixed.
    pub fn is_fixed(&self) -> bool {
        self.fixed.unwrap_or(false)
    }

    /// Returns the grid geometry of this widget.
    pub fn geometry(&self) -> Geometry {
        Geometry {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Applies a grid geometry to this widget.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.x = geometry.x;
        self.y = geometry.y;
        self.w = geometry.w;
        self.h = geometry.h;
    }
}

/// Returns visible widgets in display order.
///
/// Sorts by `order`; ties keep their position in the input sequence.
pub fn arrange(widgets: &[Widget]) -> Vec<&Widget> {
    let mut visible: Vec<&Widget> = widgets.iter().filter(|w| w.visible).collect();
    visible.sort_by_key(|w| w.order);
    visible
}
