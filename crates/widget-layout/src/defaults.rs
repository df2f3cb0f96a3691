//! Built-in default widget set
//!
//! Seven widgets shown on a fresh dashboard:
//! - **stats**: full-width statistics row
//! - **unread-messages**, **missed-calls**, **voicemails**, **unread-emails**:
//!   one-cell counters on the second row
//! - **status-tracking**, **campaign-performance**: two-by-two panels

use crate::types::{Widget, WidgetSize};

/// Identifiers of the default widgets, in default display order.
pub const DEFAULT_WIDGET_IDS: [&str; 7] = [
    "stats",
    "unread-messages",
    "missed-calls",
    "voicemails",
    "unread-emails",
    "status-tracking",
    "campaign-performance",
];

/// (id, title, description, size, x, y, w, h, component)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    WidgetSize,
    u32,
    u32,
    u32,
    u32,
    &'static str,
);

const DEFAULT_ROWS: [Row; 7] = [
    (
        "stats",
        "Statistics",
        "Overview of calls, messages and contacts",
        WidgetSize::Large,
        0,
        0,
        4,
        1,
        "StatsCards",
    ),
    (
        "unread-messages",
        "Unread Messages",
        "Text messages waiting for a reply",
        WidgetSize::Small,
        0,
        1,
        1,
        1,
        "UnreadMessages",
    ),
    (
        "missed-calls",
        "Missed Calls",
        "Calls that were not answered",
        WidgetSize::Small,
        1,
        1,
        1,
        1,
        "MissedCalls",
    ),
    (
        "voicemails",
        "Voicemails",
        "New voicemail recordings",
        WidgetSize::Small,
        2,
        1,
        1,
        1,
        "Voicemails",
    ),
    (
        "unread-emails",
        "Unread Emails",
        "Emails waiting in the inbox",
        WidgetSize::Small,
        3,
        1,
        1,
        1,
        "UnreadEmails",
    ),
    (
        "status-tracking",
        "Status Tracking",
        "Team availability and call status",
        WidgetSize::Medium,
        0,
        2,
        2,
        2,
        "StatusTracking",
    ),
    (
        "campaign-performance",
        "Campaign Performance",
        "Results of running outreach campaigns",
        WidgetSize::Medium,
        2,
        2,
        2,
        2,
        "CampaignPerformance",
    ),
];

/// Builds a fresh copy of the default widget set.
///
/// Every call allocates new widgets, so callers never share storage with a
/// previously returned set.
pub fn default_widgets() -> Vec<Widget> {
    DEFAULT_ROWS
        .iter()
        .zip(1..)
        .map(
            |(&(id, title, description, size, x, y, w, h, component), order)| Widget {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                visible: true,
                order,
                size,
                x,
                y,
                w,
                h,
                component: component.to_string(),
                fixed: None,
            },
        )
        .collect()
}
