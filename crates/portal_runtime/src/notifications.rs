//! Unread-notification bell: state, reducer, server sync, and view.
//!
//! The feed is polled once on mount and then on a fixed [`POLL_INTERVAL`]. Every successful poll
//! replaces the feed wholesale; failures are logged, recorded in [`SyncDiagnostics`], and leave
//! the last known-good feed on screen.

use std::time::Duration;

pub mod model;
pub mod reducer;
pub mod render;
pub mod sync;
mod view;

pub use model::{NotificationFeedState, NotificationPanelState, SyncDiagnostics};
pub use reducer::{reduce_notifications, NotificationAction, SyncOperation};
pub use render::{badge_label, render, FeedView, BADGE_CEILING, EMPTY_PLACEHOLDER};
pub use sync::{NotificationDispatch, NotificationSync, PanelStore};
pub use view::NotificationCenter;

/// Fixed polling cadence; not configurable and not backed off on failure.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);
