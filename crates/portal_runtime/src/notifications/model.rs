//! Client-side notification state owned by one [`super::NotificationSync`] instance.

use portal_host::{Notification, NotificationFeed, NotificationId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Unread feed as of the last successful poll.
///
/// Replaced wholesale on every successful poll; never merged with the previous feed.
pub struct NotificationFeedState {
    /// Server-side unread total.
    pub count: u32,
    /// Server-supplied page of unread notifications, in server order.
    pub items: Vec<Notification>,
}

impl NotificationFeedState {
    /// Returns whether the rendered list holds `id`.
    pub fn contains(&self, id: NotificationId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

impl From<NotificationFeed> for NotificationFeedState {
    fn from(feed: NotificationFeed) -> Self {
        Self {
            count: feed.count,
            items: feed.notifications,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Failure bookkeeping kept beside the feed; never rendered.
pub struct SyncDiagnostics {
    /// Failed operations since the last successful poll.
    pub consecutive_failures: u32,
    /// Message of the most recent failure.
    pub last_error: Option<String>,
    /// Unix ms of the most recent failure.
    pub last_failure_at_ms: Option<u64>,
    /// Unix ms of the most recent successful poll.
    pub last_success_at_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Complete state of the notification bell.
pub struct NotificationPanelState {
    /// Last known-good feed.
    pub feed: NotificationFeedState,
    /// Whether the dropdown is open.
    pub dropdown_open: bool,
    /// Failure bookkeeping.
    pub diagnostics: SyncDiagnostics,
}
