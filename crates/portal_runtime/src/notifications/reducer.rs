//! Reducer actions and transition logic for the notification bell.

use std::fmt;

use portal_host::{NotificationFeed, NotificationId};

use super::model::NotificationPanelState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Request kinds whose failures are recorded in diagnostics.
pub enum SyncOperation {
    /// `GET` of the unread feed.
    Refresh,
    /// Single-notification read acknowledgement.
    Acknowledge(NotificationId),
    /// Bulk read acknowledgement.
    AcknowledgeAll,
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refresh => f.write_str("notification refresh"),
            Self::Acknowledge(id) => write!(f, "notification {id} acknowledge"),
            Self::AcknowledgeAll => f.write_str("notification acknowledge-all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State transitions for [`NotificationPanelState`].
pub enum NotificationAction {
    /// A poll succeeded; its feed replaces the current one.
    FeedLoaded {
        /// Decoded server feed.
        feed: NotificationFeed,
        /// Completion time in Unix milliseconds.
        at_ms: u64,
    },
    /// A request failed; the feed is left untouched.
    SyncFailed {
        /// Failed request kind.
        operation: SyncOperation,
        /// Failure message.
        error: String,
        /// Failure time in Unix milliseconds.
        at_ms: u64,
    },
    /// The server accepted a read acknowledgement for `id`.
    Acknowledged {
        /// Acknowledged notification.
        id: NotificationId,
    },
    /// Bell button pressed.
    ToggleDropdown,
    /// Click landed outside the bell and dropdown.
    CloseDropdown,
}

/// Applies `action` to `state`.
pub fn reduce_notifications(state: &mut NotificationPanelState, action: NotificationAction) {
    match action {
        NotificationAction::FeedLoaded { feed, at_ms } => {
            state.feed = feed.into();
            state.diagnostics.consecutive_failures = 0;
            state.diagnostics.last_error = None;
            state.diagnostics.last_success_at_ms = Some(at_ms);
        }
        NotificationAction::SyncFailed {
            operation,
            error,
            at_ms,
        } => {
            let diagnostics = &mut state.diagnostics;
            diagnostics.consecutive_failures = diagnostics.consecutive_failures.saturating_add(1);
            diagnostics.last_error = Some(format!("{operation} failed: {error}"));
            diagnostics.last_failure_at_ms = Some(at_ms);
        }
        // The count stays until the follow-up poll reports the authoritative total.
        NotificationAction::Acknowledged { id } => {
            state.feed.items.retain(|item| item.id != id);
        }
        NotificationAction::ToggleDropdown => {
            state.dropdown_open = !state.dropdown_open;
        }
        NotificationAction::CloseDropdown => {
            state.dropdown_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use portal_host::Notification;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::notifications::model::NotificationFeedState;

    fn note(id: u64) -> Notification {
        Notification {
            id,
            message: format!("Application {id} was reviewed"),
            created_at: "Mar 04, 2025 10:15".to_string(),
        }
    }

    fn loaded(count: u32, ids: &[u64]) -> NotificationPanelState {
        let mut state = NotificationPanelState::default();
        reduce_notifications(
            &mut state,
            NotificationAction::FeedLoaded {
                feed: NotificationFeed {
                    count,
                    notifications: ids.iter().copied().map(note).collect(),
                },
                at_ms: 1_000,
            },
        );
        state
    }

    #[test]
    fn feed_loaded_replaces_previous_feed_wholesale() {
        let mut state = loaded(5, &[1, 2, 3]);
        reduce_notifications(
            &mut state,
            NotificationAction::FeedLoaded {
                feed: NotificationFeed {
                    count: 1,
                    notifications: vec![note(9)],
                },
                at_ms: 2_000,
            },
        );

        assert_eq!(
            state.feed,
            NotificationFeedState {
                count: 1,
                items: vec![note(9)],
            }
        );
        assert_eq!(state.diagnostics.last_success_at_ms, Some(2_000));
    }

    #[test]
    fn acknowledged_removes_only_matching_item_and_keeps_count() {
        let mut state = loaded(3, &[1, 42, 7]);
        reduce_notifications(&mut state, NotificationAction::Acknowledged { id: 42 });

        assert_eq!(state.feed.items, vec![note(1), note(7)]);
        assert_eq!(state.feed.count, 3);
    }

    #[test]
    fn acknowledged_unknown_id_is_noop() {
        let mut state = loaded(2, &[1, 2]);
        let before = state.clone();
        reduce_notifications(&mut state, NotificationAction::Acknowledged { id: 99 });
        assert_eq!(state, before);
    }

    #[test]
    fn sync_failure_keeps_feed_and_counts_failures() {
        let mut state = loaded(2, &[1, 2]);
        let feed_before = state.feed.clone();

        for at_ms in [10, 20] {
            reduce_notifications(
                &mut state,
                NotificationAction::SyncFailed {
                    operation: SyncOperation::Refresh,
                    error: "request rejected with status 500".to_string(),
                    at_ms,
                },
            );
        }

        assert_eq!(state.feed, feed_before);
        assert_eq!(state.diagnostics.consecutive_failures, 2);
        assert_eq!(
            state.diagnostics.last_error.as_deref(),
            Some("notification refresh failed: request rejected with status 500")
        );
        assert_eq!(state.diagnostics.last_failure_at_ms, Some(20));
    }

    #[test]
    fn successful_poll_resets_failure_streak() {
        let mut state = NotificationPanelState::default();
        reduce_notifications(
            &mut state,
            NotificationAction::SyncFailed {
                operation: SyncOperation::Acknowledge(4),
                error: "transport failure: offline".to_string(),
                at_ms: 5,
            },
        );
        reduce_notifications(
            &mut state,
            NotificationAction::FeedLoaded {
                feed: NotificationFeed::default(),
                at_ms: 6,
            },
        );

        assert_eq!(state.diagnostics.consecutive_failures, 0);
        assert_eq!(state.diagnostics.last_error, None);
        assert_eq!(state.diagnostics.last_failure_at_ms, Some(5));
    }

    #[test]
    fn dropdown_toggles_and_closes() {
        let mut state = NotificationPanelState::default();
        reduce_notifications(&mut state, NotificationAction::ToggleDropdown);
        assert!(state.dropdown_open);
        reduce_notifications(&mut state, NotificationAction::ToggleDropdown);
        assert!(!state.dropdown_open);
        reduce_notifications(&mut state, NotificationAction::ToggleDropdown);
        reduce_notifications(&mut state, NotificationAction::CloseDropdown);
        assert!(!state.dropdown_open);
        reduce_notifications(&mut state, NotificationAction::CloseDropdown);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn operation_labels_name_the_request() {
        assert_eq!(SyncOperation::Refresh.to_string(), "notification refresh");
        assert_eq!(
            SyncOperation::Acknowledge(42).to_string(),
            "notification 42 acknowledge"
        );
        assert_eq!(
            SyncOperation::AcknowledgeAll.to_string(),
            "notification acknowledge-all"
        );
    }
}
