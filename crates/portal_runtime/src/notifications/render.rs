//! Pure projection of the feed into what the bell displays.

use portal_host::Notification;

use super::model::NotificationFeedState;

/// Largest count the badge prints verbatim.
pub const BADGE_CEILING: u32 = 99;
/// Text shown in place of the list when there is nothing unread.
pub const EMPTY_PLACEHOLDER: &str = "No new notifications";

/// Returns the badge text for `count`, or `None` when the badge is hidden.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        c if c > BADGE_CEILING => Some(format!("{BADGE_CEILING}+")),
        c => Some(c.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Rendered form of a [`NotificationFeedState`].
pub struct FeedView {
    /// Badge text; `None` hides the badge.
    pub badge: Option<String>,
    /// Rows to render, in server order.
    pub items: Vec<Notification>,
    /// Whether the empty-state placeholder replaces the list.
    pub show_placeholder: bool,
}

/// Projects `feed` for display.
///
/// The badge follows `count` while the list follows `items`, so a truncated page still shows the
/// full unread total.
pub fn render(feed: &NotificationFeedState) -> FeedView {
    FeedView {
        badge: badge_label(feed.count),
        items: feed.items.clone(),
        show_placeholder: feed.items.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn note(id: u64) -> Notification {
        Notification {
            id,
            message: format!("note {id}"),
            created_at: "Jan 01, 2025".to_string(),
        }
    }

    #[test]
    fn badge_hides_at_zero_and_clamps_above_ceiling() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(1), Some("1".to_string()));
        assert_eq!(badge_label(99), Some("99".to_string()));
        assert_eq!(badge_label(100), Some("99+".to_string()));
        assert_eq!(badge_label(u32::MAX), Some("99+".to_string()));
    }

    #[test]
    fn badge_text_matches_count_for_every_small_value() {
        for count in 1..=BADGE_CEILING {
            assert_eq!(badge_label(count), Some(count.to_string()));
        }
    }

    #[test]
    fn empty_items_show_placeholder_whatever_the_count() {
        for count in [0, 3, 250] {
            let view = render(&NotificationFeedState {
                count,
                items: Vec::new(),
            });
            assert!(view.show_placeholder);
            assert!(view.items.is_empty());
        }
    }

    #[test]
    fn truncated_page_keeps_full_badge_count() {
        let view = render(&NotificationFeedState {
            count: 3,
            items: vec![note(1)],
        });
        assert_eq!(view.badge, Some("3".to_string()));
        assert_eq!(view.items, vec![note(1)]);
        assert!(!view.show_placeholder);
    }
}
