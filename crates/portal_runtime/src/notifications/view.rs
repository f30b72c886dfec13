use leptos::*;
use portal_host::Notification;
use portal_host_web::dom;

use super::{
    model::NotificationPanelState,
    reducer::{reduce_notifications, NotificationAction},
    render::{render, EMPTY_PLACEHOLDER},
    sync::NotificationSync,
    POLL_INTERVAL,
};
use crate::{chrome::USER_DROPDOWN_ID, context::use_portal, events::event_within};

const CENTER_SELECTOR: &str = "[data-notification-center]";

fn spawn_refresh(sync: StoredValue<NotificationSync>) {
    let sync = sync.get_value();
    spawn_local(async move {
        let _ = sync.refresh().await;
    });
}

#[component]
/// Notification bell with unread badge, dropdown list, and background polling.
///
/// Polls once on mount and every [`POLL_INTERVAL`] until the view is cleaned up.
pub fn NotificationCenter() -> impl IntoView {
    let portal = use_portal();
    let panel = create_rw_signal(NotificationPanelState::default());
    // Late responses after cleanup land on a disposed signal and are dropped.
    let dispatch = move |action: NotificationAction| {
        let _ = panel.try_update(|state| reduce_notifications(state, action));
    };
    let sync = store_value(NotificationSync::new(portal.services(), dispatch));

    spawn_refresh(sync);
    if let Ok(interval) = set_interval_with_handle(move || spawn_refresh(sync), POLL_INTERVAL) {
        on_cleanup(move || interval.clear());
    }

    let outside_click_listener = window_event_listener(ev::click, move |ev| {
        if panel.with_untracked(|state| state.dropdown_open) && !event_within(&ev, CENTER_SELECTOR)
        {
            dispatch(NotificationAction::CloseDropdown);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let feed_view = create_memo(move |_| panel.with(|state| render(&state.feed)));
    let dropdown_open = move || panel.with(|state| state.dropdown_open);

    let on_toggle = move |_| {
        dispatch(NotificationAction::ToggleDropdown);
        if panel.with_untracked(|state| state.dropdown_open) {
            dom::remove_class(USER_DROPDOWN_ID, "show");
        }
    };
    let on_mark_all = move |_| {
        let sync = sync.get_value();
        spawn_local(async move {
            let _ = sync.acknowledge_all().await;
        });
    };

    view! {
        <div class="notification-wrapper" data-notification-center="">
            <button
                id="notificationBtn"
                class="notification-btn"
                type="button"
                aria-label="Notifications"
                aria-expanded=move || dropdown_open().to_string()
                on:click=on_toggle
            >
                <svg width="20" height="20" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
                    <path d="M8 16a2 2 0 0 0 2-2H6a2 2 0 0 0 2 2zm.995-14.901a1 1 0 1 0-1.99 0A5.002 5.002 0 0 0 3 6c0 1.098-.5 6-2 7h14c-1.5-1-2-5.902-2-7 0-2.42-1.72-4.44-4.005-4.901z" />
                </svg>
                <span
                    id="notificationBadge"
                    class="notification-badge"
                    style:display=move || feed_view.with(|current| if current.badge.is_some() { "flex" } else { "none" })
                >
                    {move || feed_view.with(|current| current.badge.clone().unwrap_or_default())}
                </span>
            </button>
            <div id="notificationDropdown" class="notification-dropdown" class:show=dropdown_open>
                <div class="notification-header">
                    <h3>"Notifications"</h3>
                    <button id="markAllReadBtn" class="mark-all-read" type="button" on:click=on_mark_all>
                        "Mark all as read"
                    </button>
                </div>
                <div id="notificationList" class="notification-list">
                    {move || {
                        let current = feed_view.get();
                        if current.show_placeholder {
                            view! { <p class="no-notifications">{EMPTY_PLACEHOLDER}</p> }.into_view()
                        } else {
                            current
                                .items
                                .into_iter()
                                .map(|notification| {
                                    view! { <NotificationItem notification=notification sync=sync /> }
                                })
                                .collect_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NotificationItem(
    notification: Notification,
    sync: StoredValue<NotificationSync>,
) -> impl IntoView {
    let id = notification.id;
    let on_dismiss = move |_| {
        let sync = sync.get_value();
        spawn_local(async move {
            let _ = sync.acknowledge(id).await;
        });
    };

    view! {
        <div class="notification-item" data-id=id.to_string()>
            <div class="notification-content">
                <p class="notification-message">{notification.message}</p>
                <p class="notification-time">{notification.created_at}</p>
            </div>
            <button class="notification-close" type="button" aria-label="Mark as read" on:click=on_dismiss>
                <svg width="16" height="16" viewBox="0 0 16 16" fill="currentColor" aria-hidden="true">
                    <path d="M4.646 4.646a.5.5 0 0 1 .708 0L8 7.293l2.646-2.647a.5.5 0 0 1 .708.708L8.707 8l2.647 2.646a.5.5 0 0 1-.708.708L8 8.707l-2.646 2.647a.5.5 0 0 1-.708-.708L7.293 8 4.646 5.354a.5.5 0 0 1 0-.708z" />
                </svg>
            </button>
        </div>
    }
}
