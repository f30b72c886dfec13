//! Page chrome shared by every portal page: the user menu and flash alerts.

use std::time::Duration;

use leptos::*;
use portal_host_web::dom;

use crate::events::{closest_to_target, event_within};

/// DOM id of the user menu dropdown.
pub const USER_DROPDOWN_ID: &str = "userDropdown";
const USER_MENU_BUTTON_SELECTOR: &str = "#userMenuBtn";

/// Delay before a flash alert dismisses itself.
pub const ALERT_AUTO_DISMISS: Duration = Duration::from_secs(5);
/// Length of the slide-out animation played before an alert is removed.
pub const ALERT_EXIT_ANIMATION: Duration = Duration::from_millis(300);

const ALERT_SELECTOR: &str = ".alert";
const ALERT_CLOSE_SELECTOR: &str = ".alert-close";
const SLIDE_OUT_STYLE_ID: &str = "portal-alert-keyframes";
const SLIDE_OUT_KEYFRAMES: &str =
    "@keyframes slideOut { to { transform: translateX(100%); opacity: 0; } }";

/// Toggles the user menu from its button; any other click closes it.
pub fn install_user_menu() {
    let click_listener = window_event_listener(ev::click, move |ev| {
        if event_within(&ev, USER_MENU_BUTTON_SELECTOR) {
            dom::toggle_class(USER_DROPDOWN_ID, "show");
        } else {
            dom::remove_class(USER_DROPDOWN_ID, "show");
        }
    });
    on_cleanup(move || click_listener.remove());
}

/// Wires `.alert-close` buttons and schedules auto-dismissal of every alert on the page.
pub fn install_alert_dismissal() {
    dom::install_stylesheet(SLIDE_OUT_STYLE_ID, SLIDE_OUT_KEYFRAMES);

    let click_listener = window_event_listener(ev::click, move |ev| {
        if !event_within(&ev, ALERT_CLOSE_SELECTOR) {
            return;
        }
        if let Some(alert) = closest_to_target(&ev, ALERT_SELECTOR) {
            close_alert(alert);
        }
    });
    on_cleanup(move || click_listener.remove());

    for alert in dom::query_all(ALERT_SELECTOR) {
        set_timeout(
            move || {
                if alert.parent_element().is_some() {
                    close_alert(alert);
                }
            },
            ALERT_AUTO_DISMISS,
        );
    }
}

fn close_alert(alert: web_sys::Element) {
    dom::set_element_style(&alert, "animation", "slideOut 0.3s ease");
    set_timeout(move || alert.remove(), ALERT_EXIT_ANIMATION);
}
