//! Light/dark theme toggle persisted to the preference store.

use std::{cell::Cell, rc::Rc};

use leptos::*;
use portal_host::{PortalServices, PrefsStore};
use portal_host_web::dom;

use crate::events::event_within;

/// Root attribute the stylesheet keys the palette on.
pub const THEME_ATTRIBUTE: &str = "data-theme";
const TOGGLE_SELECTOR: &str = "#themeToggle";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Page color scheme.
pub enum Theme {
    #[default]
    /// Default scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Parses a stored token; anything but `dark` loads as [`Theme::Light`].
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Returns the stored and `data-theme` token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite scheme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Applies and persists the page theme.
pub struct ThemeController {
    prefs: Rc<dyn PrefsStore>,
    key: String,
    current: Cell<Theme>,
}

impl ThemeController {
    /// Creates a controller storing under the configured preference key.
    pub fn new(services: &PortalServices) -> Self {
        Self {
            prefs: services.prefs(),
            key: services.config().theme_pref_key.clone(),
            current: Cell::new(Theme::default()),
        }
    }

    /// Returns the theme currently applied.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Loads the stored theme, applies it, and writes it back.
    ///
    /// Load failures are logged and fall back to [`Theme::Light`].
    pub async fn boot(&self) -> Theme {
        let theme = match self.prefs.load_pref(&self.key).await {
            Ok(stored) => stored.as_deref().map(Theme::from_token).unwrap_or_default(),
            Err(err) => {
                logging::warn!("theme load failed: {err}");
                Theme::default()
            }
        };
        self.apply(theme).await;
        theme
    }

    /// Flips the theme, applies it, and persists it.
    pub async fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.apply(next).await;
        next
    }

    async fn apply(&self, theme: Theme) {
        self.current.set(theme);
        dom::set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Err(err) = self.prefs.save_pref(&self.key, theme.as_str()).await {
            logging::warn!("theme persist failed: {err}");
        }
    }
}

/// Boots the stored theme and wires `#themeToggle` for the current reactive owner.
pub fn install_theme_toggle(services: &PortalServices) {
    let controller = Rc::new(ThemeController::new(services));

    let boot = controller.clone();
    spawn_local(async move {
        boot.boot().await;
    });

    let click_listener = window_event_listener(ev::click, move |ev| {
        if !event_within(&ev, TOGGLE_SELECTOR) {
            return;
        }
        let controller = controller.clone();
        spawn_local(async move {
            controller.toggle().await;
        });
    });
    on_cleanup(move || click_listener.remove());
}
