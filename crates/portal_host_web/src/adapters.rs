use std::rc::Rc;

use portal_host::{PortalConfig, PortalServices, PORTAL_CONFIG_ELEMENT_ID};

use crate::{dom, DocumentCsrfSource, WebHttpClient, WebPrefsStore};

/// Returns the browser HTTP transport.
pub fn http_client() -> WebHttpClient {
    WebHttpClient
}

/// Returns the browser preference store.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Returns a CSRF source reading the cookie named in `config`.
pub fn csrf_source(config: &PortalConfig) -> DocumentCsrfSource {
    DocumentCsrfSource::new(config.csrf_cookie.clone())
}

/// Reads the page's embedded configuration block.
///
/// A missing block yields the defaults.
///
/// # Errors
///
/// Returns the parse error for a malformed block; callers fall back to defaults.
pub fn load_page_config() -> Result<PortalConfig, String> {
    match dom::text_of(PORTAL_CONFIG_ELEMENT_ID) {
        Some(raw) => PortalConfig::from_json(&raw),
        None => Ok(PortalConfig::default()),
    }
}

/// Assembles the browser service bundle for `config`.
pub fn build_portal_services(config: PortalConfig) -> PortalServices {
    PortalServices::new(
        Rc::new(http_client()),
        Rc::new(csrf_source(&config)),
        Rc::new(prefs_store()),
        config,
    )
}
