//! Entry layer that mounts the portal glue into the server-rendered pages.

use portal_host::PortalConfig;

/// DOM id of the element the notification bell mounts into.
pub const NOTIFICATION_MOUNT_ID: &str = "notificationCenter";

/// Reads the page's embedded configuration, falling back to defaults when it is malformed.
pub fn page_config() -> PortalConfig {
    portal_host_web::load_page_config().unwrap_or_else(|err| {
        leptos::logging::warn!("portal config ignored, using defaults: {err}");
        PortalConfig::default()
    })
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn notification_mount() -> Result<web_sys::HtmlElement, portal_runtime::PortalError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(NOTIFICATION_MOUNT_ID))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(portal_runtime::PortalError::MissingElement(
            NOTIFICATION_MOUNT_ID,
        ))
}

/// Mounts the notification bell (when the page has a slot for it) and the page controllers.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use leptos::view;
    use portal_runtime::{NotificationCenter, PortalControllers, PortalProvider};

    console_error_panic_hook::set_once();
    let services = portal_host_web::build_portal_services(page_config());

    match notification_mount() {
        Ok(host) => {
            let services = services.clone();
            leptos::mount_to(host, move || {
                view! {
                    <PortalProvider services=services>
                        <NotificationCenter />
                    </PortalProvider>
                }
            });
        }
        Err(err) => leptos::logging::log!("notification bell not mounted: {err}"),
    }

    leptos::mount_to_body(move || {
        view! {
            <PortalProvider services=services>
                <PortalControllers />
            </PortalProvider>
        }
    });
}
