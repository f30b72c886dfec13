//! Leptos context carrying the injected host services.

use leptos::*;
use portal_host::PortalServices;

#[derive(Clone, Copy)]
/// Leptos context shared by every portal component in one mounted tree.
pub struct PortalContext {
    /// Host service bundle assembled by the entry layer.
    pub services: StoredValue<PortalServices>,
}

impl PortalContext {
    /// Returns a clone of the service bundle.
    pub fn services(&self) -> PortalServices {
        self.services.get_value()
    }
}

#[component]
/// Provides [`PortalContext`] to descendant components.
pub fn PortalProvider(
    /// Injected browser host bundle.
    services: PortalServices,
    children: Children,
) -> impl IntoView {
    provide_context(PortalContext {
        services: store_value(services),
    });
    children().into_view()
}

/// Returns the current [`PortalContext`].
///
/// # Panics
///
/// Panics if called outside [`PortalProvider`].
pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext not provided")
}
