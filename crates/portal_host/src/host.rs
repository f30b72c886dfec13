//! Injected service bundle shared by every mounted portal component.

use std::rc::Rc;

use crate::{
    attach_csrf_header, CsrfSource, HttpClient, HttpRequest, NoopHttpClient, NoopPrefsStore,
    PortalConfig, PortalRoutes, PrefsStore, StaticCsrfToken,
};

#[derive(Clone)]
/// Host services plus the page configuration they were assembled for.
///
/// Browser builds get this from `portal_host_web::build_portal_services`; tests assemble it
/// from in-memory adapters.
pub struct PortalServices {
    http: Rc<dyn HttpClient>,
    csrf: Rc<dyn CsrfSource>,
    prefs: Rc<dyn PrefsStore>,
    config: PortalConfig,
}

impl Default for PortalServices {
    fn default() -> Self {
        Self::new(
            Rc::new(NoopHttpClient),
            Rc::new(StaticCsrfToken::default()),
            Rc::new(NoopPrefsStore),
            PortalConfig::default(),
        )
    }
}

impl PortalServices {
    /// Assembles a bundle from explicit adapters.
    pub fn new(
        http: Rc<dyn HttpClient>,
        csrf: Rc<dyn CsrfSource>,
        prefs: Rc<dyn PrefsStore>,
        config: PortalConfig,
    ) -> Self {
        Self {
            http,
            csrf,
            prefs,
            config,
        }
    }

    /// Returns the HTTP transport.
    pub fn http(&self) -> Rc<dyn HttpClient> {
        self.http.clone()
    }

    /// Returns the preference store.
    pub fn prefs(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the page configuration.
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Returns the endpoint builder for the page configuration.
    pub fn routes(&self) -> PortalRoutes {
        self.config.routes()
    }

    /// Adds the configured CSRF header to a state-changing request.
    pub fn with_csrf(&self, request: HttpRequest) -> HttpRequest {
        attach_csrf_header(request, self.csrf.as_ref(), &self.config.csrf_header)
    }
}
