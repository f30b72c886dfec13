//! `document.cookie`-backed CSRF token source.

use portal_host::{cookie_value, CsrfSource};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reads the CSRF token from the page cookies on every request.
///
/// The cookie is re-read each time because the backend may rotate it after login.
pub struct DocumentCsrfSource {
    cookie_name: String,
}

impl DocumentCsrfSource {
    /// Creates a source for the given cookie name.
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }
}

impl CsrfSource for DocumentCsrfSource {
    fn csrf_token(&self) -> Option<String> {
        cookie_value(&document_cookie()?, &self.cookie_name)
    }
}

fn document_cookie() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let document = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        document.cookie().ok().filter(|cookies| !cookies.is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
