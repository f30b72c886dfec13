//! CSRF token discovery for state-changing portal requests.

use crate::http::HttpRequest;

/// Cookie the portal backend issues the anti-forgery token under.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Header the backend expects the token echoed in.
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

/// Source of the current anti-forgery token.
pub trait CsrfSource {
    /// Returns the token, or `None` when the cookie is absent.
    fn csrf_token(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fixed token, for tests and for pages that embed the token directly.
pub struct StaticCsrfToken(pub Option<String>);

impl StaticCsrfToken {
    /// Wraps a known token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }
}

impl CsrfSource for StaticCsrfToken {
    fn csrf_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Extracts cookie `name` from a `document.cookie`-style header and URI-decodes its value.
///
/// Only the first match is considered. A value with a malformed escape yields `None`, so no
/// header is sent rather than a garbled token.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let raw = cookie_header
        .split(';')
        .find_map(|pair| pair.trim().strip_prefix(name)?.strip_prefix('='))?;
    if !escapes_are_well_formed(raw) {
        return None;
    }
    urlencoding::decode(raw).ok().map(|value| value.into_owned())
}

fn escapes_are_well_formed(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let hex = bytes.get(index + 1..index + 3);
            if !hex.is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            index += 3;
        } else {
            index += 1;
        }
    }
    true
}

/// Adds the token header to `request` when `source` has a token.
pub fn attach_csrf_header<S: CsrfSource + ?Sized>(
    request: HttpRequest,
    source: &S,
    header_name: &str,
) -> HttpRequest {
    match source.csrf_token() {
        Some(token) => request.with_header(header_name, token),
        None => request,
    }
}
