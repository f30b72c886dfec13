//! Browser (`wasm32`) implementations of [`portal_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer: Fetch-backed HTTP, `document.cookie`
//! CSRF lookup, `localStorage` preferences, and the DOM helpers the page components use to
//! read and patch server-rendered markup. Native builds compile to inert fallbacks so the
//! workspace tests run on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Concrete adapter factories and page-config loading for runtime wiring.
pub mod adapters;
pub mod cookies;
pub mod dom;
pub mod http;
pub mod storage;

pub use adapters::{
    build_portal_services, csrf_source, http_client, load_page_config, prefs_store,
};
pub use cookies::DocumentCsrfSource;
pub use dom::RowFields;
pub use http::WebHttpClient;
pub use storage::local_prefs::WebPrefsStore;
