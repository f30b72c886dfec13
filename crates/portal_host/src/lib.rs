//! Typed host contracts and wire models shared by the portal runtime and browser adapters.
//!
//! This crate is the API-first boundary of the portal client. It owns the HTTP, CSRF and
//! preference-store contracts, the backend JSON payloads, and the page configuration, while
//! the concrete browser adapters live in `portal_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod csrf;
pub mod host;
pub mod http;
pub mod models;
pub mod storage;
pub mod time;

pub use config::{PortalConfig, PortalRoutes, PORTAL_CONFIG_ELEMENT_ID};
pub use csrf::{
    attach_csrf_header, cookie_value, CsrfSource, StaticCsrfToken, CSRF_COOKIE_NAME,
    CSRF_HEADER_NAME,
};
pub use host::PortalServices;
pub use http::{
    fetch_json, read_json_any_status, send_expect_success, DeferredReply, HttpBody, HttpClient,
    HttpFuture, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient, RequestError,
    ScriptedHttpClient,
};
pub use models::{
    non_blank, status_badge_class, status_label, ApplicationDetail, ApplicationStatus,
    FormSubmissionReply, JobDetail, Notification, NotificationFeed, NotificationId,
};
pub use storage::prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use time::unix_time_ms_now;
