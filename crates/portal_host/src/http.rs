//! Same-origin HTTP contracts used by every portal component.

pub mod service;
pub mod types;

pub use service::{
    fetch_json, read_json_any_status, send_expect_success, DeferredReply, HttpClient,
    HttpFuture, NoopHttpClient, RequestError, ScriptedHttpClient,
};
pub use types::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
