//! HTTP client contract, typed request helpers, and in-memory adapters.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use futures::channel::oneshot;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{HttpMethod, HttpRequest, HttpResponse};

/// Object-safe boxed future used by [`HttpClient`].
pub type HttpFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that performs same-origin HTTP requests.
///
/// Implementations resolve to `Err` only for transport failures. Any status code, including
/// 4xx/5xx, is a successful [`HttpResponse`]; callers decide what a rejection means.
pub trait HttpClient {
    /// Sends one request and reads the full response body.
    fn send<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a, Result<HttpResponse, String>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure categories for portal requests.
pub enum RequestError {
    /// Network unreachable, fetch rejected, or the adapter is unavailable.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        /// Status code returned by the server.
        status: u16,
    },
    /// The body was not the JSON document the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Sends `request`, requires a 2xx status, and decodes the body as `T`.
///
/// # Errors
///
/// Returns [`RequestError::Transport`], [`RequestError::Rejected`] or [`RequestError::Decode`].
pub async fn fetch_json<C: HttpClient + ?Sized, T: DeserializeOwned>(
    client: &C,
    request: HttpRequest,
) -> Result<T, RequestError> {
    let response = client
        .send(request)
        .await
        .map_err(RequestError::Transport)?;
    if !response.is_success() {
        return Err(RequestError::Rejected {
            status: response.status,
        });
    }
    response.decode_json().map_err(RequestError::Decode)
}

/// Sends `request` and requires a 2xx status; the body is ignored.
///
/// # Errors
///
/// Returns [`RequestError::Transport`] or [`RequestError::Rejected`].
pub async fn send_expect_success<C: HttpClient + ?Sized>(
    client: &C,
    request: HttpRequest,
) -> Result<(), RequestError> {
    let response = client
        .send(request)
        .await
        .map_err(RequestError::Transport)?;
    if response.is_success() {
        Ok(())
    } else {
        Err(RequestError::Rejected {
            status: response.status,
        })
    }
}

/// Sends `request` and decodes the body as `T` whatever the status.
///
/// Used by form endpoints that answer `400` with a structured `{ success: false, .. }` body.
///
/// # Errors
///
/// Returns [`RequestError::Transport`] or [`RequestError::Decode`].
pub async fn read_json_any_status<C: HttpClient + ?Sized, T: DeserializeOwned>(
    client: &C,
    request: HttpRequest,
) -> Result<(u16, T), RequestError> {
    let response = client
        .send(request)
        .await
        .map_err(RequestError::Transport)?;
    let decoded = response.decode_json().map_err(RequestError::Decode)?;
    Ok((response.status, decoded))
}

#[derive(Debug, Clone, Copy, Default)]
/// HTTP client for targets without a network transport; every request fails.
pub struct NoopHttpClient;

impl HttpClient for NoopHttpClient {
    fn send<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            Err(format!(
                "no http transport for {} {}",
                request.method.as_str(),
                request.path
            ))
        })
    }
}

type ScriptKey = (HttpMethod, String);

enum ScriptedReply {
    Ready(Result<HttpResponse, String>),
    Deferred(oneshot::Receiver<Result<HttpResponse, String>>),
}

#[derive(Default)]
struct ScriptState {
    replies: HashMap<ScriptKey, VecDeque<ScriptedReply>>,
    sent: Vec<HttpRequest>,
}

/// Completion handle for a reply queued with [`ScriptedHttpClient::push_deferred`].
pub struct DeferredReply {
    sender: oneshot::Sender<Result<HttpResponse, String>>,
}

impl DeferredReply {
    /// Resolves the pending request with `response`.
    pub fn respond(self, response: HttpResponse) {
        let _ = self.sender.send(Ok(response));
    }

    /// Resolves the pending request with a transport failure.
    pub fn fail(self, message: impl Into<String>) {
        let _ = self.sender.send(Err(message.into()));
    }
}

#[derive(Clone, Default)]
/// In-memory HTTP client that replays canned replies per method and path.
///
/// Replies queued for the same route are consumed first-in first-out. Every request is
/// recorded, including requests that found no scripted reply.
pub struct ScriptedHttpClient {
    inner: Rc<RefCell<ScriptState>>,
}

impl ScriptedHttpClient {
    /// Queues a completed response.
    pub fn push_response(&self, method: HttpMethod, path: &str, response: HttpResponse) {
        self.push(method, path, ScriptedReply::Ready(Ok(response)));
    }

    /// Queues a transport failure.
    pub fn push_failure(&self, method: HttpMethod, path: &str, message: &str) {
        self.push(method, path, ScriptedReply::Ready(Err(message.to_string())));
    }

    /// Queues a reply that stays pending until the returned handle resolves it.
    pub fn push_deferred(&self, method: HttpMethod, path: &str) -> DeferredReply {
        let (sender, receiver) = oneshot::channel();
        self.push(method, path, ScriptedReply::Deferred(receiver));
        DeferredReply { sender }
    }

    /// Returns every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().sent.clone()
    }

    /// Returns how many requests hit `method` + `path`.
    pub fn request_count(&self, method: HttpMethod, path: &str) -> usize {
        self.inner
            .borrow()
            .sent
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }

    fn push(&self, method: HttpMethod, path: &str, reply: ScriptedReply) {
        self.inner
            .borrow_mut()
            .replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }
}

impl HttpClient for ScriptedHttpClient {
    fn send<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            let key = (request.method, request.path.clone());
            let reply = {
                let mut state = self.inner.borrow_mut();
                state.sent.push(request);
                state
                    .replies
                    .get_mut(&key)
                    .and_then(|queue| queue.pop_front())
            };

            match reply {
                Some(ScriptedReply::Ready(result)) => result,
                Some(ScriptedReply::Deferred(receiver)) => receiver
                    .await
                    .unwrap_or_else(|_| Err("scripted reply dropped".to_string())),
                None => Err(format!(
                    "no scripted reply for {} {}",
                    key.0.as_str(),
                    key.1
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;
    use crate::http::HttpBody;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Count {
        count: u32,
    }

    #[test]
    fn fetch_json_classifies_status_and_body_failures() {
        let client = ScriptedHttpClient::default();
        client.push_response(HttpMethod::Get, "/c/", HttpResponse::new(200, "{\"count\":4}"));
        client.push_response(HttpMethod::Get, "/c/", HttpResponse::new(500, "{\"count\":4}"));
        client.push_response(HttpMethod::Get, "/c/", HttpResponse::new(200, "<html>"));

        let ok: Result<Count, _> = block_on(fetch_json(&client, HttpRequest::get("/c/")));
        assert_eq!(ok, Ok(Count { count: 4 }));

        let rejected: Result<Count, _> = block_on(fetch_json(&client, HttpRequest::get("/c/")));
        assert_eq!(rejected, Err(RequestError::Rejected { status: 500 }));

        let garbled: Result<Count, _> = block_on(fetch_json(&client, HttpRequest::get("/c/")));
        assert!(matches!(garbled, Err(RequestError::Decode(_))));

        let exhausted: Result<Count, _> = block_on(fetch_json(&client, HttpRequest::get("/c/")));
        assert!(matches!(exhausted, Err(RequestError::Transport(_))));
        assert_eq!(client.request_count(HttpMethod::Get, "/c/"), 4);
    }

    #[test]
    fn read_json_any_status_keeps_structured_rejections() {
        let client = ScriptedHttpClient::default();
        client.push_response(
            HttpMethod::Post,
            "/form/",
            HttpResponse::new(400, "{\"count\":0}"),
        );
        let result: Result<(u16, Count), _> = block_on(read_json_any_status(
            &client,
            HttpRequest::post("/form/", HttpBody::Empty),
        ));
        assert_eq!(result, Ok((400, Count { count: 0 })));
    }

    #[test]
    fn deferred_reply_resolves_when_released() {
        let client = ScriptedHttpClient::default();
        let pending = client.push_deferred(HttpMethod::Get, "/slow/");
        pending.respond(HttpResponse::new(204, ""));
        let result = block_on(send_expect_success(&client, HttpRequest::get("/slow/")));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn noop_client_reports_transport_failure() {
        let result = block_on(send_expect_success(&NoopHttpClient, HttpRequest::get("/x/")));
        assert!(matches!(result, Err(RequestError::Transport(_))));
    }
}
