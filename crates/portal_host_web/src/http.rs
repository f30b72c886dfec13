//! `window.fetch`-backed HTTP client.

use portal_host::{HttpClient, HttpFuture, HttpRequest, HttpResponse};

#[derive(Debug, Clone, Copy, Default)]
/// Same-origin HTTP client backed by the Fetch API.
///
/// Requests carry same-origin credentials so the session cookie reaches the backend. Non-2xx
/// statuses resolve to `Ok`; only a rejected fetch or an unreadable body is an `Err`.
pub struct WebHttpClient;

impl HttpClient for WebHttpClient {
    fn send<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a, Result<HttpResponse, String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                fetch(request).await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(format!(
                    "fetch is only available in the browser ({} {})",
                    request.method.as_str(),
                    request.path
                ))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, String> {
    use portal_host::HttpBody;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let js_err = |context: &str, err: JsValue| format!("{context}: {err:?}");

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let init = web_sys::RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_credentials(web_sys::RequestCredentials::SameOrigin);

    let headers = web_sys::Headers::new().map_err(|e| js_err("headers", e))?;
    for (name, value) in &request.headers {
        headers
            .set(name, value)
            .map_err(|e| js_err("set header", e))?;
    }

    match &request.body {
        HttpBody::Empty => {}
        HttpBody::Json(value) => {
            headers
                .set("Content-Type", "application/json")
                .map_err(|e| js_err("set header", e))?;
            init.set_body(&JsValue::from_str(&value.to_string()));
        }
        HttpBody::Form(fields) => {
            let form = web_sys::FormData::new().map_err(|e| js_err("form data", e))?;
            for (name, value) in fields {
                form.append_with_str(name, value)
                    .map_err(|e| js_err("form field", e))?;
            }
            init.set_body(&form);
        }
        HttpBody::DomForm { form_id } => {
            let element = window
                .document()
                .and_then(|document| document.get_element_by_id(form_id))
                .and_then(|element| element.dyn_into::<web_sys::HtmlFormElement>().ok())
                .ok_or_else(|| format!("form `#{form_id}` not found"))?;
            let form =
                web_sys::FormData::new_with_form(&element).map_err(|e| js_err("form data", e))?;
            init.set_body(&form);
        }
    }
    init.set_headers(&headers);

    let js_request = web_sys::Request::new_with_str_and_init(&request.path, &init)
        .map_err(|e| js_err("build request", e))?;
    let response = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(|e| js_err("fetch rejected", e))?
        .dyn_into::<web_sys::Response>()
        .map_err(|e| js_err("fetch result", e))?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(|e| js_err("read body", e))?)
        .await
        .map_err(|e| js_err("read body", e))?
        .as_string()
        .unwrap_or_default();

    Ok(HttpResponse::new(status, body))
}
