//! Browser fetch transport

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use super::client::{ApiRequest, RawResponse};
use super::error::FetchError;

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Send `request` with `window.fetch` (CORS, credentials included)
pub(super) async fn send(request: &ApiRequest) -> Result<RawResponse, FetchError> {
    let endpoint = request.url.as_str();
    let network = |value: JsValue| FetchError::network(endpoint, js_message(value));

    let window = web_sys::window().ok_or_else(|| FetchError::network(endpoint, "no window"))?;

    let headers = Headers::new().map_err(network)?;
    for (name, value) in &request.headers {
        headers.set(name, value).map_err(network)?;
    }

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    init.set_credentials(RequestCredentials::Include);
    init.set_headers(&headers);

    let js_request = Request::new_with_str_and_init(endpoint, &init).map_err(network)?;
    let promise: js_sys::Promise = window.fetch_with_request(&js_request);
    let response: Response = JsFuture::from(promise)
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    let status = response.status();
    let body = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?
        .as_string()
        .unwrap_or_default();

    Ok(RawResponse { status, body })
}
