//! HTTP Data Client
//!
//! Builds authenticated GET requests against the shelter API and decodes
//! JSON responses. Request building and response decoding are plain
//! functions; only `transport::send` touches the browser.

use std::fmt;
use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::credentials::CredentialProvider;
use super::error::FetchError;
use super::transport;

/// Fully resolved request, ready for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw status + body handed back by the transport
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct ApiClient {
    host: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").field("host", &self.host).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(host: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        Self { host, credentials }
    }

    /// Resolve `path` + `query` against the host and attach auth headers
    pub fn build_request(&self, path: &str, query: &[(&str, String)]) -> ApiRequest {
        let mut url = format!("{}/{}", self.host, path.trim_start_matches('/'));
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.extend(utf8_percent_encode(value, NON_ALPHANUMERIC));
        }

        // A missing token is sent as an empty bearer value
        let token = self.credentials.bearer_token().unwrap_or_default();
        ApiRequest {
            url,
            headers: vec![
                ("Authorization", format!("Bearer {token}")),
                ("Accept", "application/json".to_string()),
                ("Content-Type", "application/json".to_string()),
            ],
        }
    }

    /// GET a JSON document of type `T`
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let request = self.build_request(path, query);
        let response = self.send(&request).await?;
        decode_response(&request.url, &response).inspect_err(|e| log::error!("[API] {e}"))
    }

    /// GET a JSON document that may be absent (404 or `null` body)
    pub async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, FetchError> {
        let request = self.build_request(path, query);
        let response = self.send(&request).await?;
        decode_optional(&request.url, &response).inspect_err(|e| log::error!("[API] {e}"))
    }

    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, FetchError> {
        log::debug!("[API] GET {}", request.url);
        let response = transport::send(request)
            .await
            .inspect_err(|e| log::error!("[API] {e}"))?;
        log::debug!("[API] {} -> {}", request.url, response.status);
        Ok(response)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw response into `T`, failing on non-2xx status or bad JSON
pub fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    response: &RawResponse,
) -> Result<T, FetchError> {
    if !is_success(response.status) {
        return Err(FetchError::Status {
            endpoint: endpoint.to_string(),
            status: response.status,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| FetchError::Parse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Like `decode_response`, but 404 and an empty/`null` body mean "no record"
pub fn decode_optional<T: DeserializeOwned>(
    endpoint: &str,
    response: &RawResponse,
) -> Result<Option<T>, FetchError> {
    if response.status == 404 {
        return Ok(None);
    }
    if is_success(response.status) && response.body.trim().is_empty() {
        return Ok(None);
    }
    decode_response(endpoint, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StaticCredentials;
    use crate::models::Breed;

    fn client(token: Option<&str>) -> ApiClient {
        ApiClient::new(
            "https://api.example.com/",
            Arc::new(StaticCredentials(token.map(str::to_string))),
        )
    }

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_build_request_url_and_query() {
        let request = client(Some("abc")).build_request(
            "/breeds",
            &[("page", "2".to_string()), ("size", "12".to_string())],
        );
        assert_eq!(request.url, "https://api.example.com/breeds?page=2&size=12");
    }

    #[test]
    fn test_query_values_are_encoded() {
        let request = client(None).build_request("dogs", &[("q", "owczarek niemiecki&x".to_string())]);
        assert_eq!(request.url, "https://api.example.com/dogs?q=owczarek%20niemiecki%26x");
    }

    #[test]
    fn test_bearer_header() {
        let request = client(Some("secret")).build_request("/dogs/1", &[]);
        assert_eq!(request.header("authorization"), Some("Bearer secret"));
        assert_eq!(request.header("Accept"), Some("application/json"));
    }

    #[test]
    fn test_missing_token_sends_empty_bearer() {
        let request = client(None).build_request("/dogs/1", &[]);
        assert_eq!(request.header("Authorization"), Some("Bearer "));
    }

    #[test]
    fn test_decode_success() {
        let breeds: Vec<Breed> =
            decode_response("/breeds", &response(200, r#"[{"id":1,"name":"Beagle"}]"#)).unwrap();
        assert_eq!(breeds.len(), 1);
    }

    #[test]
    fn test_decode_http_error() {
        let err = decode_response::<Vec<Breed>>("/breeds", &response(500, "oops")).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.endpoint(), "/breeds");
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_response::<Vec<Breed>>("/breeds", &response(200, "{not json")).unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn test_optional_not_found() {
        let found = decode_optional::<Breed>("/dogs/9", &response(404, "")).unwrap();
        assert_eq!(found, None);
        let null_body = decode_optional::<Breed>("/dogs/9", &response(200, "null")).unwrap();
        assert_eq!(null_body, None);
    }

    #[test]
    fn test_optional_other_errors_propagate() {
        let err = decode_optional::<Breed>("/dogs/9", &response(503, "")).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }
}
