//! The HTTP request executor.
//!
//! One method performs every remote call: it builds the request against the
//! configured base URL, applies the header policy, injects the bearer token,
//! and normalizes failures into the single API error kind. There is no
//! retry, timeout enforcement, backoff, or caching at this layer.

use nevada_core::{NevadaError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The request payload variants the executor understands.
pub enum RequestBody {
    /// No payload (GET/DELETE).
    Empty,
    /// JSON payload, sent with `Content-Type: application/json`.
    Json(Value),
    /// Multipart form payload; the transport sets the boundary, so no
    /// content type is forced here.
    Multipart(Form),
}

/// Client for the Nevada remote API.
///
/// Holds a connection-pooling `reqwest::Client` and the base URL. All
/// endpoint methods in this crate are defined on this type; cloning is
/// cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (trailing slash trimmed).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The configured base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one request and returns the parsed JSON body, if any.
    ///
    /// Header policy: multipart bodies get only Authorization plus caller
    /// headers; everything else defaults to JSON Accept/Content-Type, with
    /// caller headers overriding the defaults. Every request carries
    /// `Cache-Control: no-store`.
    ///
    /// A non-2xx status fails with [`NevadaError::Api`] carrying the message
    /// extracted from the body's `detail`/`message` field, the status code,
    /// and the raw body. An unparsable response body is `None`, not an
    /// error. Transport failures map into the same error kind with status 0.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        token: Option<&str>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending request");

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        if !matches!(body, RequestBody::Multipart(_)) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| NevadaError::internal(format!("invalid header name: {}", e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| NevadaError::internal(format!("invalid header value: {}", e)))?;
            headers.insert(name, value);
        }
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| NevadaError::internal(format!("invalid bearer token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut request = self.client.request(method, &url).headers(headers);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.body(value.to_string()),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let response = request
            .send()
            .await
            .map_err(|e| NevadaError::transport(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let body = parse_json(response).await;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), %url, "request failed");
            return Err(NevadaError::from_response(status.as_u16(), body));
        }

        Ok(body)
    }

    /// Performs one request and deserializes the body into `T`.
    ///
    /// An absent body deserializes from JSON null, which fails for record
    /// types; typed endpoints always expect a body.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        token: Option<&str>,
    ) -> Result<T> {
        let value = self
            .send(method, path, body, token, &[])
            .await?
            .unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }

    /// Performs a request whose response is at most a `{"message": ...}`
    /// acknowledgement (deletes, history clearing).
    pub async fn send_for_message(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<Option<String>> {
        let body = self
            .send(method, path, RequestBody::Empty, token, &[])
            .await?;
        Ok(body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .map(|s| s.to_string()))
    }
}

/// Parses the response body as JSON, treating any failure as "no body".
async fn parse_json(response: Response) -> Option<Value> {
    let text = response.text().await.ok()?;
    serde_json::from_str(&text).ok()
}
