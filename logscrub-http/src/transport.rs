//! The outbound request-execution boundary: a transport trait over owned
//! request/response parts, plus the reqwest-backed implementation.
//!
//! Working over owned buffers keeps bodies replayable on every path: the
//! interceptor sanitizes from the same bytes the inner transport sends, and
//! callers always receive a fully-buffered response body.

use std::collections::BTreeMap;

use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct RequestParts {
    pub method: String,
    pub url: url::Url,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: Vec<u8>,
}

impl RequestParts {
    pub fn new(method: impl Into<String>, url: url::Url) -> Self {
        Self {
            method: method.into(),
            url,
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.entry(name.into()).or_default().push(value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// First `Content-Type` value, matched case-insensitively.
    pub fn content_type(&self) -> &str {
        content_type_of(&self.headers)
    }
}

#[derive(Debug, Clone)]
pub struct ResponseParts {
    pub status: u16,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: Vec<u8>,
}

impl ResponseParts {
    pub fn content_type(&self) -> &str {
        content_type_of(&self.headers)
    }
}

pub(crate) fn content_type_of(headers: &BTreeMap<String, Vec<String>>) -> &str {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
        .unwrap_or("")
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("timeout")]
    Timeout,
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    #[error("http error: {0}")]
    Other(String),
}

/// Send a request, get a response or an error. Implementations must be safe
/// for unrestricted concurrent use.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: RequestParts) -> Result<ResponseParts, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    async fn send(&self, req: RequestParts) -> Result<ResponseParts, TransportError> {
        (**self).send(req).await
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        // Client creation should never fail in practice, but if it does, we'll get a better error
        // when trying to use it rather than panicking at initialization.
        let client = reqwest::Client::builder()
            .user_agent(concat!("logscrub/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                panic!("failed to create reqwest HTTP client: {e}. This is a bug - please report it.");
            });
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, req: RequestParts) -> Result<ResponseParts, TransportError> {
        let method: reqwest::Method = req
            .method
            .parse()
            .map_err(|e: <reqwest::Method as std::str::FromStr>::Err| {
                TransportError::Other(e.to_string())
            })?;

        let mut rb = self.client.request(method, req.url);
        for (name, values) in &req.headers {
            for value in values {
                rb = rb.header(name, value);
            }
        }
        rb = rb.body(req.body);

        let resp = rb.send().await.map_err(map_reqwest_error)?;
        let status = resp.status().as_u16();

        let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in resp.headers().iter() {
            if let Ok(s) = value.to_str() {
                headers.entry(name.to_string()).or_default().push(s.to_string());
            }
        }

        // Buffer the full body so every consumer sees replayable bytes.
        let body = resp.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(ResponseParts { status, headers, body })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return TransportError::Network(e.to_string());
    }
    TransportError::Other(e.to_string())
}
