//! The logging transport: wraps an [`HttpTransport`], logs sanitized
//! request/response detail, and passes the actual traffic through untouched.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;

use logscrub_core::{format_size, Sanitizer};

use crate::config::LoggingConfig;
use crate::transport::{HttpTransport, RequestParts, ResponseParts, TransportError};

/// Drop-in wrapper around a transport. Success and error semantics of the
/// inner transport are preserved exactly; the only added effect is log
/// output, and everything written to the log has passed the sanitizer.
pub struct LoggingTransport<T> {
    inner: T,
    sanitizer: Sanitizer,
    config: LoggingConfig,
}

impl<T: HttpTransport> LoggingTransport<T> {
    pub fn new(inner: T, config: LoggingConfig) -> Self {
        let sanitizer = Sanitizer::new(config.sanitizer.clone());
        Self {
            inner,
            sanitizer,
            config,
        }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    fn log_request(&self, req: &RequestParts) {
        let mut fields: Vec<(&str, Value)> = vec![
            ("method", Value::from(req.method.as_str())),
            ("url", Value::from(self.sanitizer.sanitize_url(&req.url))),
        ];
        if let Some(host) = req.url.host_str() {
            fields.push(("host", Value::from(host)));
        }

        if self.config.verbose {
            fields.push(("path", Value::from(req.url.path())));
            if let Some(query) = req.url.query() {
                if !query.is_empty() {
                    fields.push(("query", Value::from(self.sanitizer.sanitize_query(query))));
                }
            }
        }

        if self.config.log_headers && !req.headers.is_empty() {
            fields.push(("headers", headers_value(&self.sanitizer, &req.headers)));
        }

        if self.config.log_request_body && !req.body.is_empty() {
            fields.push(("body", self.body_value(req, req.content_type(), &req.body)));
        }

        self.config.logger.info("HTTP request", &fields);
    }

    fn log_response(
        &self,
        req: &RequestParts,
        sanitized_url: &str,
        resp: &ResponseParts,
        duration_ms: u128,
    ) {
        let mut fields: Vec<(&str, Value)> = vec![
            ("method", Value::from(req.method.as_str())),
            ("url", Value::from(sanitized_url)),
            ("status", Value::from(resp.status)),
            ("duration_ms", Value::from(duration_ms as u64)),
        ];

        if self.config.verbose && !resp.body.is_empty() {
            fields.push(("content_length", Value::from(format_size(resp.body.len()))));
        }

        if self.config.log_headers && !resp.headers.is_empty() {
            fields.push(("headers", headers_value(&self.sanitizer, &resp.headers)));
        }

        if self.config.log_response_body && !resp.body.is_empty() {
            fields.push(("body", self.body_value(req, resp.content_type(), &resp.body)));
        }

        // Server errors are loud, client errors visible, the rest debug-only.
        if resp.status >= 500 {
            self.config.logger.error("HTTP response", &fields);
        } else if resp.status >= 400 {
            self.config.logger.info("HTTP response", &fields);
        } else {
            self.config.logger.debug("HTTP response", &fields);
        }
    }

    fn log_error(
        &self,
        req: &RequestParts,
        sanitized_url: &str,
        err: &TransportError,
        duration_ms: u128,
    ) {
        self.config.logger.error(
            "HTTP request failed",
            &[
                ("method", Value::from(req.method.as_str())),
                ("url", Value::from(sanitized_url)),
                ("error", Value::from(err.to_string())),
                ("duration_ms", Value::from(duration_ms as u64)),
            ],
        );
    }

    fn body_value(&self, req: &RequestParts, content_type: &str, body: &[u8]) -> Value {
        let should_log = self
            .config
            .should_log_body
            .as_ref()
            .map(|pred| pred(req, content_type, body.len()))
            .unwrap_or(true);

        if should_log {
            Value::from(self.sanitizer.sanitize_body(body, content_type))
        } else {
            Value::from(format!("[Body not logged - size: {}]", format_size(body.len())))
        }
    }
}

fn headers_value(
    sanitizer: &Sanitizer,
    headers: &std::collections::BTreeMap<String, Vec<String>>,
) -> Value {
    Value::Object(
        sanitizer
            .sanitize_headers(headers)
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect(),
    )
}

#[async_trait]
impl<T: HttpTransport> HttpTransport for LoggingTransport<T> {
    async fn send(&self, req: RequestParts) -> Result<ResponseParts, TransportError> {
        if let Some(pred) = &self.config.should_log {
            if !pred(&req) {
                return self.inner.send(req).await;
            }
        }

        self.log_request(&req);

        // Keep the request metadata for response/error logging without
        // cloning the body.
        let req_meta = RequestParts {
            method: req.method.clone(),
            url: req.url.clone(),
            headers: req.headers.clone(),
            body: Vec::new(),
        };
        let sanitized_url = self.sanitizer.sanitize_url(&req.url);

        let start = Instant::now();
        let result = self.inner.send(req).await;
        let duration_ms = start.elapsed().as_millis();

        match result {
            Ok(resp) => {
                self.log_response(&req_meta, &sanitized_url, &resp, duration_ms);
                Ok(resp)
            }
            Err(err) => {
                self.log_error(&req_meta, &sanitized_url, &err, duration_ms);
                Err(err)
            }
        }
    }
}
