//! Configuration for the logging transport.

use std::fmt;
use std::sync::Arc;

use logscrub_core::classify::is_binary_content;
use logscrub_core::SanitizerConfig;

use crate::logger::{Logger, TracingLogger};
use crate::transport::RequestParts;

pub type ShouldLog = Arc<dyn Fn(&RequestParts) -> bool + Send + Sync>;
pub type ShouldLogBody = Arc<dyn Fn(&RequestParts, &str, usize) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct LoggingConfig {
    pub logger: Arc<dyn Logger>,
    pub sanitizer: SanitizerConfig,
    pub log_request_body: bool,
    pub log_response_body: bool,
    pub log_headers: bool,
    /// Adds path/query/content-length detail to log entries.
    pub verbose: bool,
    /// When this returns false the call bypasses logging entirely.
    pub should_log: Option<ShouldLog>,
    /// Per-call body opt-out, evaluated as `(request, content_type, size)`.
    pub should_log_body: Option<ShouldLogBody>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logger: Arc::new(TracingLogger),
            sanitizer: SanitizerConfig::default(),
            log_request_body: true,
            log_response_body: true,
            log_headers: true,
            verbose: false,
            should_log: None,
            // Skip file uploads and anything over 10MB.
            should_log_body: Some(Arc::new(|_req, content_type, size| {
                !is_binary_content(content_type) && size <= 10 * 1024 * 1024
            })),
        }
    }
}

impl LoggingConfig {
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: SanitizerConfig) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn without_body_logging(mut self) -> Self {
        self.log_request_body = false;
        self.log_response_body = false;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_should_log(
        mut self,
        predicate: impl Fn(&RequestParts) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_log = Some(Arc::new(predicate));
        self
    }

    pub fn with_should_log_body(
        mut self,
        predicate: impl Fn(&RequestParts, &str, usize) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.should_log_body = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfig")
            .field("log_request_body", &self.log_request_body)
            .field("log_response_body", &self.log_response_body)
            .field("log_headers", &self.log_headers)
            .field("verbose", &self.verbose)
            .field("should_log", &self.should_log.is_some())
            .field("should_log_body", &self.should_log_body.is_some())
            .finish_non_exhaustive()
    }
}
