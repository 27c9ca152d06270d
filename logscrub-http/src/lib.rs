#![forbid(unsafe_code)]

//! Logging transport wrapper for outbound HTTP.
//!
//! [`LoggingTransport`] wraps any [`HttpTransport`] and logs every call
//! (method, URL, headers, body, status, duration, errors) after running it
//! through the `logscrub-core` sanitizer. Traffic itself is never altered:
//! the wrapped transport sees the same request, the caller sees the same
//! response or error.

pub mod config;
pub mod intercept;
pub mod logger;
pub mod transport;

pub use crate::config::LoggingConfig;
pub use crate::intercept::LoggingTransport;
pub use crate::logger::{LogEntry, Level, Logger, MemoryLogger, TracingLogger};
pub use crate::transport::{
    HttpTransport, ReqwestTransport, RequestParts, ResponseParts, TransportError,
};
