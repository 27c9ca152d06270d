#![forbid(unsafe_code)]

//! Wire-format-aware sanitizer for HTTP traffic logging.
//!
//! Redacts sensitive content from bodies (JSON, XML, form-urlencoded,
//! multipart, plain text), headers, and query strings before they reach a
//! log sink. Sensitivity is decided two ways: structured field names matched
//! against a configurable list, and raw text scanned for known secret shapes
//! (bearer tokens, vendor API keys, JWTs, PEM key blocks, card numbers).
//! Oversized bodies are skipped, truncated, or summarized by an ordered rule
//! list before any structural work happens.
//!
//! Sanitization never fails: a body that cannot be parsed in its declared
//! format degrades to plain-text pattern scanning, and the worst case is
//! reduced redaction coverage, never an error surfaced to the caller.

pub mod classify;
pub mod config;
pub mod detect;
mod fields;
pub mod sanitize;

pub use crate::classify::{classify, ContentClass};
pub use crate::config::{
    default_body_rules, default_sensitive_fields, default_sensitive_headers, BodyAction, BodyRule,
    DetectorKind, HeaderMaskMode, SanitizerConfig,
};
pub use crate::detect::{default_patterns, mask_secrets, SecretPattern};
pub use crate::sanitize::{format_size, Sanitizer};
