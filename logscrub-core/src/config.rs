//! Sanitizer policy configuration.
//!
//! A [`SanitizerConfig`] is built once and stays read-only for the lifetime
//! of whatever holds it; all per-call data is passed as arguments.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::classify::{is_binary_content, is_json_content_type, is_xml_content_type, looks_like_base64};
use crate::detect::{default_patterns, SecretPattern};

/// What to do with a body before (or instead of) structural sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyAction {
    /// Drop the body from the log entirely, emitting the rule message instead.
    Skip,
    /// Log only the first `max_body_size` bytes plus a truncation notice.
    Truncate,
    /// Log shape metadata (size, key/item counts) and no values.
    Summarize,
    /// Proceed straight to format-specific sanitization.
    Sanitize,
}

/// How sensitive header values are masked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMaskMode {
    /// Replace the whole value with the mask.
    Full,
    /// Keep the first and last four characters, mask the middle.
    #[default]
    Partial,
}

pub type RuleCondition = Arc<dyn Fn(&str, &[u8], usize) -> bool + Send + Sync>;

/// One entry of the ordered body rule list. Rules are evaluated in declared
/// order against `(content_type, body, size)`; the first match wins.
#[derive(Clone)]
pub struct BodyRule {
    pub condition: RuleCondition,
    pub action: BodyAction,
    pub message: Option<String>,
}

impl BodyRule {
    pub fn new(
        condition: impl Fn(&str, &[u8], usize) -> bool + Send + Sync + 'static,
        action: BodyAction,
    ) -> Self {
        Self {
            condition: Arc::new(condition),
            action,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Debug for BodyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyRule")
            .field("action", &self.action)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Pattern-detection strategy. Only the regex engine ships today; the enum is
/// the seam where an allocation-free manual scanner would slot in.
#[derive(Debug, Clone)]
pub enum DetectorKind {
    PatternEngine(Vec<SecretPattern>),
}

impl Default for DetectorKind {
    fn default() -> Self {
        Self::PatternEngine(default_patterns())
    }
}

/// Immutable policy bundle consumed by [`crate::Sanitizer`].
///
/// `sensitive_fields` use case-insensitive *substring* matching (body field
/// names are unbounded and informally named), while `sensitive_headers` use
/// case-insensitive *exact* matching (headers are a small closed vocabulary
/// and over-redacting unrelated ones helps nobody).
#[derive(Debug, Clone)]
pub struct SanitizerConfig {
    pub sensitive_fields: Vec<String>,
    pub detector: DetectorKind,
    pub mask: String,
    pub max_body_size: usize,
    pub body_rules: Vec<BodyRule>,
    pub header_mask_mode: HeaderMaskMode,
    pub sensitive_headers: Vec<String>,
}

pub const DEFAULT_MASK: &str = "***REDACTED***";
pub const DEFAULT_MAX_BODY_SIZE: usize = 100 * 1024;

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            sensitive_fields: default_sensitive_fields(),
            detector: DetectorKind::default(),
            mask: DEFAULT_MASK.to_string(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            body_rules: default_body_rules(DEFAULT_MAX_BODY_SIZE),
            header_mask_mode: HeaderMaskMode::Partial,
            sensitive_headers: default_sensitive_headers(),
        }
    }
}

pub fn default_sensitive_fields() -> Vec<String> {
    [
        // Authentication
        "password",
        "passwd",
        "pwd",
        "secret",
        "token",
        "api_key",
        "apikey",
        "api_secret",
        "access_token",
        "refresh_token",
        "client_secret",
        "client_id",
        "authorization",
        "auth",
        "bearer",
        "session",
        "session_id",
        "cookie",
        // Personal data
        "ssn",
        "social_security",
        "passport",
        "driver_license",
        "tax_id",
        "ein",
        "vat",
        // Financial data
        "credit_card",
        "card_number",
        "card_num",
        "cvv",
        "cvc",
        "pin",
        "account_number",
        "routing_number",
        "iban",
        "swift",
        // Cryptography
        "private_key",
        "public_key",
        "encryption_key",
        "signing_key",
        "certificate",
        "cert",
        "key",
        "pem",
        // Vendor-specific
        "stripe_key",
        "aws_secret",
        "gcp_key",
        "azure_key",
        "webhook_secret",
        "signing_secret",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn default_sensitive_headers() -> Vec<String> {
    [
        "authorization",
        "proxy-authorization",
        "cookie",
        "set-cookie",
        "x-api-key",
        "x-auth-token",
        "x-access-token",
        "api-key",
        "apikey",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The default ordered rule list: skip binary, skip large base64 blobs,
/// summarize very large JSON/XML, truncate anything over `max_body_size`.
pub fn default_body_rules(max_body_size: usize) -> Vec<BodyRule> {
    vec![
        BodyRule::new(
            |content_type, _body, _size| is_binary_content(content_type),
            BodyAction::Skip,
        )
        .with_message("[Binary content - not logged]"),
        BodyRule::new(
            |_content_type, body, size| size > 1024 && looks_like_base64(body),
            BodyAction::Skip,
        )
        .with_message("[Base64 encoded data - not logged]"),
        BodyRule::new(
            |content_type, _body, size| {
                size > 500 * 1024
                    && (is_json_content_type(content_type) || is_xml_content_type(content_type))
            },
            BodyAction::Summarize,
        ),
        BodyRule::new(
            move |_content_type, _body, size| size > max_body_size,
            BodyAction::Truncate,
        ),
    ]
}
