//! The sanitizer proper: body-rule evaluation, format dispatch, and the
//! format-specific walkers.

mod form;
mod headers;
mod json;
mod multipart;
mod size;
mod xml;

pub use size::format_size;

use regex::Regex;

use crate::classify::{classify, ContentClass};
use crate::config::{default_body_rules, BodyAction, DetectorKind, SanitizerConfig};
use crate::detect::mask_secrets;
use crate::fields;

/// Redacts sensitive content from HTTP bodies, headers, and query strings.
///
/// Construction is the only expensive step (regexes for XML field matching
/// are compiled up front); after that every method is a pure function of its
/// arguments and the sanitizer can be shared freely across tasks.
pub struct Sanitizer {
    config: SanitizerConfig,
    xml_tag_patterns: Vec<Regex>,
    xml_attr_patterns: Vec<Regex>,
    disposition_name: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl Sanitizer {
    /// Build a sanitizer. Empty config sections fall back to the built-in
    /// defaults rather than silently disabling redaction.
    pub fn new(mut config: SanitizerConfig) -> Self {
        if config.sensitive_fields.is_empty() {
            config.sensitive_fields = crate::config::default_sensitive_fields();
        }
        if config.sensitive_headers.is_empty() {
            config.sensitive_headers = crate::config::default_sensitive_headers();
        }
        if config.mask.is_empty() {
            config.mask = crate::config::DEFAULT_MASK.to_string();
        }
        if config.max_body_size == 0 {
            config.max_body_size = crate::config::DEFAULT_MAX_BODY_SIZE;
        }
        if config.body_rules.is_empty() {
            config.body_rules = default_body_rules(config.max_body_size);
        }

        let mut xml_tag_patterns = Vec::with_capacity(config.sensitive_fields.len());
        let mut xml_attr_patterns = Vec::with_capacity(config.sensitive_fields.len());
        for field in &config.sensitive_fields {
            let quoted = regex::escape(field);
            if let Ok(re) = Regex::new(&format!(r"(?i)(<{quoted}[^>]*>)([^<]+)(</{quoted}>)")) {
                xml_tag_patterns.push(re);
            }
            if let Ok(re) = Regex::new(&format!(r#"(?i)({quoted}\s*=\s*["'])([^"']+)(["'])"#)) {
                xml_attr_patterns.push(re);
            }
        }

        let disposition_name = Regex::new(r#"name="([^"]+)""#)
            .unwrap_or_else(|e| panic!("disposition pattern failed to compile: {e}"));

        Self {
            config,
            xml_tag_patterns,
            xml_attr_patterns,
            disposition_name,
        }
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Sanitize a body for logging. The result is a log-readable string, not
    /// bytes: structured formats may be re-serialized, oversized bodies
    /// truncated or summarized. Never fails; a body that cannot be parsed is
    /// pattern-scanned as plain text.
    pub fn sanitize_body(&self, body: &[u8], content_type: &str) -> String {
        if body.is_empty() {
            return String::new();
        }

        let size = body.len();
        for rule in &self.config.body_rules {
            if (rule.condition)(content_type, body, size) {
                return match rule.action {
                    BodyAction::Skip => rule
                        .message
                        .clone()
                        .unwrap_or_else(|| "[Body not logged]".to_string()),
                    BodyAction::Summarize => self.summarize_body(body, content_type, size),
                    BodyAction::Truncate => self.truncate_body(body, content_type),
                    BodyAction::Sanitize => self.sanitize_structured(body, content_type),
                };
            }
        }

        // No rule claimed the body; still never log more than max_body_size.
        if size > self.config.max_body_size {
            return self.truncate_body(body, content_type);
        }

        self.sanitize_structured(body, content_type)
    }

    fn sanitize_structured(&self, body: &[u8], content_type: &str) -> String {
        let text = String::from_utf8_lossy(body);
        match classify(content_type, body) {
            ContentClass::Json => self.sanitize_json(&text),
            ContentClass::Xml => self.sanitize_xml(&text),
            ContentClass::FormUrlEncoded => self.sanitize_form_urlencoded(&text),
            ContentClass::Multipart => self.sanitize_multipart(&text),
            ContentClass::Binary | ContentClass::PlainText => self.sanitize_text(&text),
        }
    }

    /// Run the configured secret detectors over raw text.
    pub fn sanitize_text(&self, text: &str) -> String {
        match &self.config.detector {
            DetectorKind::PatternEngine(patterns) => {
                mask_secrets(patterns, text, &self.config.mask)
            }
        }
    }

    pub fn is_sensitive_field(&self, name: &str) -> bool {
        fields::field_matches(name, &self.config.sensitive_fields)
    }

    pub fn is_sensitive_header(&self, name: &str) -> bool {
        fields::header_matches(name, &self.config.sensitive_headers)
    }
}
