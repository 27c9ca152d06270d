//! Header, query-string, and URL sanitization.
//!
//! Headers are matched by exact name only; their values are not pattern
//! scanned. Query parameters reuse the field-name rules, and non-sensitive
//! values pass through untouched so logged URLs stay valid.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::config::HeaderMaskMode;
use crate::sanitize::Sanitizer;

impl Sanitizer {
    /// Render headers for logging. Multi-valued headers are joined with
    /// `", "`; sensitive ones are masked per the configured mode.
    pub fn sanitize_headers(&self, headers: &BTreeMap<String, Vec<String>>) -> BTreeMap<String, String> {
        headers
            .iter()
            .map(|(name, values)| {
                let joined = values.join(", ");
                let rendered = if self.is_sensitive_header(name) {
                    self.mask_header_value(&joined)
                } else {
                    joined
                };
                (name.clone(), rendered)
            })
            .collect()
    }

    fn mask_header_value(&self, value: &str) -> String {
        if self.config.header_mask_mode == HeaderMaskMode::Full {
            return self.config.mask.clone();
        }

        // Partial: short values are fully masked, longer ones keep the first
        // and last four characters.
        let chars: Vec<char> = value.chars().collect();
        if chars.len() <= 8 {
            return self.config.mask.clone();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}{}{tail}", self.config.mask)
    }

    /// Sanitize a raw query string, masking values of sensitive parameters.
    pub fn sanitize_query(&self, raw_query: &str) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(raw_query.as_bytes()) {
            if self.is_sensitive_field(&key) {
                out.append_pair(&key, &self.config.mask);
            } else {
                out.append_pair(&key, &value);
            }
        }
        out.finish()
    }

    /// Render a URL with its query sanitized. Path and fragment are kept.
    pub fn sanitize_url(&self, url: &url::Url) -> String {
        match url.query() {
            None | Some("") => url.to_string(),
            Some(query) => {
                let mut clean = url.clone();
                clean.set_query(Some(&self.sanitize_query(query)));
                clean.to_string()
            }
        }
    }
}
