//! Multipart form-data sanitization: a line-oriented scan that tracks the
//! current field name from `Content-Disposition` headers and masks the value
//! lines of sensitive fields. Boundaries, part headers, and non-sensitive
//! content pass through unchanged.

use crate::sanitize::Sanitizer;

impl Sanitizer {
    pub(crate) fn sanitize_multipart(&self, body: &str) -> String {
        let mut out: Vec<String> = Vec::new();
        let mut in_sensitive_field = false;

        for line in body.split('\n') {
            if line.contains("Content-Disposition") {
                if let Some(caps) = self.disposition_name.captures(line) {
                    in_sensitive_field = self.is_sensitive_field(&caps[1]);
                }
                out.push(line.to_string());
                continue;
            }

            // Boundary line: the current part ends here.
            if line.starts_with("--") {
                in_sensitive_field = false;
                out.push(line.to_string());
                continue;
            }

            if in_sensitive_field && !line.trim().is_empty() && !line.starts_with("Content-") {
                out.push(self.config.mask.clone());
                continue;
            }

            out.push(line.to_string());
        }

        out.join("\n")
    }
}
