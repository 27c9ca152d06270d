//! Form-urlencoded sanitization: parse as ordered key/value pairs, mask
//! sensitive keys wholesale, pattern-scan the rest, and re-encode.

use url::form_urlencoded;

use crate::sanitize::Sanitizer;

impl Sanitizer {
    pub(crate) fn sanitize_form_urlencoded(&self, body: &str) -> String {
        // Group values under their key, preserving first-seen key order.
        // Duplicate keys are legal in form bodies.
        let mut pairs: Vec<(String, Vec<String>)> = Vec::new();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some((_, values)) => values.push(value.into_owned()),
                None => pairs.push((key.into_owned(), vec![value.into_owned()])),
            }
        }

        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, values) in pairs {
            if self.is_sensitive_field(&key) {
                // The whole value list collapses to a single mask.
                out.append_pair(&key, &self.config.mask);
            } else {
                for value in values {
                    out.append_pair(&key, &self.sanitize_text(&value));
                }
            }
        }
        out.finish()
    }
}
