//! JSON sanitization: recursive walk over a parsed tree, with sensitive keys
//! masked and string leaves that themselves sniff as JSON recursed into.

use serde_json::Value;

use crate::classify::looks_like_json;
use crate::sanitize::Sanitizer;

/// Cap on nested JSON-in-string recursion. Adversarial input can stack
/// escaped documents arbitrarily deep; past this we fall back to text
/// scanning.
const MAX_NESTED_DEPTH: usize = 10;

impl Sanitizer {
    pub(crate) fn sanitize_json(&self, body: &str) -> String {
        self.sanitize_json_at_depth(body, 0)
    }

    fn sanitize_json_at_depth(&self, body: &str, depth: usize) -> String {
        if depth >= MAX_NESTED_DEPTH {
            return self.sanitize_text(body);
        }

        let parsed: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return self.sanitize_text(body),
        };

        let cleaned = self.sanitize_json_value(parsed, depth);
        match serde_json::to_string_pretty(&cleaned) {
            Ok(s) => s,
            Err(_) => self.sanitize_text(body),
        }
    }

    fn sanitize_json_value(&self, value: Value, depth: usize) -> Value {
        match value {
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, val) in map {
                    if self.is_sensitive_field(&key) {
                        out.insert(key, Value::String(self.config.mask.clone()));
                    } else {
                        out.insert(key, self.sanitize_json_value(val, depth));
                    }
                }
                Value::Object(out)
            }
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.sanitize_json_value(item, depth))
                    .collect(),
            ),
            Value::String(s) => {
                // Escaped JSON-in-JSON: sanitize the embedded document and
                // splice it back as a string.
                if looks_like_json(&s) {
                    Value::String(self.sanitize_json_at_depth(&s, depth + 1))
                } else {
                    Value::String(self.sanitize_text(&s))
                }
            }
            other => other,
        }
    }
}
