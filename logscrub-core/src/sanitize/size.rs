//! Size-based body handling: truncation, summaries, and human-readable sizes.

use crate::classify::{is_json_content_type, is_xml_content_type};
use crate::sanitize::Sanitizer;

impl Sanitizer {
    /// Sanitize at most `max_body_size` bytes and append a truncation notice.
    /// The cut is byte-positional and may land mid-structure; a cut JSON or
    /// XML prefix fails its parse and degrades to text scanning, which is the
    /// intended best-effort behavior.
    pub(crate) fn truncate_body(&self, body: &[u8], content_type: &str) -> String {
        let max = self.config.max_body_size;
        if body.len() <= max {
            return self.sanitize_structured(body, content_type);
        }

        let mut result = self.sanitize_structured(&body[..max], content_type);
        result.push_str("\n... [truncated, total: ");
        result.push_str(&format_size(body.len()));
        result.push(']');
        result
    }

    /// Shape metadata only; never any field values.
    pub(crate) fn summarize_body(&self, body: &[u8], content_type: &str, size: usize) -> String {
        let mut summary = format!("[Large body - {}]", format_size(size));

        if is_json_content_type(content_type) {
            if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
                match value {
                    serde_json::Value::Object(map) => {
                        summary.push_str(&format!(" Object with {} keys", map.len()));
                    }
                    serde_json::Value::Array(items) => {
                        summary.push_str(&format!(" Array with {} items", items.len()));
                    }
                    _ => {}
                }
            }
        }

        if is_xml_content_type(content_type) {
            summary.push_str(" XML document");
        }

        summary
    }
}

/// `512` -> `"512 bytes"`, `2048` -> `"2 KB"`, `3 * 1024 * 1024` -> `"3 MB"`.
/// Integer division throughout.
pub fn format_size(size: usize) -> String {
    if size < 1024 {
        format!("{size} bytes")
    } else if size < 1024 * 1024 {
        format!("{} KB", size / 1024)
    } else {
        format!("{} MB", size / (1024 * 1024))
    }
}

#[cfg(test)]
mod tests {
    use super::format_size;

    #[test]
    fn format_size_boundaries() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(1023), "1023 bytes");
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(100 * 1024), "100 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1023 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5 MB");
    }
}
