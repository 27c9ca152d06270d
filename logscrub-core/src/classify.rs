//! Content classification: decide which structural sanitizer applies to a body.

/// Wire format of a request/response body, as far as the sanitizer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentClass {
    Json,
    Xml,
    FormUrlEncoded,
    Multipart,
    Binary,
    PlainText,
}

/// Classify a body from its declared content type, falling back to sniffing
/// the bytes when the type is absent or unrecognized.
pub fn classify(content_type: &str, body: &[u8]) -> ContentClass {
    if is_json_content_type(content_type) {
        return ContentClass::Json;
    }
    if is_xml_content_type(content_type) {
        return ContentClass::Xml;
    }
    if is_form_urlencoded(content_type) {
        return ContentClass::FormUrlEncoded;
    }
    if is_multipart_form(content_type) {
        return ContentClass::Multipart;
    }
    if is_binary_content(content_type) {
        return ContentClass::Binary;
    }

    let text = String::from_utf8_lossy(body);
    if looks_like_json(&text) {
        ContentClass::Json
    } else if looks_like_xml(&text) {
        ContentClass::Xml
    } else {
        ContentClass::PlainText
    }
}

pub fn is_json_content_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("application/json")
        || ct.contains("application/vnd.api+json")
        || ct.contains("text/json")
        || ct.ends_with("+json")
}

pub fn is_xml_content_type(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("application/xml") || ct.contains("text/xml") || ct.ends_with("+xml")
}

pub fn is_form_urlencoded(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("application/x-www-form-urlencoded")
}

pub fn is_multipart_form(content_type: &str) -> bool {
    content_type
        .to_ascii_lowercase()
        .contains("multipart/form-data")
}

pub fn is_binary_content(content_type: &str) -> bool {
    const BINARY_TYPES: &[&str] = &[
        "application/octet-stream",
        "application/pdf",
        "image/",
        "audio/",
        "video/",
        "application/zip",
        "application/gzip",
        "application/x-tar",
    ];

    let ct = content_type.to_ascii_lowercase();
    BINARY_TYPES.iter().any(|bt| ct.contains(bt))
}

/// A trimmed body wrapped in `{}` or `[]` is treated as JSON.
pub fn looks_like_json(body: &str) -> bool {
    let trimmed = body.trim();
    let bytes = trimmed.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'{'), Some(b'}')) | (Some(b'['), Some(b']')) => true,
        _ => false,
    }
}

pub fn looks_like_xml(body: &str) -> bool {
    let trimmed = body.trim();
    trimmed.starts_with('<') && trimmed.ends_with('>')
}

/// Heuristic: a sample of the first 1000 bytes is >90% base64 alphabet.
/// Bodies under 100 bytes are never flagged.
pub fn looks_like_base64(body: &[u8]) -> bool {
    if body.len() < 100 {
        return false;
    }

    let sample = &body[..body.len().min(1000)];
    let valid = sample
        .iter()
        .filter(|&&b| {
            b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=' || b == b'\n' || b == b'\r'
        })
        .count();

    valid as f64 / sample.len() as f64 > 0.9
}
