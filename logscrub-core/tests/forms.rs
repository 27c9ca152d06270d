use logscrub_core::{SanitizerConfig, Sanitizer};

fn default_sanitizer() -> Sanitizer {
    Sanitizer::new(SanitizerConfig::default())
}

#[test]
fn form_urlencoded_masks_sensitive_keys() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"username=user&password=secret&token=abc123",
        "application/x-www-form-urlencoded",
    );

    assert!(result.contains("username=user"));
    assert!(!result.contains("secret"));
    assert!(!result.contains("abc123"));
    assert!(result.contains("***REDACTED***"));
}

#[test]
fn form_duplicate_keys_survive_and_sensitive_lists_collapse() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"tag=a&tag=b&password=one&password=two",
        "application/x-www-form-urlencoded",
    );

    assert!(result.contains("tag=a"));
    assert!(result.contains("tag=b"));
    assert!(!result.contains("one"));
    assert!(!result.contains("two"));
    // The whole sensitive value list collapses to a single masked entry.
    assert_eq!(result.matches("password=").count(), 1);
}

#[test]
fn form_values_of_plain_keys_are_pattern_scanned() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"note=Bearer%20sk-1234567890abcdef&user=bob",
        "application/x-www-form-urlencoded",
    );

    assert!(!result.contains("sk-1234567890abcdef"));
    assert!(result.contains("user=bob"));
}

#[test]
fn multipart_masks_sensitive_field_content() {
    let sanitizer = default_sanitizer();
    let body = "--boundary123\n\
                Content-Disposition: form-data; name=\"username\"\n\
                \n\
                alice\n\
                --boundary123\n\
                Content-Disposition: form-data; name=\"password\"\n\
                \n\
                hunter2\n\
                --boundary123--";
    let result = sanitizer.sanitize_body(body.as_bytes(), "multipart/form-data; boundary=boundary123");

    assert!(result.contains("alice"));
    assert!(!result.contains("hunter2"));
    assert!(result.contains("***REDACTED***"));
    // Boundary and disposition lines pass through unchanged.
    assert_eq!(result.matches("--boundary123").count(), 3);
    assert!(result.contains("name=\"password\""));
}

#[test]
fn multipart_part_headers_are_not_masked() {
    let sanitizer = default_sanitizer();
    let body = "--b\n\
                Content-Disposition: form-data; name=\"token\"\n\
                Content-Type: text/plain\n\
                \n\
                tok-value\n\
                --b--";
    let result = sanitizer.sanitize_body(body.as_bytes(), "multipart/form-data; boundary=b");

    assert!(result.contains("Content-Type: text/plain"));
    assert!(!result.contains("tok-value"));
}

#[test]
fn xml_element_content_is_masked() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"<user><name>bob</name><password>secret123</password></user>",
        "application/xml",
    );

    assert!(result.contains("<name>bob</name>"));
    assert!(result.contains("<password>***REDACTED***</password>"));
    assert!(!result.contains("secret123"));
}

#[test]
fn xml_attribute_values_are_masked() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        br#"<login user="bob" password="secret123"/>"#,
        "text/xml",
    );

    assert!(result.contains(r#"user="bob""#));
    assert!(result.contains(r#"password="***REDACTED***""#));
    assert!(!result.contains("secret123"));
}

#[test]
fn xml_text_is_also_pattern_scanned() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"<log>Authorization: Bearer sk-1234567890abcdef</log>",
        "application/xml",
    );

    assert!(!result.contains("sk-1234567890abcdef"));
}

#[test]
fn xml_matching_ignores_case() {
    let sanitizer = default_sanitizer();
    let result = sanitizer.sanitize_body(
        b"<User><Password>secret123</Password></User>",
        "application/xml",
    );

    assert!(!result.contains("secret123"));
}
