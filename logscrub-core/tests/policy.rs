use logscrub_core::{BodyAction, BodyRule, SanitizerConfig, Sanitizer};

#[test]
fn empty_body_yields_empty_string() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());
    assert_eq!(sanitizer.sanitize_body(b"", "application/json"), "");
    assert_eq!(sanitizer.sanitize_body(b"", ""), "");
}

#[test]
fn binary_content_is_skipped() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());
    let result = sanitizer.sanitize_body(b"\x00\x01\x02\x03", "application/pdf");
    assert_eq!(result, "[Binary content - not logged]");
}

#[test]
fn large_base64_blob_is_skipped() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());
    let blob = "QUJDREVGR0hJSktMTU5PUA==".repeat(100); // well over 1 KB
    let result = sanitizer.sanitize_body(blob.as_bytes(), "text/plain");
    assert_eq!(result, "[Base64 encoded data - not logged]");
}

#[test]
fn oversized_body_is_truncated_with_notice() {
    let config = SanitizerConfig {
        sensitive_fields: vec!["password".into()],
        mask: "***".into(),
        max_body_size: 50,
        body_rules: vec![],
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    let body = "a".repeat(1000);
    let result = sanitizer.sanitize_body(body.as_bytes(), "text/plain");

    assert!(result.contains("truncated"));
    assert!(result.contains("1000 bytes"));
    assert!(result.len() < 200, "output length: {}", result.len());
}

#[test]
fn truncated_json_degrades_to_text_scan() {
    let config = SanitizerConfig {
        max_body_size: 40,
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    let body = format!(r#"{{"data":"{}","password":"secret123"}}"#, "x".repeat(200));
    let result = sanitizer.sanitize_body(body.as_bytes(), "application/json");

    // The cut lands mid-string, so the prefix cannot parse; the notice still
    // reports the original size.
    assert!(result.contains("truncated"));
    assert!(!result.contains("secret123"));
}

#[test]
fn very_large_json_is_summarized_with_shape_hint() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());

    let body = format!(r#"{{"data":"{}"}}"#, "x".repeat(600 * 1024));
    let result = sanitizer.sanitize_body(body.as_bytes(), "application/json");

    assert!(result.starts_with("[Large body - "));
    assert!(result.contains("Object with 1 keys"));
    assert!(!result.contains("xxx"));
}

#[test]
fn very_large_json_array_is_summarized_with_item_count() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());

    let element = format!(r#""{}""#, "y".repeat(1024));
    let body = format!("[{}]", vec![element; 600].join(","));
    assert!(body.len() > 500 * 1024);
    let result = sanitizer.sanitize_body(body.as_bytes(), "application/json");

    assert!(result.starts_with("[Large body - "));
    assert!(result.contains("Array with 600 items"));
}

#[test]
fn very_large_xml_is_summarized() {
    let sanitizer = Sanitizer::new(SanitizerConfig::default());

    let body = format!("<doc>{}</doc>", "z".repeat(600 * 1024));
    let result = sanitizer.sanitize_body(body.as_bytes(), "application/xml");

    assert!(result.starts_with("[Large body - "));
    assert!(result.contains("XML document"));
    assert!(!result.contains("zzz"));
}

#[test]
fn first_matching_rule_wins() {
    let config = SanitizerConfig {
        body_rules: vec![
            BodyRule::new(|_, _, _| true, BodyAction::Skip).with_message("[first rule]"),
            BodyRule::new(|_, _, _| true, BodyAction::Skip).with_message("[second rule]"),
        ],
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    assert_eq!(sanitizer.sanitize_body(b"anything", "text/plain"), "[first rule]");
}

#[test]
fn skip_rule_without_message_uses_generic_notice() {
    let config = SanitizerConfig {
        body_rules: vec![BodyRule::new(|_, _, _| true, BodyAction::Skip)],
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    assert_eq!(sanitizer.sanitize_body(b"anything", "text/plain"), "[Body not logged]");
}

#[test]
fn sanitize_rule_forwards_to_structural_sanitization() {
    let config = SanitizerConfig {
        body_rules: vec![BodyRule::new(|_, _, _| true, BodyAction::Sanitize)],
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    let result = sanitizer.sanitize_body(br#"{"password":"pw123456"}"#, "application/json");
    assert!(!result.contains("pw123456"));
    assert!(result.contains("***REDACTED***"));
}

#[test]
fn empty_config_sections_fall_back_to_defaults() {
    let config = SanitizerConfig {
        sensitive_fields: vec![],
        sensitive_headers: vec![],
        mask: String::new(),
        max_body_size: 0,
        body_rules: vec![],
        ..Default::default()
    };
    let sanitizer = Sanitizer::new(config);

    assert!(sanitizer.is_sensitive_field("password"));
    assert!(sanitizer.is_sensitive_header("Authorization"));
    let result = sanitizer.sanitize_body(br#"{"password":"secret123"}"#, "application/json");
    assert!(!result.contains("secret123"));
    assert!(result.contains("***REDACTED***"));
}
