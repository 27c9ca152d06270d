use logscrub_core::classify::{
    classify, is_binary_content, is_json_content_type, looks_like_base64, looks_like_json,
};
use logscrub_core::ContentClass;

#[test]
fn json_content_types() {
    let cases = [
        ("application/json", true),
        ("application/json; charset=utf-8", true),
        ("application/vnd.api+json", true),
        ("text/json", true),
        ("application/problem+json", true),
        ("text/plain", false),
        ("application/xml", false),
        ("", false),
    ];
    for (content_type, expected) in cases {
        assert_eq!(
            is_json_content_type(content_type),
            expected,
            "content type: {content_type:?}"
        );
    }
}

#[test]
fn json_sniffing() {
    let cases = [
        (r#"{"key":"value"}"#, true),
        ("[1,2,3]", true),
        (r#"  {"key":"value"}  "#, true),
        ("  [1,2,3]  ", true),
        ("not json", false),
        ("", false),
        ("<xml></xml>", false),
        (r#"{"incomplete"#, false),
    ];
    for (body, expected) in cases {
        assert_eq!(looks_like_json(body), expected, "body: {body:?}");
    }
}

#[test]
fn declared_content_type_is_authoritative() {
    assert_eq!(classify("application/json", b"whatever"), ContentClass::Json);
    assert_eq!(classify("text/xml", b"whatever"), ContentClass::Xml);
    assert_eq!(
        classify("application/x-www-form-urlencoded", b"a=b"),
        ContentClass::FormUrlEncoded
    );
    assert_eq!(
        classify("multipart/form-data; boundary=xyz", b""),
        ContentClass::Multipart
    );
    assert_eq!(classify("image/png", b"\x89PNG"), ContentClass::Binary);
    assert_eq!(classify("application/pdf", b"%PDF"), ContentClass::Binary);
}

#[test]
fn unrecognized_content_type_falls_back_to_sniffing() {
    assert_eq!(classify("", br#"{"a":1}"#), ContentClass::Json);
    assert_eq!(classify("text/weird", b"<doc><a/></doc>"), ContentClass::Xml);
    assert_eq!(classify("", b"hello world"), ContentClass::PlainText);
}

#[test]
fn binary_content_types() {
    assert!(is_binary_content("application/octet-stream"));
    assert!(is_binary_content("audio/mpeg"));
    assert!(is_binary_content("video/mp4"));
    assert!(is_binary_content("application/zip"));
    assert!(!is_binary_content("application/json"));
    assert!(!is_binary_content("text/plain"));
}

#[test]
fn base64_detection_needs_size_and_alphabet() {
    assert!(!looks_like_base64(b"QUJD")); // too short to call
    let blob = "QUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVo=".repeat(50);
    assert!(looks_like_base64(blob.as_bytes()));
    let prose = "This sentence, with punctuation & spaces, is not base64 at all! ".repeat(10);
    assert!(!looks_like_base64(prose.as_bytes()));
}
