#![allow(missing_docs)]

use multipart_codec::parser::headers::{
    declares_nested_multipart, is_content_type, parse_nested_content_type, NestedContentType,
};

#[test]
fn matches_bare_space_separated_form() {
    assert_eq!(
        parse_nested_content_type(b"multipart/mixed boundary=INNER"),
        Some(NestedContentType {
            subtype: "mixed".to_owned(),
            boundary: "INNER".to_owned(),
        })
    );
}

#[test]
fn matches_semicolon_parameter_form() {
    let parsed = parse_nested_content_type(b"multipart/related; boundary=\"abc\"")
        .expect("should be recognized");
    assert_eq!(parsed.subtype, "related");
    assert_eq!(parsed.boundary, "abc");

    let parsed = parse_nested_content_type(b"Multipart/Alternative;boundary=xyz")
        .expect("should be recognized");
    assert_eq!(parsed.subtype, "alternative");
    assert_eq!(parsed.boundary, "xyz");
}

#[test]
fn ignores_leading_whitespace() {
    assert!(parse_nested_content_type(b"  multipart/mixed boundary=B").is_some());
}

#[test]
fn rejects_non_multipart_and_missing_boundary() {
    assert_eq!(parse_nested_content_type(b"text/plain; charset=utf-8"), None);
    assert_eq!(parse_nested_content_type(b"multipart/mixed"), None);
    assert_eq!(parse_nested_content_type(b"\xff\xfe"), None);
}

#[test]
fn content_type_name_is_case_insensitive() {
    assert!(is_content_type(b"Content-Type"));
    assert!(is_content_type(b"CONTENT-TYPE"));
    assert!(!is_content_type(b"Content-Typo"));
    assert!(!is_content_type(b" Content-Type"));
}

#[test]
fn declares_nested_requires_both_name_and_value() {
    assert!(declares_nested_multipart(b"content-type", b"multipart/mixed boundary=B"));
    assert!(!declares_nested_multipart(b"X-Type", b"multipart/mixed boundary=B"));
    assert!(!declares_nested_multipart(b"Content-Type", b"text/html"));
}
