use http::header;
use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    static ref RX_NESTED_MULTIPART: Regex =
        Regex::new(r"^\s*multipart/(\S+) boundary=(.*)$").unwrap();
}

/// `Content-Type` value announcing a nested multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedContentType {
    /// Multipart subtype, for example `mixed`.
    pub subtype: String,
    /// Declared boundary token, unquoted.
    pub boundary: String,
}

/// Returns `true` when `name` is `Content-Type`, ignoring ASCII case.
pub fn is_content_type(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(header::CONTENT_TYPE.as_str().as_bytes())
}

/// Recognizes a `multipart/<subtype> boundary=<token>` value.
///
/// Both the bare space-separated form and the standard `;`-separated parameter
/// form are accepted.
pub fn parse_nested_content_type(value: &[u8]) -> Option<NestedContentType> {
    if let Some(captures) = RX_NESTED_MULTIPART.captures(value) {
        let subtype = String::from_utf8_lossy(&captures[1]);
        let boundary = String::from_utf8_lossy(&captures[2]);
        return Some(NestedContentType {
            subtype: subtype.trim_end_matches(';').to_owned(),
            boundary: boundary.trim().trim_matches('"').to_owned(),
        });
    }

    let mime = std::str::from_utf8(value).ok()?.trim().parse::<mime::Mime>().ok()?;
    if mime.type_() != mime::MULTIPART {
        return None;
    }

    let boundary = mime.get_param(mime::BOUNDARY)?;
    Some(NestedContentType {
        subtype: mime.subtype().as_str().to_owned(),
        boundary: boundary.as_str().to_owned(),
    })
}

/// Returns `true` when a header pair declares a nested multipart body.
pub fn declares_nested_multipart(name: &[u8], value: &[u8]) -> bool {
    is_content_type(name) && parse_nested_content_type(value).is_some()
}
