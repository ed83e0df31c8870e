use uuid::Uuid;

use crate::error::ParseError;

const MAX_BOUNDARY_LEN: usize = 70;
const GENERATED_PREFIX: &str = "=_Part_";

/// Extracts and validates the `boundary` parameter from a `multipart/*` `Content-Type` value.
pub fn extract_multipart_boundary(content_type: &str) -> Result<String, ParseError> {
    let mime = content_type
        .trim()
        .parse::<mime::Mime>()
        .map_err(|_| ParseError::new("invalid Content-Type header"))?;

    if mime.type_() != mime::MULTIPART {
        return Err(ParseError::new("Content-Type must be multipart/*"));
    }

    let boundary = mime
        .get_param(mime::BOUNDARY)
        .map(|value| value.as_str().to_owned())
        .ok_or_else(|| ParseError::new("missing multipart boundary parameter"))?;

    validate_boundary(&boundary)?;
    Ok(boundary)
}

/// Checks a boundary token against the RFC 2046 character and length rules.
pub fn validate_boundary(boundary: &str) -> Result<(), ParseError> {
    if boundary.is_empty() {
        return Err(ParseError::new("multipart boundary cannot be empty"));
    }

    if boundary.len() > MAX_BOUNDARY_LEN {
        return Err(ParseError::new("multipart boundary cannot exceed 70 characters"));
    }

    if boundary.ends_with(' ') {
        return Err(ParseError::new(
            "multipart boundary cannot end with whitespace",
        ));
    }

    if !boundary.chars().all(is_boundary_char) {
        return Err(ParseError::new(
            "multipart boundary contains invalid characters",
        ));
    }

    Ok(())
}

/// Generates a fresh boundary token that passes [`validate_boundary`].
pub fn generate_boundary() -> String {
    format!("{GENERATED_PREFIX}{}", Uuid::new_v4().simple())
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\'' | '(' | ')' | '+' | '_' | ',' | '-' | '.' | '/' | ':' | '=' | '?' | ' ')
}

/// What follows a CRLF inside part data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// Fewer than `boundary.len() + 4` bytes remain.
    Truncated,
    /// Ordinary content.
    NotDelimiter,
    /// `--boundary` followed by CRLF.
    Separator,
    /// `--boundary--`.
    Final,
    /// `--boundary` followed by something else.
    Malformed,
}

impl Delimiter {
    /// Length of the delimiter text after the CRLF, excluding any trailing CRLF.
    pub(crate) fn span(boundary: &[u8]) -> usize {
        boundary.len() + 4
    }
}

/// Classifies the bytes that follow a CRLF against the active boundary.
pub(crate) fn classify(rest: &[u8], boundary: &[u8]) -> Delimiter {
    let needed = Delimiter::span(boundary);
    if rest.len() < needed {
        return Delimiter::Truncated;
    }

    let (dashes, tail) = rest.split_at(2);
    if dashes != b"--" || !tail.starts_with(boundary) {
        return Delimiter::NotDelimiter;
    }

    let suffix = &tail[boundary.len()..boundary.len() + 2];
    if suffix == b"--" {
        Delimiter::Final
    } else if suffix == b"\r\n" {
        Delimiter::Separator
    } else {
        Delimiter::Malformed
    }
}
