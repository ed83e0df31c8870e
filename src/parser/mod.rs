/// Boundary extraction, validation and delimiter matching.
pub mod boundary;
/// Single-pass recursive decoder.
pub(crate) mod decode;
/// Header recognition helpers.
pub mod headers;

pub use boundary::{extract_multipart_boundary, generate_boundary, validate_boundary};
pub use headers::{
    declares_nested_multipart, is_content_type, parse_nested_content_type, NestedContentType,
};
