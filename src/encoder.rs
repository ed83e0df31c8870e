use std::io;

use bytes::{BufMut, Bytes, BytesMut};

use crate::part::{Body, Header, OwnedPart};

const CRLF: &[u8] = b"\r\n";
const DASHES: &[u8] = b"--";

/// Encodes a part tree into a new buffer.
pub fn encode(part: &OwnedPart) -> Bytes {
    let mut out = BytesMut::new();
    encode_to(part, &mut out);
    out.freeze()
}

/// Encodes a part tree into `out` and returns the number of bytes written.
///
/// Undefined parts produce no output. A leaf at the root is closed with its own
/// final delimiter. A list closes the previous boundary each time its children
/// switch boundary, and closes the shared boundary once at the end only when
/// no switch happened.
pub fn encode_to<W: BufMut>(part: &OwnedPart, out: &mut W) -> usize {
    let written = encode_part(out, part, 0);

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = written, "encode: tree written");

    written
}

/// Encodes a part tree into an [`io::Write`] sink.
pub fn write_to<W: io::Write>(part: &OwnedPart, mut writer: W) -> io::Result<usize> {
    let bytes = encode(part);
    writer.write_all(&bytes)?;
    Ok(bytes.len())
}

fn encode_part<W: BufMut>(out: &mut W, part: &OwnedPart, depth: usize) -> usize {
    match part.body() {
        Body::Undefined => 0,
        Body::Content(content) => {
            let mut written = put_delimiter(out, part.boundary());
            written += put_headers(out, part.headers());
            written += put(out, CRLF);
            written += put(out, content);
            written += put(out, CRLF);
            if depth == 0 {
                written += put_close(out, part.boundary());
            }
            written
        }
        Body::List(children) => {
            let embedded = !part.boundary().is_empty();
            let mut written = 0;

            if embedded {
                written += put_delimiter(out, part.boundary());
            }
            written += put_headers(out, part.headers());
            if embedded {
                written += put(out, CRLF);
            }

            let mut active: Option<&Bytes> = None;
            let mut switched = false;
            for child in children.iter().filter(|child| !child.is_undefined()) {
                match active {
                    Some(current) if current != child.boundary() => {
                        written += put_close(out, current);
                        switched = true;
                        active = Some(child.boundary());
                    }
                    Some(_) => {}
                    None => active = Some(child.boundary()),
                }
                written += encode_part(out, child, depth + 1);
            }

            // TODO: the last boundary group after a switch is left unclosed;
            // decide whether to close it once heterogeneous lists have a decoder
            // counterpart.
            if !switched {
                if let Some(current) = active {
                    written += put_close(out, current);
                }
            }
            written
        }
    }
}

fn put<W: BufMut>(out: &mut W, bytes: &[u8]) -> usize {
    out.put_slice(bytes);
    bytes.len()
}

fn put_delimiter<W: BufMut>(out: &mut W, boundary: &[u8]) -> usize {
    put(out, DASHES) + put(out, boundary) + put(out, CRLF)
}

fn put_close<W: BufMut>(out: &mut W, boundary: &[u8]) -> usize {
    put(out, DASHES) + put(out, boundary) + put(out, DASHES) + put(out, CRLF)
}

fn put_headers<W: BufMut>(out: &mut W, headers: &[Header<Bytes>]) -> usize {
    headers
        .iter()
        .map(|header| {
            put(out, header.name()) + put(out, b": ") + put(out, header.value()) + put(out, CRLF)
        })
        .sum()
}
