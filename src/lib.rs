#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Decoder and encoder for MIME multipart bodies as part trees.
//!
//! A message decodes into a [`Part`]: a leaf holding content, or a list of
//! child parts, each with its headers and delimiting boundary. A leaf whose
//! `Content-Type` announces a multipart body is decoded recursively into a
//! nested list.
//!
//! ```
//! use multipart_codec::{decode, encode, OwnedPart};
//!
//! let input = b"--B\r\nK: V\r\n\r\nhello\r\n--B\r\nK2: V2\r\n\r\nworld\r\n--B--\r\n";
//! let tree: OwnedPart = decode(input).expect("message should decode");
//! assert_eq!(tree.children().len(), 2);
//! assert_eq!(&tree.children()[0].content()[..], b"hello");
//! assert_eq!(&encode(&tree)[..], &input[..]);
//! ```

/// Fluent builder API.
pub mod builder;
/// Decoder configuration.
pub mod config;
/// Encoder for owned part trees.
pub mod encoder;
/// Error types exposed by this crate.
pub mod error;
/// Streaming decode notifications.
pub mod events;
/// Decoder limits.
pub mod limits;
/// Low-level parser components.
pub mod parser;
/// Part tree model.
pub mod part;

pub use builder::DecoderBuilder;
pub use config::DecoderConfig;
pub use encoder::{encode, encode_to, write_to};
pub use error::{ConfigError, DecodeError, ParseError, PartError};
pub use events::{Callbacks, EventStatus, Events};
pub use limits::Limits;
pub use parser::{extract_multipart_boundary, generate_boundary};
pub use part::{Body, BorrowedPart, Header, Kind, OwnedPart, Part, Storage};

/// Main decoding entry point.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with explicit validated configuration.
    pub fn with_config(config: DecoderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a fluent builder with default configuration.
    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::default()
    }

    /// Returns an immutable reference to the active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes `input` into a part tree.
    ///
    /// Pick the representation with the storage type: `BorrowedPart<'_>` views
    /// `input`, `OwnedPart` copies out of it.
    pub fn decode<'a, B: Storage<'a>>(&self, input: &'a [u8]) -> Result<Part<B>, DecodeError> {
        self.decode_with_events(input, &mut ())
    }

    /// Decodes `input` while notifying `events` of boundaries, headers and leaf content.
    pub fn decode_with_events<'a, B, E>(
        &self,
        input: &'a [u8],
        events: &mut E,
    ) -> Result<Part<B>, DecodeError>
    where
        B: Storage<'a>,
        E: Events + ?Sized,
    {
        parser::decode::decode_message(input, &self.config.limits, events)
    }

    /// Decodes `input`, returning an undefined part and `false` on failure.
    pub fn decode_or_empty<'a, B: Storage<'a>>(&self, input: &'a [u8]) -> (Part<B>, bool) {
        match self.decode(input) {
            Ok(part) => (part, true),
            Err(_) => (Part::default(), false),
        }
    }
}

/// Decodes `input` with default limits.
pub fn decode<'a, B: Storage<'a>>(input: &'a [u8]) -> Result<Part<B>, DecodeError> {
    Decoder::new().decode(input)
}

/// Decodes `input` with default limits while notifying `events`.
pub fn decode_with_events<'a, B, E>(input: &'a [u8], events: &mut E) -> Result<Part<B>, DecodeError>
where
    B: Storage<'a>,
    E: Events + ?Sized,
{
    Decoder::new().decode_with_events(input, events)
}

/// Decodes `input` with default limits, returning an undefined part and `false` on failure.
pub fn decode_or_empty<'a, B: Storage<'a>>(input: &'a [u8]) -> (Part<B>, bool) {
    Decoder::new().decode_or_empty(input)
}
