use thiserror::Error;

use crate::part::Kind;

/// Configuration-time validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configured numeric limit must be strictly greater than zero.
    #[error("limit `{limit}` must be greater than 0")]
    InvalidLimitValue {
        /// Name of the limit.
        limit: &'static str,
    },
}

/// Failures of the standalone header and boundary helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Generic parser failure with message context.
    #[error("{message}")]
    Message {
        /// Parser failure message.
        message: String,
    },
}

impl ParseError {
    /// Creates a parser error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

/// Structural violations that abort a decode.
///
/// Offsets are absolute byte positions in the decoded input, including inputs
/// reached through nested bodies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The input ended before the current nesting level was closed.
    #[error("input ended while expecting {expected}")]
    UnexpectedEnd {
        /// What the decoder was waiting for.
        expected: &'static str,
    },
    /// A body did not start with the literal `--`.
    #[error("expected `--` at offset {offset}")]
    MissingLeadingDashes {
        /// Offset of the offending byte.
        offset: usize,
    },
    /// The opening delimiter line carried no boundary token.
    #[error("empty boundary token at offset {offset}")]
    EmptyBoundary {
        /// Offset of the empty delimiter line.
        offset: usize,
    },
    /// A CR or LF appeared where only literal characters are allowed.
    #[error("unexpected line break at offset {offset}")]
    BareLineBreak {
        /// Offset of the line break.
        offset: usize,
    },
    /// A CR was not followed by LF where the grammar requires CRLF.
    #[error("expected LF after CR at offset {offset}")]
    MissingLineFeed {
        /// Offset where the LF was expected.
        offset: usize,
    },
    /// Too few bytes remain after a CRLF to compare a full delimiter.
    #[error("not enough input to check boundary delimiter at offset {offset}")]
    TruncatedDelimiter {
        /// Offset of the candidate delimiter.
        offset: usize,
    },
    /// A boundary match was followed by neither `--` nor CRLF.
    #[error("malformed boundary delimiter at offset {offset}")]
    MalformedDelimiter {
        /// Offset of the candidate delimiter.
        offset: usize,
    },
    /// Nested bodies went deeper than the configured ceiling.
    #[error("nesting depth exceeded limit of {max_depth}")]
    DepthExceeded {
        /// Configured recursion ceiling.
        max_depth: usize,
    },
    /// The message produced more parts than allowed.
    #[error("message exceeded max parts limit of {max_parts}")]
    PartsLimitExceeded {
        /// Configured part limit.
        max_parts: usize,
    },
}

/// Errors raised when reading or writing the wrong payload of a [`crate::Part`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartError {
    /// The part holds a different payload than the one requested.
    #[error("expected {expected} part, found {found}")]
    TypeMismatch {
        /// Requested kind.
        expected: Kind,
        /// Actual kind.
        found: Kind,
    },
}
