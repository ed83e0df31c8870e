use crate::{
    error::DecodeError,
    events::{acknowledge, Events},
    limits::Limits,
    parser::{
        boundary::{classify, Delimiter},
        headers::declares_nested_multipart,
    },
    part::{Header, Part, Storage},
};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    StartBoundary,
    HeaderField,
    HeaderValue,
    PartData,
}

impl State {
    fn expected(self) -> &'static str {
        match self {
            Self::Start => "opening `--`",
            Self::StartBoundary => "end of boundary line",
            Self::HeaderField => "header field name",
            Self::HeaderValue => "end of header value",
            Self::PartData => "closing boundary delimiter",
        }
    }
}

/// Decodes a complete message rooted at depth 0.
pub(crate) fn decode_message<'a, B, E>(
    input: &'a [u8],
    limits: &Limits,
    events: &mut E,
) -> Result<Part<B>, DecodeError>
where
    B: Storage<'a>,
    E: Events + ?Sized,
{
    let mut session = Session {
        input,
        limits,
        events,
        parts: 0,
    };

    let result = session.level(0, 0).map(|(mut children, _)| {
        // A message with a single leaf decodes to the leaf itself.
        if children.len() == 1 && children[0].is_content() {
            children.remove(0)
        } else {
            Part::list(children)
        }
    });

    #[cfg(feature = "tracing")]
    match &result {
        Ok(_) => tracing::debug!(parts = session.parts, bytes = input.len(), "decode: message decoded"),
        Err(err) => tracing::debug!(error = %err, "decode: message rejected"),
    }

    result
}

struct Session<'a, 'l, 'e, E: ?Sized> {
    input: &'a [u8],
    limits: &'l Limits,
    events: &'e mut E,
    parts: usize,
}

impl<'a, E> Session<'a, '_, '_, E>
where
    E: Events + ?Sized,
{
    /// Decodes one nesting level starting at `start`.
    ///
    /// Returns the level's parts and the offset just past its `--boundary--`
    /// delimiter, where the enclosing level resumes.
    fn level<B: Storage<'a>>(
        &mut self,
        start: usize,
        depth: usize,
    ) -> Result<(Vec<Part<B>>, usize), DecodeError> {
        if !self.limits.allows_depth(depth) {
            #[cfg(feature = "tracing")]
            tracing::warn!(depth, max_depth = self.limits.max_depth, "decode: nesting too deep");

            return Err(DecodeError::DepthExceeded {
                max_depth: self.limits.max_depth,
            });
        }

        let input = self.input;
        let mut state = State::Start;
        let mut pos = start;
        let mut mark = start;
        let mut boundary: &'a [u8] = &[];
        let mut name: &'a [u8] = &[];
        let mut headers: Vec<Header<B>> = Vec::new();
        let mut nested: Option<Part<B>> = None;
        let mut children: Vec<Part<B>> = Vec::new();

        while pos < input.len() {
            let byte = input[pos];

            match state {
                State::Start => {
                    if byte != b'-' {
                        return Err(DecodeError::MissingLeadingDashes { offset: pos });
                    }
                    match input.get(pos + 1) {
                        Some(&b'-') => {}
                        Some(_) => return Err(DecodeError::MissingLeadingDashes { offset: pos + 1 }),
                        None => break,
                    }
                    pos += 2;
                    mark = pos;
                    state = State::StartBoundary;
                }
                State::StartBoundary => match byte {
                    CR => {
                        expect_line_feed(input, pos + 1, state)?;
                        boundary = &input[mark..pos];
                        if boundary.is_empty() {
                            return Err(DecodeError::EmptyBoundary { offset: mark });
                        }
                        acknowledge(self.events.on_boundary(boundary), "boundary");
                        pos += 2;
                        mark = pos;
                        state = State::HeaderField;
                    }
                    LF => return Err(DecodeError::BareLineBreak { offset: pos }),
                    _ => pos += 1,
                },
                State::HeaderField => match byte {
                    CR | LF => return Err(DecodeError::BareLineBreak { offset: pos }),
                    b':' => {
                        name = &input[mark..pos];
                        acknowledge(self.events.on_header_field(name), "header_field");
                        pos += 1;
                        // One optional space separates the colon from the value.
                        if input.get(pos) == Some(&b' ') {
                            pos += 1;
                        }
                        mark = pos;
                        state = State::HeaderValue;
                    }
                    _ => pos += 1,
                },
                State::HeaderValue => match byte {
                    LF => return Err(DecodeError::BareLineBreak { offset: pos }),
                    CR => {
                        expect_line_feed(input, pos + 1, state)?;
                        let value = &input[mark..pos];
                        headers.push(Header::new(B::from_input(name), B::from_input(value)));
                        acknowledge(self.events.on_header_value(value), "header_value");
                        pos += 2;

                        if input.get(pos) != Some(&CR) {
                            mark = pos;
                            state = State::HeaderField;
                            continue;
                        }

                        expect_line_feed(input, pos + 1, State::PartData)?;
                        pos += 2;

                        if headers
                            .iter()
                            .any(|h| declares_nested_multipart(h.name().as_ref(), h.value().as_ref()))
                        {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(offset = pos, depth = depth + 1, "decode: descending into nested body");

                            let (inner, end) = self.level::<B>(pos, depth + 1)?;
                            nested = Some(Part::list(inner));
                            pos = end;
                        }

                        mark = pos;
                        state = State::PartData;
                    }
                    _ => pos += 1,
                },
                State::PartData => {
                    if byte != CR {
                        pos += 1;
                        continue;
                    }
                    match input.get(pos + 1) {
                        Some(&LF) => {}
                        Some(_) => {
                            pos += 1;
                            continue;
                        }
                        None => break,
                    }

                    let site = pos + 2;
                    match classify(&input[site..], boundary) {
                        Delimiter::NotDelimiter => pos = site,
                        Delimiter::Truncated => {
                            return Err(DecodeError::TruncatedDelimiter { offset: site })
                        }
                        Delimiter::Malformed => {
                            return Err(DecodeError::MalformedDelimiter { offset: site })
                        }
                        Delimiter::Separator => {
                            let part = self.finish_part(
                                &input[mark..pos],
                                boundary,
                                std::mem::take(&mut headers),
                                nested.take(),
                            )?;
                            children.push(part);
                            pos = site + Delimiter::span(boundary);
                            mark = pos;
                            state = State::HeaderField;
                        }
                        Delimiter::Final => {
                            let part = self.finish_part(
                                &input[mark..pos],
                                boundary,
                                std::mem::take(&mut headers),
                                nested.take(),
                            )?;
                            children.push(part);
                            return Ok((children, site + Delimiter::span(boundary)));
                        }
                    }
                }
            }
        }

        Err(DecodeError::UnexpectedEnd {
            expected: state.expected(),
        })
    }

    fn finish_part<B: Storage<'a>>(
        &mut self,
        content: &'a [u8],
        boundary: &'a [u8],
        headers: Vec<Header<B>>,
        nested: Option<Part<B>>,
    ) -> Result<Part<B>, DecodeError> {
        self.parts += 1;
        if !self.limits.allows_parts(self.parts) {
            return Err(DecodeError::PartsLimitExceeded {
                max_parts: self.limits.max_parts.unwrap_or_default(),
            });
        }

        let mut part = match nested {
            Some(inner) => inner,
            None => {
                acknowledge(self.events.on_part_data(content), "part_data");
                Part::leaf(B::from_input(content))
            }
        };
        part.set_boundary(B::from_input(boundary));
        part.set_headers(headers);
        Ok(part)
    }
}

fn expect_line_feed(input: &[u8], offset: usize, state: State) -> Result<(), DecodeError> {
    match input.get(offset) {
        Some(&LF) => Ok(()),
        Some(_) => Err(DecodeError::MissingLineFeed { offset }),
        None => Err(DecodeError::UnexpectedEnd {
            expected: state.expected(),
        }),
    }
}
