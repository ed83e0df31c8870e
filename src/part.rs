use std::fmt;

use bytes::Bytes;

use crate::error::PartError;

/// Byte storage used for content, header and boundary fields of a [`Part`].
///
/// `&'a [u8]` views the decoded input directly, `Bytes` owns a copy.
pub trait Storage<'a>: AsRef<[u8]> + Clone + Default + fmt::Debug {
    /// Builds a storage value from a slice of the decoded input.
    fn from_input(bytes: &'a [u8]) -> Self;
}

impl<'a> Storage<'a> for &'a [u8] {
    fn from_input(bytes: &'a [u8]) -> Self {
        bytes
    }
}

impl<'a> Storage<'a> for Bytes {
    fn from_input(bytes: &'a [u8]) -> Self {
        Bytes::copy_from_slice(bytes)
    }
}

/// Part tree that borrows from the decoded input buffer.
///
/// The tree cannot outlive the buffer it was decoded from. Use
/// [`Part::to_owned_part`] to detach it.
pub type BorrowedPart<'a> = Part<&'a [u8]>;

/// Part tree that owns all of its bytes. Only this representation can be encoded.
pub type OwnedPart = Part<Bytes>;

/// Discriminant of a [`Part`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Leaf content.
    Content,
    /// Ordered list of child parts.
    List,
    /// Nothing written yet.
    Undefined,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Content => "content",
            Self::List => "list",
            Self::Undefined => "undefined",
        })
    }
}

/// Payload of a [`Part`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Body<B> {
    /// Not initialized.
    #[default]
    Undefined,
    /// Raw leaf bytes.
    Content(B),
    /// Child parts in document order.
    List(Vec<Part<B>>),
}

impl<B> Body<B> {
    /// Returns the discriminant of this payload.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Content(_) => Kind::Content,
            Self::List(_) => Kind::List,
        }
    }
}

/// One `name: value` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<B> {
    name: B,
    value: B,
}

impl<B> Header<B> {
    /// Creates a header pair.
    pub fn new(name: impl Into<B>, value: impl Into<B>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &B {
        &self.name
    }

    /// Returns the field value.
    pub fn value(&self) -> &B {
        &self.value
    }

    /// Splits the header into `(name, value)`.
    pub fn into_pair(self) -> (B, B) {
        (self.name, self.value)
    }
}

/// A node of a decoded or hand-built multipart tree.
///
/// Each part carries its headers in insertion order and the boundary token
/// (without the leading `--`) that delimited it. The outermost list of a
/// multi-part message has an empty boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part<B> {
    body: Body<B>,
    headers: Vec<Header<B>>,
    boundary: B,
}

impl<B: Default> Part<B> {
    /// Creates a leaf part holding `content`.
    pub fn leaf(content: impl Into<B>) -> Self {
        Self {
            body: Body::Content(content.into()),
            headers: Vec::new(),
            boundary: B::default(),
        }
    }

    /// Creates a list part holding `children` in order.
    pub fn list(children: impl IntoIterator<Item = Part<B>>) -> Self {
        Self {
            body: Body::List(children.into_iter().collect()),
            headers: Vec::new(),
            boundary: B::default(),
        }
    }
}

impl<B> Part<B> {
    /// Appends a header and returns the part.
    pub fn with_header(mut self, name: impl Into<B>, value: impl Into<B>) -> Self {
        self.push_header(name, value);
        self
    }

    /// Sets the boundary token and returns the part.
    pub fn with_boundary(mut self, boundary: impl Into<B>) -> Self {
        self.boundary = boundary.into();
        self
    }

    /// Returns the payload discriminant.
    pub fn kind(&self) -> Kind {
        self.body.kind()
    }

    /// Returns `true` for leaf parts.
    pub fn is_content(&self) -> bool {
        matches!(self.body, Body::Content(_))
    }

    /// Returns `true` for list parts.
    pub fn is_list(&self) -> bool {
        matches!(self.body, Body::List(_))
    }

    /// Returns `true` for parts that were never written.
    pub fn is_undefined(&self) -> bool {
        matches!(self.body, Body::Undefined)
    }

    /// Returns the leaf content.
    ///
    /// # Panics
    ///
    /// Panics when the part is not a leaf. Check [`Part::kind`] first or use
    /// [`Part::try_content`].
    pub fn content(&self) -> &B {
        match self.try_content() {
            Ok(content) => content,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the leaf content, or a type mismatch error.
    pub fn try_content(&self) -> Result<&B, PartError> {
        match &self.body {
            Body::Content(content) => Ok(content),
            other => Err(PartError::TypeMismatch {
                expected: Kind::Content,
                found: other.kind(),
            }),
        }
    }

    /// Returns the child parts.
    ///
    /// # Panics
    ///
    /// Panics when the part is not a list. Check [`Part::kind`] first or use
    /// [`Part::try_children`].
    pub fn children(&self) -> &[Part<B>] {
        match self.try_children() {
            Ok(children) => children,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the child parts, or a type mismatch error.
    pub fn try_children(&self) -> Result<&[Part<B>], PartError> {
        match &self.body {
            Body::List(children) => Ok(children),
            other => Err(PartError::TypeMismatch {
                expected: Kind::List,
                found: other.kind(),
            }),
        }
    }

    /// Returns the child list for appending, turning an undefined part into an empty list.
    pub fn children_mut(&mut self) -> Result<&mut Vec<Part<B>>, PartError> {
        if self.is_undefined() {
            self.body = Body::List(Vec::new());
        }

        match &mut self.body {
            Body::List(children) => Ok(children),
            other => Err(PartError::TypeMismatch {
                expected: Kind::List,
                found: other.kind(),
            }),
        }
    }

    /// Replaces the payload with leaf content.
    pub fn set_content(&mut self, content: impl Into<B>) {
        self.body = Body::Content(content.into());
    }

    /// Replaces the payload with a child list.
    pub fn set_children(&mut self, children: impl IntoIterator<Item = Part<B>>) {
        self.body = Body::List(children.into_iter().collect());
    }

    /// Returns the payload.
    pub fn body(&self) -> &Body<B> {
        &self.body
    }

    /// Consumes the part and returns its payload.
    pub fn into_body(self) -> Body<B> {
        self.body
    }

    /// Returns headers in insertion order.
    pub fn headers(&self) -> &[Header<B>] {
        &self.headers
    }

    /// Returns the header list for in-place edits.
    pub fn headers_mut(&mut self) -> &mut Vec<Header<B>> {
        &mut self.headers
    }

    /// Appends a header, keeping earlier duplicates.
    pub fn push_header(&mut self, name: impl Into<B>, value: impl Into<B>) {
        self.headers.push(Header::new(name, value));
    }

    pub(crate) fn set_headers(&mut self, headers: Vec<Header<B>>) {
        self.headers = headers;
    }

    /// Returns the boundary token, without the leading `--`.
    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    /// Replaces the boundary token.
    pub fn set_boundary(&mut self, boundary: impl Into<B>) {
        self.boundary = boundary.into();
    }
}

impl<B: Default> Part<B> {
    /// Returns the leaf content for writing, turning an undefined part into an empty leaf.
    pub fn content_mut(&mut self) -> Result<&mut B, PartError> {
        if self.is_undefined() {
            self.body = Body::Content(B::default());
        }

        match &mut self.body {
            Body::Content(content) => Ok(content),
            other => Err(PartError::TypeMismatch {
                expected: Kind::Content,
                found: other.kind(),
            }),
        }
    }
}

impl<B: AsRef<[u8]>> Part<B> {
    /// Returns the first header value whose name matches ASCII-case-insensitively.
    pub fn header(&self, name: &str) -> Option<&B> {
        self.headers
            .iter()
            .find(|header| header.name.as_ref().eq_ignore_ascii_case(name.as_bytes()))
            .map(|header| &header.value)
    }
}

impl BorrowedPart<'_> {
    /// Deep-copies this tree into an [`OwnedPart`] that no longer borrows the input.
    pub fn to_owned_part(&self) -> OwnedPart {
        let body = match &self.body {
            Body::Undefined => Body::Undefined,
            Body::Content(content) => Body::Content(Bytes::copy_from_slice(content)),
            Body::List(children) => Body::List(children.iter().map(Self::to_owned_part).collect()),
        };

        Part {
            body,
            headers: self
                .headers
                .iter()
                .map(|header| Header {
                    name: Bytes::copy_from_slice(header.name),
                    value: Bytes::copy_from_slice(header.value),
                })
                .collect(),
            boundary: Bytes::copy_from_slice(self.boundary),
        }
    }
}
