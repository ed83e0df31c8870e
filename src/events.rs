use std::fmt;

/// Status returned by an event hook.
///
/// The decoder records the status but does not stop on [`EventStatus::Stop`];
/// hooks are notifications only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    /// Keep decoding.
    #[default]
    Continue,
    /// Request that decoding stop.
    Stop,
}

/// Observer notified while a message is decoded.
///
/// Every hook receives a slice of the input. All hooks default to
/// [`EventStatus::Continue`], so implementors override only what they need.
pub trait Events {
    /// Called with the boundary token (without `--`) of each nesting level.
    fn on_boundary(&mut self, _boundary: &[u8]) -> EventStatus {
        EventStatus::Continue
    }

    /// Called with each header field name.
    fn on_header_field(&mut self, _name: &[u8]) -> EventStatus {
        EventStatus::Continue
    }

    /// Called with each header value, after its name.
    fn on_header_value(&mut self, _value: &[u8]) -> EventStatus {
        EventStatus::Continue
    }

    /// Called with the content of each leaf part.
    fn on_part_data(&mut self, _data: &[u8]) -> EventStatus {
        EventStatus::Continue
    }
}

/// Observer that ignores every event.
impl Events for () {}

type Hook<'f> = Box<dyn FnMut(&[u8]) -> EventStatus + 'f>;

/// Closure-backed [`Events`] implementation with independent optional hooks.
#[derive(Default)]
pub struct Callbacks<'f> {
    boundary: Option<Hook<'f>>,
    header_field: Option<Hook<'f>>,
    header_value: Option<Hook<'f>>,
    part_data: Option<Hook<'f>>,
}

impl<'f> Callbacks<'f> {
    /// Creates a set with no hooks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the boundary hook.
    pub fn on_boundary(mut self, hook: impl FnMut(&[u8]) -> EventStatus + 'f) -> Self {
        self.boundary = Some(Box::new(hook));
        self
    }

    /// Installs the header field hook.
    pub fn on_header_field(mut self, hook: impl FnMut(&[u8]) -> EventStatus + 'f) -> Self {
        self.header_field = Some(Box::new(hook));
        self
    }

    /// Installs the header value hook.
    pub fn on_header_value(mut self, hook: impl FnMut(&[u8]) -> EventStatus + 'f) -> Self {
        self.header_value = Some(Box::new(hook));
        self
    }

    /// Installs the part data hook.
    pub fn on_part_data(mut self, hook: impl FnMut(&[u8]) -> EventStatus + 'f) -> Self {
        self.part_data = Some(Box::new(hook));
        self
    }
}

fn call(hook: &mut Option<Hook<'_>>, bytes: &[u8]) -> EventStatus {
    hook.as_mut().map_or(EventStatus::Continue, |hook| hook(bytes))
}

impl Events for Callbacks<'_> {
    fn on_boundary(&mut self, boundary: &[u8]) -> EventStatus {
        call(&mut self.boundary, boundary)
    }

    fn on_header_field(&mut self, name: &[u8]) -> EventStatus {
        call(&mut self.header_field, name)
    }

    fn on_header_value(&mut self, value: &[u8]) -> EventStatus {
        call(&mut self.header_value, value)
    }

    fn on_part_data(&mut self, data: &[u8]) -> EventStatus {
        call(&mut self.part_data, data)
    }
}

impl fmt::Debug for Callbacks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("boundary", &self.boundary.is_some())
            .field("header_field", &self.header_field.is_some())
            .field("header_value", &self.header_value.is_some())
            .field("part_data", &self.part_data.is_some())
            .finish()
    }
}

pub(crate) fn acknowledge(status: EventStatus, hook: &'static str) {
    #[cfg(feature = "tracing")]
    if status == EventStatus::Stop {
        tracing::trace!(hook, "decode: event hook requested stop, continuing");
    }

    #[cfg(not(feature = "tracing"))]
    let _ = (status, hook);
}
