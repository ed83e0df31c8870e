/// Default recursion ceiling for nested multipart bodies.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Structural limits enforced while decoding.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth. A body at depth `d` is rejected when `d >= max_depth`,
    /// so the outermost message counts as depth 0.
    pub max_depth: usize,
    /// Maximum number of parts produced across all nesting levels.
    pub max_parts: Option<usize>,
}

impl Limits {
    /// Creates the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when a body at `depth` may be decoded.
    pub fn allows_depth(&self, depth: usize) -> bool {
        depth < self.max_depth
    }

    /// Returns `true` when `count` parts stay within the part limit.
    pub fn allows_parts(&self, count: usize) -> bool {
        self.max_parts.map_or(true, |max| count <= max)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_parts: None,
        }
    }
}
