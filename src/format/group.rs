//! Named capture groups binding pattern regions to argument indices.

use std::fmt::Write as _;

/// Prefix keeping generated group names valid identifiers (a bare digit is
/// not a legal group name).
const GROUP_NAME_PREFIX: &str = "a";

/// Maps an argument's zero-based index to its named capture region.
///
/// The name, not the textual position, carries the binding, which is what
/// lets a template reference argument 2 before argument 0 and still extract
/// values in argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ArgumentGroup {
    index: usize,
}

impl ArgumentGroup {
    pub(crate) fn new(index: usize) -> Self {
        Self { index }
    }

    /// Name of the capture group holding this argument's raw value.
    pub(crate) fn name(self) -> String {
        format!("{GROUP_NAME_PREFIX}{}", self.index)
    }

    /// Append this argument's greedy match-anything capture region to a
    /// growing pattern source.
    pub(crate) fn push_capture_region(self, pattern: &mut String) {
        // Infallible for String targets.
        let _ = write!(pattern, "(?P<{GROUP_NAME_PREFIX}{}>.*)", self.index);
    }
}
