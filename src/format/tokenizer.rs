//! Splits a format string into the literal segments around its placeholders.

/// A placeholder occurrence within a format string.
///
/// `start..end` are byte offsets of the placeholder text itself; `argument`
/// is the zero-based argument index the placeholder resolves to (parsed from
/// its digits in the indexed dialect, its occurrence ordinal in the
/// fixed-token dialect).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placeholder {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) argument: usize,
}

/// Return the literal text segments surrounding the placeholders, in order.
///
/// Always yields exactly `placeholders.len() + 1` segments. A segment may be
/// empty: adjacent placeholders, or a placeholder at the start or end of the
/// format string. Segments are taken verbatim; surrounding whitespace stays
/// significant in both dialects and must appear in matched lines.
pub(crate) fn segments(format: &str, placeholders: &[Placeholder]) -> Vec<String> {
    let mut parts = Vec::with_capacity(placeholders.len() + 1);
    let mut cursor = 0;
    for placeholder in placeholders {
        let part = format.get(cursor..placeholder.start).unwrap_or_default();
        parts.push(part.to_string());
        cursor = placeholder.end;
    }
    parts.push(format.get(cursor..).unwrap_or_default().to_string());
    parts
}
