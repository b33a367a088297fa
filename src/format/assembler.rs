//! Assembles literal segments and capture regions into one anchored pattern.

use regex::Regex;

use crate::errors::TemplateError;

use super::group::ArgumentGroup;

/// Build the anchored line pattern from literal segments and argument order.
///
/// Literal segments are escaped so author-supplied prose matches verbatim
/// even when it contains regex metacharacters. Between segment `i` and
/// `i + 1` sits the greedy capture region for `argument_order[i]`, bounded
/// only by the surrounding literals and the line ends. The pattern is
/// anchored on both sides: it must match a candidate line in its entirety.
pub(crate) fn assemble(
    segments: &[String],
    argument_order: &[usize],
) -> Result<Regex, TemplateError> {
    let mut source = String::with_capacity(segments.iter().map(String::len).sum::<usize>() * 2 + 2);
    source.push('^');
    for (i, segment) in segments.iter().enumerate() {
        if !segment.is_empty() {
            source.push_str(&regex::escape(segment));
        }
        if let Some(&argument) = argument_order.get(i) {
            ArgumentGroup::new(argument).push_capture_region(&mut source);
        }
    }
    source.push('$');
    Regex::new(&source).map_err(TemplateError::from)
}
