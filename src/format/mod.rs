//! Format-template compilation: dialect analysis, validation, and pattern
//! assembly.

mod assembler;
mod group;
mod indexed;
mod positional;
mod tokenizer;

use regex::Regex;

use crate::errors::TemplateError;

pub(crate) use group::ArgumentGroup;

/// The placeholder dialect a format template is written in.
///
/// Chosen once at configuration time; the two dialects are incompatible and
/// neither supports escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `{N}` placeholders referencing zero-based method parameter indices.
    ///
    /// Indices may appear in any textual order but must together form the
    /// exact contiguous set `{0..k-1}`.
    Indexed,
    /// A fixed token repeated once per argument; the Nth occurrence, left to
    /// right, is argument N.
    Token(String),
}

impl PlaceholderStyle {
    /// Fixed-token style with the given placeholder token.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }
}

/// A compiled format template: the anchored line pattern paired with the
/// argument order.
///
/// Built once per template and reused, read-only, for every associated line.
/// Holds no per-line state, so it is safely shareable across threads.
///
/// Invariant, enforced at compilation: `argument_order` is a permutation of
/// `0..argument_order.len()`, and the pattern holds one named capture region
/// per entry.
#[derive(Debug, Clone)]
pub struct FormatSpec {
    format: String,
    pattern: Regex,
    argument_order: Vec<usize>,
}

impl FormatSpec {
    /// The format string this specification was compiled from.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Source text of the compiled line pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of arguments the template addresses.
    ///
    /// This is the placeholder count, never the target method's full
    /// parameter count.
    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.argument_order.len()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.pattern
    }
}

/// Compile a format string into a reusable [`FormatSpec`].
///
/// `declared_count` is the number of parameters the target method declares.
/// It must be at least the number of placeholders found; extra parameters
/// beyond the placeholder count are allowed and ignored (they serve
/// non-template purposes for the caller).
///
/// # Errors
/// Returns [`TemplateError`] when the declared parameter count is too small,
/// when indexed placeholders do not form an exact contiguous zero-based set,
/// when a fixed placeholder token is blank, or when the assembled pattern
/// fails to compile.
///
/// # Examples
/// ```
/// use formatted_source::{compile, PlaceholderStyle};
///
/// let spec = compile("{0} + {1} = {2}", PlaceholderStyle::Indexed, 3)?;
/// assert_eq!(spec.argument_count(), 3);
///
/// let spec = compile("? or ?", PlaceholderStyle::token("?"), 2)?;
/// assert_eq!(spec.argument_count(), 2);
/// # Ok::<(), formatted_source::TemplateError>(())
/// ```
pub fn compile(
    format: &str,
    style: PlaceholderStyle,
    declared_count: usize,
) -> Result<FormatSpec, TemplateError> {
    let placeholders = match &style {
        PlaceholderStyle::Indexed => indexed::analyze(format, declared_count)?,
        PlaceholderStyle::Token(token) => positional::analyze(format, token, declared_count)?,
    };

    let argument_order: Vec<usize> = placeholders.iter().map(|p| p.argument).collect();
    let segments = tokenizer::segments(format, &placeholders);
    let pattern = assembler::assemble(&segments, &argument_order)?;
    log::debug!(
        "compiled format string `{format}` into line pattern `{}`",
        pattern.as_str()
    );

    Ok(FormatSpec {
        format: format.to_string(),
        pattern,
        argument_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(format: &str, style: PlaceholderStyle, declared: usize) -> FormatSpec {
        compile(format, style, declared)
            .unwrap_or_else(|err| panic!("`{format}` should compile: {err}"))
    }

    #[test]
    fn indexed_template_compiles_to_anchored_pattern() {
        let spec = spec("{0} + {1} = {2}", PlaceholderStyle::Indexed, 3);
        assert_eq!(
            spec.pattern(),
            r"^(?P<a0>.*) \+ (?P<a1>.*) = (?P<a2>.*)$"
        );
        assert_eq!(spec.argument_count(), 3);
    }

    #[test]
    fn displaced_ordering_binds_regions_by_index() {
        let spec = spec("{2} wins over {0} and {1}", PlaceholderStyle::Indexed, 3);
        assert_eq!(
            spec.pattern(),
            r"^(?P<a2>.*) wins over (?P<a0>.*) and (?P<a1>.*)$"
        );
    }

    #[test]
    fn token_template_escapes_the_surrounding_literals() {
        let spec = spec("f({}) = {}", PlaceholderStyle::token("{}"), 2);
        assert_eq!(spec.pattern(), r"^f\((?P<a0>.*)\) = (?P<a1>.*)$");
    }

    #[test]
    fn literal_only_template_addresses_no_arguments() {
        let spec = spec("nothing to capture", PlaceholderStyle::Indexed, 0);
        assert_eq!(spec.argument_count(), 0);
        assert!(spec.regex().is_match("nothing to capture"));
    }

    #[test]
    fn retains_format_string_for_diagnostics() {
        let spec = spec("{0}!", PlaceholderStyle::Indexed, 1);
        assert_eq!(spec.format(), "{0}!");
    }
}
