//! Error types surfaced by template compilation and line extraction.

use thiserror::Error;

/// Errors raised while compiling a format string into a
/// [`FormatSpec`](crate::FormatSpec).
///
/// Every variant carries the offending format string (or token) so the
/// failure can be diagnosed without the call site.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The format string references more arguments than the method declares.
    #[error(
        "format string `{format}` references {placeholder_count} argument(s) \
         but only {declared_count} method parameter(s) are declared"
    )]
    InsufficientParameters {
        /// The offending format string.
        format: String,
        /// Number of placeholders found in the format string.
        placeholder_count: usize,
        /// Number of parameters the target method declares.
        declared_count: usize,
    },

    /// Indexed placeholders do not form the exact contiguous set `{0..k-1}`.
    #[error(
        "argument indices in format string `{format}` are invalid: \
         expected {expected:?} but got {found:?}"
    )]
    InvalidIndexSet {
        /// The offending format string.
        format: String,
        /// The contiguous zero-based indices the placeholder count requires.
        expected: Vec<usize>,
        /// The indices actually referenced, sorted ascending.
        found: Vec<usize>,
    },

    /// An indexed placeholder's digit run does not fit an argument index.
    #[error("argument index `{digits}` in format string `{format}` is out of range")]
    IndexOutOfRange {
        /// The offending format string.
        format: String,
        /// The digit run that failed to parse.
        digits: String,
    },

    /// The fixed placeholder token is empty or whitespace-only.
    #[error("argument placeholder token must not be blank")]
    EmptyPlaceholder,

    /// The assembled line pattern failed to compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Errors raised while extracting argument values from a single input line.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The line does not match the compiled template in its entirety.
    #[error("line `{line}` does not match format string `{format}`")]
    LineMismatch {
        /// The offending input line.
        line: String,
        /// The format string the line was matched against.
        format: String,
    },

    /// A capture region for a validated argument index was absent.
    ///
    /// This indicates an inconsistency between the compiled pattern and its
    /// argument order, which compilation rules out; it is not a user error.
    #[error("no capture region for argument {index} in pattern `{pattern}`")]
    MissingCapture {
        /// The argument index whose capture region was absent.
        index: usize,
        /// The compiled pattern source.
        pattern: String,
    },
}
