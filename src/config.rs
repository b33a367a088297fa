//! Per-template settings controlling how captured argument text becomes a
//! final value.
//!
//! A config is built once per template and shared, read-only, across every
//! line extracted for that template. Defaults mirror the conventions of
//! CSV-style test sources: single-quote quoting, whitespace trimming on, no
//! null tokens, and a quoted empty value substituting to the empty string.

use std::collections::HashSet;

/// Immutable normalization settings applied to every captured argument value.
///
/// # Examples
/// ```
/// use formatted_source::ExtractionConfig;
///
/// let config = ExtractionConfig::new()
///     .with_quote_char('"')
///     .with_null_token("NULL")
///     .with_empty_value("EMPTY");
/// assert_eq!(config.quote_char(), '"');
/// assert!(config.is_null_token("NULL"));
/// assert_eq!(config.empty_value(), "EMPTY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    quote_char: char,
    trim_whitespace: bool,
    null_tokens: HashSet<String>,
    empty_value: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            quote_char: '\'',
            trim_whitespace: true,
            null_tokens: HashSet::new(),
            empty_value: String::new(),
        }
    }
}

impl ExtractionConfig {
    /// Create a config with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character recognized as an argument quote.
    #[must_use]
    pub fn with_quote_char(mut self, quote: char) -> Self {
        self.quote_char = quote;
        self
    }

    /// Enable or disable trimming of surrounding whitespace in raw values.
    #[must_use]
    pub fn with_trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// Add a token that converts an argument value to null when matched.
    #[must_use]
    pub fn with_null_token(mut self, token: impl Into<String>) -> Self {
        self.null_tokens.insert(token.into());
        self
    }

    /// Add several null tokens at once.
    #[must_use]
    pub fn with_null_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_tokens.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Set the value substituted for an explicitly quoted empty argument.
    #[must_use]
    pub fn with_empty_value(mut self, value: impl Into<String>) -> Self {
        self.empty_value = value.into();
        self
    }

    /// The character recognized as an argument quote.
    #[must_use]
    pub fn quote_char(&self) -> char {
        self.quote_char
    }

    /// Whether surrounding whitespace is trimmed from raw values.
    #[must_use]
    pub fn trim_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Whether `value` is configured to mean null.
    #[must_use]
    pub fn is_null_token(&self, value: &str) -> bool {
        self.null_tokens.contains(value)
    }

    /// The substitute for an explicitly quoted empty argument.
    #[must_use]
    pub fn empty_value(&self) -> &str {
        &self.empty_value
    }
}
