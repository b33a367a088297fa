//! Applies a compiled template to input lines and normalizes captured
//! argument values.

use crate::config::ExtractionConfig;
use crate::errors::ExtractionError;
use crate::format::{ArgumentGroup, FormatSpec};

/// The argument values extracted from one input line.
///
/// Values sit in ascending argument-index order; `None` is the explicit
/// null. The raw matched line is retained so a caller can reuse it as a
/// human-readable case label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArguments {
    line: String,
    values: Vec<Option<String>>,
}

impl ExtractedArguments {
    /// The raw input line these values were extracted from.
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// The values in ascending argument-index order.
    #[must_use]
    pub fn values(&self) -> &[Option<String>] {
        &self.values
    }

    /// Consume the extraction, keeping only the values.
    #[must_use]
    pub fn into_values(self) -> Vec<Option<String>> {
        self.values
    }

    /// Number of extracted values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the template addressed no arguments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FormatSpec {
    /// Extract the argument values from a single line.
    ///
    /// The line must match the compiled pattern in its entirety; a mismatch
    /// is a configuration or data error, not a per-line skip.
    ///
    /// # Errors
    /// Returns [`ExtractionError::LineMismatch`] when the line does not match
    /// the template. [`ExtractionError::MissingCapture`] signals an internal
    /// pattern/order inconsistency that compilation rules out.
    ///
    /// # Examples
    /// ```
    /// use formatted_source::{compile, ExtractionConfig, PlaceholderStyle};
    ///
    /// let spec = compile("{0} + {1} = {2}", PlaceholderStyle::Indexed, 3)?;
    /// let args = spec.extract("1 + 2 = 3", &ExtractionConfig::new())?;
    /// assert_eq!(
    ///     args.into_values(),
    ///     vec![Some("1".into()), Some("2".into()), Some("3".into())],
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extract(
        &self,
        line: &str,
        config: &ExtractionConfig,
    ) -> Result<ExtractedArguments, ExtractionError> {
        let caps = self
            .regex()
            .captures(line)
            .ok_or_else(|| ExtractionError::LineMismatch {
                line: line.to_string(),
                format: self.format().to_string(),
            })?;

        let mut values = Vec::with_capacity(self.argument_count());
        for index in 0..self.argument_count() {
            let name = ArgumentGroup::new(index).name();
            let raw = caps
                .name(&name)
                .ok_or_else(|| ExtractionError::MissingCapture {
                    index,
                    pattern: self.pattern().to_string(),
                })?;
            values.push(normalize_value(raw.as_str(), config));
        }

        Ok(ExtractedArguments {
            line: line.to_string(),
            values,
        })
    }

    /// Lazily extract argument values from each line, in input order.
    ///
    /// The returned iterator is single-pass and fuses after yielding the
    /// first error: no results are produced past a failing line. Splitting a
    /// multi-line block into lines is the caller's responsibility.
    pub fn extract_all<'a, I>(
        &'a self,
        lines: I,
        config: &'a ExtractionConfig,
    ) -> impl Iterator<Item = Result<ExtractedArguments, ExtractionError>> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        lines.into_iter().scan(false, move |failed, line| {
            if *failed {
                return None;
            }
            let result = self.extract(line.as_ref(), config);
            *failed = result.is_err();
            Some(result)
        })
    }
}

/// Normalize one raw captured substring into its final value.
///
/// Pure and deterministic: optional whitespace trim, then the emptiness and
/// quoting rules. An unquoted empty value is always null, mirroring the
/// convention that a bare empty field is structurally absent; a quoted empty
/// value is the one emptiness that is not null and becomes the configured
/// empty-value substitute. Exactly one leading and one trailing quote are
/// stripped, with no nested or escaped quote handling.
///
/// # Examples
/// ```
/// use formatted_source::{normalize_value, ExtractionConfig};
///
/// let config = ExtractionConfig::new().with_null_token("null");
/// assert_eq!(normalize_value("  x  ", &config), Some("x".into()));
/// assert_eq!(normalize_value("'quoted'", &config), Some("quoted".into()));
/// assert_eq!(normalize_value("null", &config), None);
/// assert_eq!(normalize_value("   ", &config), None);
/// assert_eq!(normalize_value("''", &config), Some(String::new()));
/// ```
#[must_use]
pub fn normalize_value(raw: &str, config: &ExtractionConfig) -> Option<String> {
    let value = if config.trim_whitespace() {
        raw.trim()
    } else {
        raw
    };

    if value.is_empty() {
        // Unquoted empty means structurally absent, regardless of the
        // null-token set.
        return None;
    }

    let quote = config.quote_char();
    let unwrapped = value
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(value);

    if config.is_null_token(unwrapped) {
        return None;
    }

    if unwrapped.is_empty() {
        // The author explicitly quoted an empty value.
        return Some(config.empty_value().to_string());
    }

    Some(unwrapped.to_string())
}
