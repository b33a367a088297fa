//! Indexed placeholder dialect: `{N}` references method parameter `N`.
//!
//! Mirrors the convention used for customizing parameterized test display
//! names: `{0}` is the first argument, `{3}` the fourth. Placeholders may
//! appear in any textual order, but together they must reference exactly the
//! contiguous zero-based set `{0..k-1}`.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::TemplateError;

use super::tokenizer::Placeholder;

static INDEXED_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").unwrap_or_else(|_| unreachable!()));

/// Locate every `{N}` placeholder and validate the referenced index set.
///
/// Returns the occurrences in textual order; their `argument` fields are the
/// parsed indices and form the template's argument order.
pub(crate) fn analyze(
    format: &str,
    declared_count: usize,
) -> Result<Vec<Placeholder>, TemplateError> {
    let mut placeholders = Vec::new();
    for caps in INDEXED_PLACEHOLDER.captures_iter(format) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let argument =
            digits
                .as_str()
                .parse::<usize>()
                .map_err(|_| TemplateError::IndexOutOfRange {
                    format: format.to_string(),
                    digits: digits.as_str().to_string(),
                })?;
        placeholders.push(Placeholder {
            start: whole.start(),
            end: whole.end(),
            argument,
        });
    }

    let placeholder_count = placeholders.len();
    if declared_count < placeholder_count {
        return Err(TemplateError::InsufficientParameters {
            format: format.to_string(),
            placeholder_count,
            declared_count,
        });
    }

    let expected: Vec<usize> = (0..placeholder_count).collect();
    let mut found: Vec<usize> = placeholders.iter().map(|p| p.argument).collect();
    found.sort_unstable();
    // Sorted equality rules out gaps, repeats, and out-of-range references in
    // one comparison.
    if found != expected {
        return Err(TemplateError::InvalidIndexSet {
            format: format.to_string(),
            expected,
            found,
        });
    }

    Ok(placeholders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn arguments(placeholders: &[Placeholder]) -> Vec<usize> {
        placeholders.iter().map(|p| p.argument).collect()
    }

    #[test]
    fn finds_placeholders_in_textual_order() {
        let placeholders = analyze("{1} before {0}", 2)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert_eq!(arguments(&placeholders), vec![1, 0]);
    }

    #[test]
    fn records_placeholder_offsets() {
        let placeholders = analyze("{0} + {1}", 2)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert_eq!(
            placeholders,
            vec![
                Placeholder {
                    start: 0,
                    end: 3,
                    argument: 0,
                },
                Placeholder {
                    start: 6,
                    end: 9,
                    argument: 1,
                },
            ]
        );
    }

    #[test]
    fn allows_extra_declared_parameters() {
        let placeholders = analyze("{0} only", 5)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert_eq!(arguments(&placeholders), vec![0]);
    }

    #[test]
    fn rejects_too_few_declared_parameters() {
        let Err(err) = analyze("{0} and {1}", 1) else {
            panic!("analysis should fail");
        };
        assert!(matches!(
            err,
            TemplateError::InsufficientParameters {
                placeholder_count: 2,
                declared_count: 1,
                ..
            }
        ));
    }

    #[rstest]
    #[case::gap("{0} skips to {2}", vec![0, 2])]
    #[case::repeat("{0} twice {0}", vec![0, 0])]
    #[case::not_zero_based("{1} and {2}", vec![1, 2])]
    #[case::lone_high_index("only {4}", vec![4])]
    fn rejects_non_contiguous_index_sets(#[case] format: &str, #[case] sorted: Vec<usize>) {
        let Err(err) = analyze(format, 9) else {
            panic!("analysis should fail for `{format}`");
        };
        let TemplateError::InvalidIndexSet { found, .. } = err else {
            panic!("expected invalid index set, got {err}");
        };
        assert_eq!(found, sorted);
    }

    #[test]
    fn rejects_index_digits_that_overflow() {
        let Err(err) = analyze("{99999999999999999999}", 1) else {
            panic!("analysis should fail");
        };
        assert!(matches!(err, TemplateError::IndexOutOfRange { .. }));
    }

    #[test]
    fn ignores_braces_without_digits() {
        let placeholders = analyze("{x} {} { 0 }", 0)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert!(placeholders.is_empty());
    }
}
