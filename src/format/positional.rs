//! Fixed-token placeholder dialect: one token, repeated once per argument.
//!
//! The Nth occurrence of the token, left to right, is argument N. There is no
//! reordering capability by construction. This dialect exists so a format
//! string may itself contain literal `{` and `}` characters (neither dialect
//! supports escaping): the author picks a token that cannot collide with the
//! literal content, such as `?` or `<X>`.

use crate::errors::TemplateError;

use super::tokenizer::Placeholder;

/// Locate every occurrence of `token` and assign argument indices by order
/// of appearance.
///
/// Occurrences are literal and non-overlapping, found left to right.
pub(crate) fn analyze(
    format: &str,
    token: &str,
    declared_count: usize,
) -> Result<Vec<Placeholder>, TemplateError> {
    if token.trim().is_empty() {
        return Err(TemplateError::EmptyPlaceholder);
    }

    let placeholders: Vec<Placeholder> = format
        .match_indices(token)
        .enumerate()
        .map(|(ordinal, (start, text))| Placeholder {
            start,
            end: start + text.len(),
            argument: ordinal,
        })
        .collect();

    let placeholder_count = placeholders.len();
    if declared_count < placeholder_count {
        return Err(TemplateError::InsufficientParameters {
            format: format.to_string(),
            placeholder_count,
            declared_count,
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

    #[rstest]
    #[case::question_mark("?", "? maps to ? and gives ?", 3)]
    #[case::empty_braces("{}", "{} -> {}", 2)]
    #[case::multi_char("<X>", "<X> beats <X>", 2)]
    fn numbers_occurrences_left_to_right(
        #[case] token: &str,
        #[case] format: &str,
        #[case] count: usize,
    ) {
        let placeholders = analyze(format, token, count)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert_eq!(arguments(&placeholders), (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let placeholders = analyze("aaa", "aa", 2)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert_eq!(
            placeholders,
            vec![Placeholder {
                start: 0,
                end: 2,
                argument: 0,
            }]
        );
    }

    #[test]
    fn rejects_blank_token() {
        assert!(matches!(
            analyze("a ? b", "", 1),
            Err(TemplateError::EmptyPlaceholder)
        ));
        assert!(matches!(
            analyze("a ? b", "  ", 1),
            Err(TemplateError::EmptyPlaceholder)
        ));
    }

    #[test]
    fn rejects_too_few_declared_parameters() {
        let Err(err) = analyze("? and ?", "?", 1) else {
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

    #[test]
    fn token_absent_yields_no_arguments() {
        let placeholders = analyze("plain text", "?", 0)
            .unwrap_or_else(|err| panic!("analysis should succeed: {err}"));
        assert!(placeholders.is_empty());
    }
}
