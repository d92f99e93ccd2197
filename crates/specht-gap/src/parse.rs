//! Parsing of printed GAP values.

use crate::error::EngineError;

/// Parses a printed integer.
pub(crate) fn parse_i64(text: &str) -> Result<i64, EngineError> {
    let token = text.trim();
    token.parse::<i64>().map_err(|_| EngineError::Conversion {
        value: token.to_owned(),
        target: "integer",
    })
}

/// Parses a printed list of integers, e.g. `[ 1, 0, 3, 0, 1 ]`.
///
/// GAP wraps long lists across lines; interior whitespace and newlines are
/// ignored. The empty list `[ ]` parses to an empty vector.
pub(crate) fn parse_int_list(text: &str) -> Result<Vec<i64>, EngineError> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| EngineError::Protocol(format!("expected a list, got `{trimmed}`")))?;

    let mut values = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        values.push(parse_i64(token)?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_i64("5").unwrap(), 5);
        assert_eq!(parse_i64("  -3 ").unwrap(), -3);
        assert_eq!(parse_i64("0").unwrap(), 0);
    }

    #[test]
    fn non_integers_name_the_value() {
        let err = parse_i64("v^2 + 1").unwrap_err();
        match err {
            EngineError::Conversion { value, target } => {
                assert_eq!(value, "v^2 + 1");
                assert_eq!(target, "integer");
            }
            other => panic!("expected a conversion error, got {other:?}"),
        }
    }

    #[test]
    fn lists() {
        assert_eq!(
            parse_int_list("[ 1, 0, 3, 0, 1 ]").unwrap(),
            vec![1, 0, 3, 0, 1]
        );
        assert_eq!(parse_int_list("[-2,7]").unwrap(), vec![-2, 7]);
        assert_eq!(parse_int_list("[ ]").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_int_list("[]").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn wrapped_lists() {
        let wrapped = "[ 1, 0,\n  3, 0,\n  1 ]";
        assert_eq!(parse_int_list(wrapped).unwrap(), vec![1, 0, 3, 0, 1]);
    }

    #[test]
    fn non_lists_are_protocol_errors() {
        assert!(matches!(
            parse_int_list("rec( coeffs := [] )"),
            Err(EngineError::Protocol(_))
        ));
        assert!(matches!(
            parse_int_list("[ 1, x ]"),
            Err(EngineError::Conversion { .. })
        ));
    }
}
