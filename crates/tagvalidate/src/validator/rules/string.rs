use crate::error::Cause;

use super::{Rule, ensure, parse_int};

/// Lengths are measured in bytes.
fn byte_len(value: &str) -> i64 {
    i64::try_from(value.len()).unwrap_or(i64::MAX)
}

pub(crate) fn len(value: &str, args: &str) -> Result<(), Cause> {
    let expected = parse_int(args)?;
    ensure(byte_len(value) == expected, Rule::Len)
}

pub(crate) fn min_len(value: &str, args: &str) -> Result<(), Cause> {
    super::number::min(byte_len(value), args)
}

pub(crate) fn max_len(value: &str, args: &str) -> Result<(), Cause> {
    super::number::max(byte_len(value), args)
}

pub(crate) fn one_of(value: &str, args: &str) -> Result<(), Cause> {
    ensure(args.split(',').any(|option| option == value), Rule::In)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{len, max_len, min_len, one_of};
    use crate::error::Cause;
    use crate::validator::rules::Rule;

    #[test]
    fn len_requires_exact_length() {
        assert_eq!(len("ab", "3"), Err(Cause::Violation(Rule::Len)));
        assert_eq!(len("abc", "3"), Ok(()));
        assert_eq!(len("abcd", "3"), Err(Cause::Violation(Rule::Len)));
        assert_eq!(len("", "0"), Ok(()));
    }

    #[test]
    fn len_argument_must_be_an_integer() {
        assert_eq!(len("abc", "x"), Err(Cause::InvalidSyntax));
    }

    #[test]
    fn lengths_count_bytes() {
        // "é" is two bytes in UTF-8.
        assert_eq!(len("é", "2"), Ok(()));
        assert_eq!(min_len("é", "2"), Ok(()));
        assert_eq!(max_len("éé", "3"), Err(Cause::Violation(Rule::Max)));
    }

    #[test]
    fn min_and_max_report_their_own_rule() {
        assert_eq!(min_len("ab", "3"), Err(Cause::Violation(Rule::Min)));
        assert_eq!(max_len("abcd", "3"), Err(Cause::Violation(Rule::Max)));
        assert_eq!(min_len("abc", "3"), Ok(()));
        assert_eq!(max_len("abc", "3"), Ok(()));
        assert_eq!(min_len("abc", "three"), Err(Cause::InvalidSyntax));
    }

    #[test]
    fn one_of_compares_raw_substrings() {
        assert_eq!(one_of("b", "a,b,c"), Ok(()));
        assert_eq!(one_of("d", "a,b,c"), Err(Cause::Violation(Rule::In)));
        assert_eq!(one_of(" b", "a, b"), Ok(()));
        assert_eq!(one_of("b", "a, b"), Err(Cause::Violation(Rule::In)));
        assert_eq!(one_of("", "a,"), Ok(()));
        assert_eq!(one_of("1", "1,2"), Ok(()));
    }
}
