use crate::error::Cause;

use super::{Rule, ensure, parse_int};

pub(crate) fn min(value: i64, args: &str) -> Result<(), Cause> {
    let bound = parse_int(args)?;
    ensure(value >= bound, Rule::Min)
}

pub(crate) fn max(value: i64, args: &str) -> Result<(), Cause> {
    let bound = parse_int(args)?;
    ensure(value <= bound, Rule::Max)
}

/// Every list element must parse, even after a match is found.
pub(crate) fn one_of(value: i64, args: &str) -> Result<(), Cause> {
    let options = args
        .split(',')
        .map(parse_int)
        .collect::<Result<Vec<_>, _>>()?;
    ensure(options.contains(&value), Rule::In)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{max, min, one_of};
    use crate::error::Cause;
    use crate::validator::rules::Rule;

    #[test]
    fn min_is_inclusive() {
        assert_eq!(min(4, "5"), Err(Cause::Violation(Rule::Min)));
        assert_eq!(min(5, "5"), Ok(()));
        assert_eq!(min(6, "5"), Ok(()));
        assert_eq!(min(-10, "-10"), Ok(()));
    }

    #[test]
    fn max_is_inclusive() {
        assert_eq!(max(11, "10"), Err(Cause::Violation(Rule::Max)));
        assert_eq!(max(10, "10"), Ok(()));
        assert_eq!(max(i64::MIN, "0"), Ok(()));
    }

    #[test]
    fn bounds_must_be_integers() {
        assert_eq!(min(1, "one"), Err(Cause::InvalidSyntax));
        assert_eq!(max(1, "1.0"), Err(Cause::InvalidSyntax));
    }

    #[test]
    fn one_of_matches_by_equality() {
        assert_eq!(one_of(2, "1,2,3"), Ok(()));
        assert_eq!(one_of(4, "1,2,3"), Err(Cause::Violation(Rule::In)));
        assert_eq!(one_of(-1, "-1"), Ok(()));
        assert_eq!(one_of(7, "+7"), Ok(()));
    }

    #[test]
    fn one_unparsable_element_fails_the_whole_list() {
        assert_eq!(one_of(1, "1,x"), Err(Cause::InvalidSyntax));
        assert_eq!(one_of(1, "1,"), Err(Cause::InvalidSyntax));
        assert_eq!(one_of(1, "1, 2"), Err(Cause::InvalidSyntax));
    }
}
