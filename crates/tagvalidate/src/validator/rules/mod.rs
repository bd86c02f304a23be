pub(crate) mod number;
pub(crate) mod string;

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use tagvalidate_types::{Kind, Value};

use crate::error::Cause;

/// A built-in validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Rule {
    /// Exact string length.
    Len,
    /// Lower bound on an integer or a string length.
    Min,
    /// Upper bound on an integer or a string length.
    Max,
    /// Membership in a comma-separated list.
    In,
}

impl Rule {
    /// Returns the name used for this rule in directives.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Len => "len",
            Self::Min => "min",
            Self::Max => "max",
            Self::In => "in",
        }
    }

    /// Looks up a rule by its directive name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "len" => Some(Self::Len),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "in" => Some(Self::In),
            _ => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type IntCheck = fn(i64, &str) -> Result<(), Cause>;
type StringCheck = fn(&str, &str) -> Result<(), Cause>;

#[derive(Clone, Copy)]
enum Check {
    Int(IntCheck),
    String(StringCheck),
}

/// Checks keyed by the kind of value they accept and the rule they implement.
static DISPATCH: LazyLock<HashMap<(Kind, Rule), Check>> = LazyLock::new(|| {
    HashMap::from([
        ((Kind::Int, Rule::Min), Check::Int(number::min)),
        ((Kind::Int, Rule::Max), Check::Int(number::max)),
        ((Kind::Int, Rule::In), Check::Int(number::one_of)),
        ((Kind::String, Rule::Len), Check::String(string::len)),
        ((Kind::String, Rule::Min), Check::String(string::min_len)),
        ((Kind::String, Rule::Max), Check::String(string::max_len)),
        ((Kind::String, Rule::In), Check::String(string::one_of)),
    ])
});

/// Applies the rule named `rule` with argument string `args` to `value`.
///
/// Unknown rule names, rules that do not apply to the value's kind, and
/// values of unsupported kinds are skipped.
pub(crate) fn apply(value: &Value<'_>, rule: &str, args: &str) -> Result<(), Cause> {
    let kind = value.kind();
    let Some(check) = Rule::from_name(rule).and_then(|r| DISPATCH.get(&(kind, r))) else {
        tracing::trace!(rule, %kind, "no check registered, skipping directive");
        return Ok(());
    };

    match (check, value) {
        (Check::Int(check), Value::Int(v)) => check(*v, args),
        (Check::String(check), Value::String(s)) => check(*s, args),
        _ => Ok(()),
    }
}

/// Parses a base-10 integer argument.
pub(crate) fn parse_int(arg: &str) -> Result<i64, Cause> {
    arg.parse().map_err(|_| Cause::InvalidSyntax)
}

/// Maps a check outcome to a violation of `rule`.
pub(crate) fn ensure(ok: bool, rule: Rule) -> Result<(), Cause> {
    if ok {
        Ok(())
    } else {
        Err(Cause::Violation(rule))
    }
}
