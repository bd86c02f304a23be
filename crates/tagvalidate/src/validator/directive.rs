use crate::error::Cause;

/// Separates directives within one field's directive string.
pub(crate) const DIRECTIVE_SEPARATOR: char = ';';

/// Separates a rule name from its argument string.
pub(crate) const ARGUMENT_SEPARATOR: char = ':';

/// One `rule:args` instruction attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Directive<'a> {
    pub rule: &'a str,
    pub args: &'a str,
}

/// Parses a single directive token.
///
/// The token must contain exactly one `:` and a non-empty argument string.
/// The rule name itself is not checked here.
pub(crate) fn parse(token: &str) -> Result<Directive<'_>, Cause> {
    match token.split_once(ARGUMENT_SEPARATOR) {
        Some((rule, args)) if !args.is_empty() && !args.contains(ARGUMENT_SEPARATOR) => {
            Ok(Directive { rule, args })
        }
        _ => Err(Cause::InvalidSyntax),
    }
}

/// Splits a directive string and parses each token in order.
///
/// An empty string means "no directives" and yields nothing. In a non-empty
/// string every token is parsed, including empty ones left by a stray `;`.
pub(crate) fn parse_all(raw: &str) -> impl Iterator<Item = Result<Directive<'_>, Cause>> {
    let tokens = (!raw.is_empty()).then(|| raw.split(DIRECTIVE_SEPARATOR));
    tokens.into_iter().flatten().map(parse)
}
