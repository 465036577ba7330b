// ============================================================================
// Number Grammar
// number := sign? digits (separator digits)?
// ============================================================================

use crate::domain::NumberParts;
use regex::Regex;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
// `$` matches only at the very end of the text, so a trailing newline fails.
static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?([0-9]+)(?:([.,])([0-9]+))?$").expect("number pattern is valid")
});

/// Match the whole of `value` against the number grammar.
///
/// Returns `None` for anything that is not `[+-]digits[(.|,)digits]`.
pub(crate) fn decompose(value: &str) -> Option<NumberParts<'_>> {
    let caps = NUMBER_REGEX.captures(value)?;
    let first_char = |i: usize| caps.get(i).and_then(|m| m.as_str().chars().next());

    Some(NumberParts {
        sign: first_char(1),
        integer: caps.get(2)?.as_str(),
        separator: first_char(3),
        fraction: caps.get(4).map_or("", |m| m.as_str()),
    })
}
