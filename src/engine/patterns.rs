use regex::Regex;
use std::sync::LazyLock;

/// Operator scan order; the first sign present in the expression selects
/// the pattern used for the next collapse.
pub(crate) const SIGNS: [char; 6] = ['+', '-', '*', '/', '^', '%'];

// Compiled once, reused across all calls. An operand is a maximal run of
// non-operator characters. A leading `-` is a negative literal: always on
// the right operand, and on the left operand only at the start of the
// string, so a mid-string binary minus is never absorbed.
static ANY_SIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^-?[^+\-*/^%]+|[^+\-*/^%]+)([+\-*/^%])(-?[^+\-*/^%]+)")
        .expect("valid regex literal")
});

static HIGH_PRECEDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^-?[^+\-*/^%]+|[^+\-*/^%]+)([*/%])(-?[^+\-*/^%]+)")
        .expect("valid regex literal")
});

// The power pattern takes no sign on the base: `-2^2` is `-(2^2)`.
static POWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^+\-*/^%]+)(\^)(-?[^+\-*/^%]+)").expect("valid regex literal")
});

/// Select the triple pattern for the sign under test
///
/// Power binds tighter than every other operator, so any other sign defers
/// to `^` while one is present. `+`/`-` defer to `* / %` in turn. Otherwise
/// the general pattern splits on any single sign.
pub(crate) fn pattern_for(sign: char, sentence: &str) -> &'static Regex {
    if sign != '^' && sentence.contains('^') {
        &POWER
    } else if matches!(sign, '+' | '-') && has_high_precedence_sign(sentence) {
        &HIGH_PRECEDENCE
    } else {
        &ANY_SIGN
    }
}

pub(crate) fn has_high_precedence_sign(sentence: &str) -> bool {
    ['*', '/', '%'].iter().any(|sign| sentence.contains(*sign))
}
