use log::debug;

use crate::engine::errors::EvalError;
use crate::engine::patterns;

/// Magnitude cap for operands and results.
pub(crate) const VALUE_LIMIT: f64 = 1e15;

/// Collapse a flat (bracket-free) expression until it denotes a single
/// value or no reducible operator pattern remains
///
/// The first sign present selects the pattern (see [`patterns`]); the first
/// matched triple is evaluated and its text replaced by the computed value,
/// then the scan restarts. The loop stops when no sign remains, the pattern
/// has no match, the triple is irreducible, or the same match repeats.
///
/// # Errors
///
/// Returns an error on zero divisors, magnitude overflow, or an exponent
/// below 1.
pub(crate) fn reduce(expression: &str) -> Result<String, EvalError> {
    let mut sentence = expression.to_string();
    // No-progress guard, scoped to this call.
    let mut last_match: Option<String> = None;
    'scan: loop {
        for sign in patterns::SIGNS {
            if !sentence.contains(sign) {
                continue;
            }
            if sentence.contains("e+") {
                sentence = sentence.replace("e+", "e");
            }
            let Some(caps) = patterns::pattern_for(sign, &sentence).captures(&sentence) else {
                return Ok(sentence);
            };
            let matched = caps[0].to_string();
            if last_match.as_deref() == Some(matched.as_str()) {
                return Ok(sentence);
            }
            let first = caps[1].to_string();
            let op = caps[2].to_string();
            let second = caps[3].to_string();
            let Some(replacement) = apply(&sentence, &first, &op, &second)? else {
                return Ok(sentence);
            };
            debug!("Collapsing '{}' to '{}'", matched, replacement);
            last_match = Some(matched.clone());
            sentence = sentence.replacen(&matched, &replacement, 1);
            continue 'scan;
        }
        return Ok(sentence);
    }
}

/// Evaluate one matched triple, rendered to 15 fractional digits
///
/// Returns `None` when the triple is irreducible (a non-numeric operand
/// under anything but `+`).
fn apply(
    sentence: &str,
    first: &str,
    sign: &str,
    second: &str,
) -> Result<Option<String>, EvalError> {
    let (lhs, rhs) = match (first.parse::<f64>(), second.parse::<f64>()) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        // A non-numeric operand only reduces under `+`, as concatenation.
        _ if sign == "+" => return Ok(Some(format!("{}{}", first, second))),
        _ => return Ok(None),
    };
    if lhs.abs() > VALUE_LIMIT || rhs.abs() > VALUE_LIMIT {
        return Err(EvalError::ValueTooBig(sentence.to_string()));
    }
    let value = match sign {
        "+" => lhs + rhs,
        "-" => lhs - rhs,
        "*" => lhs * rhs,
        "/" | "%" => {
            if rhs == 0.0 {
                return Err(EvalError::ZeroDivision(sentence.to_string()));
            }
            if sign == "/" {
                lhs / rhs
            } else {
                lhs % rhs
            }
        }
        "^" => {
            if rhs < 1.0 {
                return Err(EvalError::ExponentError(sentence.to_string()));
            }
            raise(lhs, rhs as i64, sentence)?
        }
        _ => return Ok(None),
    };
    if value.abs() > VALUE_LIMIT {
        return Err(EvalError::ValueTooBig(sentence.to_string()));
    }
    Ok(Some(format!("{:.15}", value)))
}

/// Integer exponentiation by repeated multiplication, with the magnitude
/// check applied after every step
fn raise(base: f64, exponent: i64, sentence: &str) -> Result<f64, EvalError> {
    // A sub-unit base never grows, so the stepwise check only matters for
    // |base| > 1.
    if base.abs() <= 1.0 {
        return Ok(base.powf(exponent as f64));
    }
    let mut result = base;
    for _ in 1..exponent {
        result *= base;
        if result.abs() > VALUE_LIMIT {
            return Err(EvalError::ValueTooBig(sentence.to_string()));
        }
    }
    Ok(result)
}
