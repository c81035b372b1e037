use log::debug;

use crate::engine::errors::EvalError;
use crate::engine::reduce;

/// Eliminate all parentheses by reducing innermost groups first
///
/// Scans left to right, accumulating the contents of the innermost open
/// group. On `)` the accumulator is reduced and the first textual
/// occurrence of `(accumulator)` is replaced by the reduced value, then the
/// scan restarts on the shorter string. A full pass without `)` means no
/// parentheses remain.
///
/// # Errors
///
/// Propagates any error raised while reducing a group's contents.
pub(crate) fn resolve(expression: &str) -> Result<String, EvalError> {
    let mut sentence = expression.to_string();
    'scan: loop {
        let mut operation = String::new();
        for ch in sentence.chars() {
            match ch {
                '(' => operation.clear(),
                ')' => {
                    let reduced = reduce::reduce(&operation)?;
                    let group = format!("({})", operation);
                    debug!("Reducing group '{}' to '{}'", group, reduced);
                    let replaced = sentence.replacen(&group, &reduced, 1);
                    if replaced == sentence {
                        // Interleaved brackets such as `)(` pass the count
                        // check but reconstruct no group; stop here.
                        return Ok(sentence);
                    }
                    sentence = replaced;
                    continue 'scan;
                }
                _ => operation.push(ch),
            }
        }
        return Ok(sentence);
    }
}
