//! Reducalc - arithmetic expression evaluation by textual reduction
//!
//! This library evaluates arithmetic expression strings without building an
//! AST: innermost bracket groups are collapsed first, then a flat
//! precedence-driven pattern-match loop rewrites the string until it denotes
//! a single value, and a formatting pass cleans floating-point noise out of
//! the decimal rendering.

pub mod engine;
pub mod format;

// Re-export the main public API
pub use engine::{EvalError, Evaluator};

/// Evaluate an arithmetic expression and return the formatted result
///
/// This is a convenience function that creates a default evaluator and runs
/// the full pipeline: bracket validation, reduction, and decimal cleanup.
///
/// # Arguments
///
/// * `expression` - Text containing digits, `.`, `+ - * / % ^` (or `**`),
///   parentheses, and whitespace
///
/// # Returns
///
/// * `Ok(String)` - The result as a decimal numeral, with no trailing `.0`
///   for integral values
/// * `Err(EvalError)` - If the expression has unpaired brackets, divides by
///   zero, exceeds the supported magnitude, or uses an unsupported exponent
///
/// # Errors
///
/// This function will return an error if:
/// * The counts of `(` and `)` differ
/// * A division or modulo has a zero divisor
/// * An operand or result exceeds `1e15` in absolute value
/// * A power has an exponent below 1
///
/// # Examples
///
/// ```
/// use reducalc::evaluate;
///
/// match evaluate("(1+2)*3") {
///     Ok(value) => assert_eq!(value, "9"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate(expression: &str) -> Result<String, EvalError> {
    Evaluator::new().evaluate(expression)
}
