use log::{debug, warn};

use crate::engine::brackets;
use crate::engine::errors::EvalError;
use crate::engine::reduce;
use crate::format;

/// Evaluates arithmetic expression strings by textual reduction
pub struct Evaluator {}

impl Evaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self {}
    }

    /// Evaluate an expression and return the cleaned decimal result
    ///
    /// The pipeline validates bracket balance, strips whitespace and
    /// rewrites `**` to `^`, resolves bracket groups innermost-first, runs
    /// a final flat reduction pass, then cleans floating-point noise and a
    /// trailing `.0` out of the rendering.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The counts of `(` and `)` differ
    /// * A division or modulo has a zero divisor
    /// * An operand or result exceeds `1e15` in absolute value
    /// * A power has an exponent below 1
    pub fn evaluate(&self, expression: &str) -> Result<String, EvalError> {
        debug!("Evaluating expression: '{}'", expression);

        if expression.matches('(').count() != expression.matches(')').count() {
            warn!("Unpaired brackets in: '{}'", expression);
            return Err(EvalError::UnpairedBrackets(expression.to_string()));
        }

        let normalized = normalize(expression);
        let resolved = brackets::resolve(&normalized)?;
        let reduced = reduce::reduce(&resolved)?;
        let cleaned = format::clean(&reduced);
        let result = format::strip_dot_zero(&cleaned).to_string();

        debug!("'{}' evaluated to '{}'", expression, result);
        Ok(result)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip whitespace and rewrite the alternate `**` power notation
fn normalize(expression: &str) -> String {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.replace("**", "^")
}
