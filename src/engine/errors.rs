use thiserror::Error;

/// Errors that can occur during expression evaluation
///
/// Every variant carries the expression (or partially reduced expression)
/// at the point of failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("unpaired brackets in '{0}'")]
    UnpairedBrackets(String),
    #[error("value above the supported magnitude in '{0}'")]
    ValueTooBig(String),
    #[error("division or modulo by zero in '{0}'")]
    ZeroDivision(String),
    #[error("exponent below 1 in '{0}'")]
    ExponentError(String),
}

impl EvalError {
    /// Short name of the error class, used in the shell's error line
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::UnpairedBrackets(_) => "UnpairedBrackets",
            EvalError::ValueTooBig(_) => "ValueTooBig",
            EvalError::ZeroDivision(_) => "ZeroDivision",
            EvalError::ExponentError(_) => "ExponentError",
        }
    }

    /// The expression carried at the point of failure
    pub fn expression(&self) -> &str {
        match self {
            EvalError::UnpairedBrackets(expression)
            | EvalError::ValueTooBig(expression)
            | EvalError::ZeroDivision(expression)
            | EvalError::ExponentError(expression) => expression,
        }
    }
}
