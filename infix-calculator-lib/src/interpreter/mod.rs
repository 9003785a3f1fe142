pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::evaluate_tokens;
use log::debug;

/// Calculates the value of the given arithmetic expression.
///
/// Supports `+`, `-`, `*` and `/` with the usual precedence, parentheses,
/// and decimal numbers. Every call is independent of any other.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or the kind of error that made it invalid.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluate;
/// use infix_calculator::interpreter::error::EvaluationError;
///
/// assert_eq!(evaluate("(1 + 2) * 3"), Ok(9.0));
/// assert_eq!(evaluate("10 / 0"), Err(EvaluationError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let tokens = lexer::tokenize(expression)?;
    let value = evaluate_tokens(tokens);
    if let Err(error) = value {
        debug!("Failed to evaluate {:?}: {}", expression, error);
    }
    value
}

/// Renders a value as the shortest decimal text that parses back to the same
/// value, without exponent notation.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::format_value;
///
/// assert_eq!(format_value(11.0), "11");
/// assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
/// ```
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
