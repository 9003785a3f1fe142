mod infix_evaluator;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::infix_evaluator::evaluate_infix;
use crate::interpreter::token::Token;

/// Reduces the given tokens to a single value, respecting operator precedence
/// and parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to evaluate, in infix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluator::evaluate_tokens;
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(3.0),
///     Token::Operator(BinaryOperator::Add),
///     Token::Number(4.0),
///     Token::Operator(BinaryOperator::Multiply),
///     Token::Number(2.0),
/// ];
/// assert_eq!(evaluate_tokens(infix_tokens), Ok(11.0));
/// ```
pub fn evaluate_tokens(infix_tokens: Vec<Token>) -> Result<f64, EvaluationError> {
    if infix_tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }
    evaluate_infix(infix_tokens)
}
