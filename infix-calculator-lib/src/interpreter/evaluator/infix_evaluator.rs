use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// An entry on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum PendingOperator {
    Binary(BinaryOperator),
    /// Only ever removed by a matching closing parenthesis.
    LeftParen,
}

pub(super) fn evaluate_infix(tokens: Vec<Token>) -> Result<f64, EvaluationError> {
    let mut operands: Vec<f64> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<PendingOperator> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::LeftParen => operators.push(PendingOperator::LeftParen),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut operands, operator)?
            }
            Token::RightParen => parse_closing_parenthesis_token(&mut operators, &mut operands)?,
        };
    }

    reduce_leftover_operators(&mut operators, &mut operands)?;

    match operands.as_slice() {
        [result] => Ok(*result),
        leftover => {
            trace!("Expected one operand after reduction, found {:?}", leftover);
            Err(EvaluationError::InvalidExpression)
        }
    }
}

fn reduce_leftover_operators(
    operators: &mut Vec<PendingOperator>,
    operands: &mut Vec<f64>,
) -> Result<(), EvaluationError> {
    while let Some(pending) = operators.pop() {
        match pending {
            PendingOperator::LeftParen => return Err(EvaluationError::MismatchedParentheses),
            PendingOperator::Binary(operator) => reduce(operands, operator)?,
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<PendingOperator>,
    operands: &mut Vec<f64>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop() {
            None => return Err(EvaluationError::MismatchedParentheses),
            // Discard the open parenthesis.
            Some(PendingOperator::LeftParen) => return Ok(()),
            Some(PendingOperator::Binary(operator)) => reduce(operands, operator)?,
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<PendingOperator>,
    operands: &mut Vec<f64>,
    incoming: BinaryOperator,
) -> Result<(), EvaluationError> {
    while let Some(&PendingOperator::Binary(top_of_operator_stack)) = operators.last() {
        if !top_of_operator_stack.precedence_ge(&incoming) {
            break;
        }
        operators.pop();
        reduce(operands, top_of_operator_stack)?;
    }

    operators.push(PendingOperator::Binary(incoming));
    Ok(())
}

/// Pops the right-hand operand, then the left-hand one, and pushes the result
/// of applying `operator` to them.
fn reduce(operands: &mut Vec<f64>, operator: BinaryOperator) -> Result<(), EvaluationError> {
    let (a, b) = match (operands.pop(), operands.pop()) {
        (Some(b), Some(a)) => (a, b),
        _ => {
            trace!("Not enough operands to apply {}", operator);
            return Err(EvaluationError::InvalidExpression);
        }
    };
    let result = operator.apply(a, b)?;
    trace!("Reduced {} {} {} to {}", a, operator, b, result);
    operands.push(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn operator(symbol: char) -> Token {
        Token::from_symbol(symbol).unwrap()
    }

    #[test]
    fn evaluate_simple_expression() {
        // 1 + 2
        let infix = [number(1.0), operator('+'), number(2.0)].to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 3.0)
    }

    #[test]
    fn evaluate_simple_parenthesised_expression() {
        // 10 - (4 + 3)
        let infix = [
            number(10.0),
            operator('-'),
            Token::LeftParen,
            number(4.0),
            operator('+'),
            number(3.0),
            Token::RightParen,
        ]
        .to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 3.0)
    }

    #[test]
    fn evaluate_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = [
            number(1.0),
            operator('+'),
            number(2.0),
            operator('*'),
            number(3.0),
            operator('-'),
            number(4.0),
        ]
        .to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 3.0)
    }

    #[test]
    fn evaluate_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = [
            number(1.0),
            operator('+'),
            Token::LeftParen,
            Token::LeftParen,
            number(2.0),
            operator('+'),
            number(3.0),
            Token::RightParen,
            operator('*'),
            number(4.0),
            Token::RightParen,
        ]
        .to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 21.0)
    }

    #[test]
    fn subtraction_chain_is_left_associative() {
        // 10 - 4 - 3
        let infix = [
            number(10.0),
            operator('-'),
            number(4.0),
            operator('-'),
            number(3.0),
        ]
        .to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 3.0)
    }

    #[test]
    fn division_chain_is_left_associative() {
        // 64 / 4 / 2
        let infix = [
            number(64.0),
            operator('/'),
            number(4.0),
            operator('/'),
            number(2.0),
        ]
        .to_vec();

        let actual = evaluate_infix(infix).unwrap();

        assert_eq!(actual, 8.0)
    }

    #[test]
    fn extra_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = [
            Token::LeftParen,
            number(1.0),
            operator('+'),
            number(2.0),
            Token::RightParen,
            Token::RightParen,
        ]
        .to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::MismatchedParentheses))
    }

    #[test]
    fn unclosed_parenthesis_is_not_reduced_past() {
        // (1 + 2
        let infix = [Token::LeftParen, number(1.0), operator('+'), number(2.0)].to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::MismatchedParentheses))
    }

    #[test]
    fn missing_operand_should_return_err() {
        // 1 +
        let infix = [number(1.0), operator('+')].to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::InvalidExpression))
    }

    #[test]
    fn adjacent_numbers_should_return_err() {
        // 1 2
        let infix = [number(1.0), number(2.0)].to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::InvalidExpression))
    }

    #[test]
    fn empty_parentheses_should_return_err() {
        // ()
        let infix = [Token::LeftParen, Token::RightParen].to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::InvalidExpression))
    }

    #[test]
    fn division_by_zero_inside_parentheses_should_return_err() {
        // 1 + (2 / (3 - 3))
        let infix = [
            number(1.0),
            operator('+'),
            Token::LeftParen,
            number(2.0),
            operator('/'),
            Token::LeftParen,
            number(3.0),
            operator('-'),
            number(3.0),
            Token::RightParen,
            Token::RightParen,
        ]
        .to_vec();

        let actual = evaluate_infix(infix);

        assert_eq!(actual, Err(EvaluationError::DivisionByZero))
    }
}
