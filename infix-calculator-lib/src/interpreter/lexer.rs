use crate::interpreter::error::EvaluationError;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::{debug, trace};

/// Splits the given expression into tokens.
///
/// Whitespace separates tokens but never produces one. A run of digits and
/// decimal points becomes a single [`Token::Number`]; operators and
/// parentheses are one token each.
///
/// # Arguments
///
/// * `expression`: The text to split.
///
/// returns: The tokens in the order they appear, or an error if the input
/// contains no tokens, a character outside the expression alphabet, or a
/// number that is not a valid floating-point literal.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("(1.5)").unwrap();
/// assert_eq!(tokens, vec![Token::LeftParen, Token::Number(1.5), Token::RightParen]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let mut tokens = Vec::new();
    let mut has_invalid_number = false;
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
        } else if is_number_character(character) {
            let literal: String = characters
                .peeking_take_while(|&c| is_number_character(c))
                .collect();
            match literal.parse::<f64>() {
                Ok(value) if value.is_finite() => tokens.push(Token::Number(value)),
                // Out-of-range literals parse to infinity.
                _ => {
                    debug!("Rejected number literal {:?}", literal);
                    has_invalid_number = true;
                }
            }
        } else {
            characters.next();
            match Token::from_symbol(character) {
                Some(token) => tokens.push(token),
                None => {
                    // One stray character invalidates the whole expression.
                    debug!("Rejected character {:?} in {:?}", character, expression);
                    return Err(EvaluationError::EmptyExpression);
                }
            }
        }
    }

    if has_invalid_number {
        return Err(EvaluationError::InvalidNumber);
    }
    if tokens.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    trace!("Tokenized {:?} into {:?}", expression, tokens);
    Ok(tokens)
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}
