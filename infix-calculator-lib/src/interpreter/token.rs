use crate::interpreter::format_value;
use crate::interpreter::operator::BinaryOperator;
use anyhow::{Context, Result};
use std::fmt;
use std::fmt::Formatter;
use string_builder::Builder;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Maps a single-character symbol to its token. Digits and decimal points
    /// are not symbols; they only ever appear as part of a [`Token::Number`].
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", format_value(*value)),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::token::{tokens_to_string, Token};
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(3.0),
///     Token::Operator(BinaryOperator::Add),
///     Token::Number(0.5),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "3 + 0.5");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
