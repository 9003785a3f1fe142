use thiserror::Error;

/// The ways in which evaluating an expression can fail.
///
/// Every failed evaluation reports exactly one of these kinds. Callers that only
/// need to tell a user that their input was wrong can use [`EvaluationError::user_message`],
/// which is the same for every kind.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EvaluationError {
    /// No tokens could be produced, either because the input was blank
    /// or because it contained a character outside the expression alphabet.
    #[error("empty expression")]
    EmptyExpression,
    /// A run of digits and decimal points is not a valid floating-point literal.
    #[error("invalid number")]
    InvalidNumber,
    /// A closing parenthesis without an opening one, or the other way around.
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    /// The tokens do not form a well-structured expression.
    #[error("invalid expression")]
    InvalidExpression,
    /// The right-hand side of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl EvaluationError {
    pub fn user_message(&self) -> &'static str {
        "Expression is not valid"
    }
}
