use crate::interpreter::error::EvaluationError;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    /// Whether `self`, waiting on the operator stack, has to be applied before
    /// `other` is pushed on top of it. Ties reduce, so every operator is
    /// left-associative.
    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to a left-hand operand `a` and a right-hand operand `b`.
    ///
    /// # Arguments
    ///
    /// * `a`: The left-hand operand.
    /// * `b`: The right-hand operand.
    ///
    /// returns: The result of the operation, or [`EvaluationError::DivisionByZero`]
    /// when dividing by exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Subtract.apply(10.0, 4.0), Ok(6.0));
    /// assert!(BinaryOperator::Divide.apply(1.0, 0.0).is_err());
    /// ```
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide => {
                // Also true for -0.0.
                if b == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
