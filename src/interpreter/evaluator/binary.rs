use crate::{
    error::ArithmeticError,
    interpreter::{evaluator::core::OperandStack, lexer::Token},
};

impl OperandStack {
    /// Evaluates a binary arithmetic operation.
    ///
    /// `-` and `/` take `left` as the minuend/dividend. `%` is the truncated
    /// remainder `left - right * trunc(left / right)`, whose sign follows
    /// `left`. Division and modulo by zero (either sign) are rejected, and so
    /// is any result that is no longer finite, so callers never observe
    /// `NaN` or infinities.
    ///
    /// # Parameters
    /// - `op`: The operator token.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Byte offset of the operator, for error reporting.
    ///
    /// # Returns
    /// The computed value, or the `ArithmeticError` describing why there is
    /// none.
    ///
    /// # Panics
    /// Panics if `op` is not one of `Plus`, `Minus`, `Star`, `Slash` or
    /// `Percent`.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     error::ArithmeticError,
    ///     interpreter::{evaluator::core::OperandStack, lexer::Token},
    /// };
    ///
    /// assert_eq!(OperandStack::eval_binary(Token::Minus, 1.0, 3.0, 0).unwrap(), -2.0);
    /// assert_eq!(OperandStack::eval_binary(Token::Percent, -7.0, 3.0, 0).unwrap(), -1.0);
    ///
    /// let err = OperandStack::eval_binary(Token::Slash, 1.0, 0.0, 4).unwrap_err();
    /// assert_eq!(err, ArithmeticError::DivisionByZero { position: 4 });
    /// ```
    pub fn eval_binary(op: Token,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> Result<f64, ArithmeticError> {
        let result = match op {
            Token::Plus => left + right,
            Token::Minus => left - right,
            Token::Star => left * right,
            Token::Slash => {
                if right == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { position });
                }
                left / right
            },
            Token::Percent => {
                if right == 0.0 {
                    return Err(ArithmeticError::ModuloByZero { position });
                }
                left % right
            },
            _ => unreachable!("{op:?} is not a binary operator"),
        };

        if result.is_finite() { Ok(result) } else { Err(ArithmeticError::Overflow { position }) }
    }
}
