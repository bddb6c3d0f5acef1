use crate::interpreter::{evaluator::core::OperandStack, lexer::Token};

impl OperandStack {
    /// Evaluates a prefix sign on a value.
    ///
    /// `UnaryMinus` negates, `UnaryPlus` returns the value unchanged. Signs
    /// cannot overflow, so this never fails.
    ///
    /// # Panics
    /// Panics if `op` is not a sign token. The evaluator only calls this with
    /// entries whose `is_unary()` holds.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::core::OperandStack, lexer::Token};
    ///
    /// assert_eq!(OperandStack::eval_unary(Token::UnaryMinus, 2.5), -2.5);
    /// assert_eq!(OperandStack::eval_unary(Token::UnaryPlus, -1.0), -1.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: Token, value: f64) -> f64 {
        match op {
            Token::UnaryMinus => -value,
            Token::UnaryPlus => value,
            _ => unreachable!("{op:?} is not a unary operator"),
        }
    }
}
