use crate::interpreter::lexer::Token;

/// Binding strength of an operator token. Higher binds tighter.
///
/// | Operator        | Precedence |
/// |-----------------|------------|
/// | unary `+`/`-`   | 3          |
/// | `*`, `/`, `%`   | 2          |
/// | binary `+`/`-`  | 1          |
/// | `(` and others  | 0          |
#[must_use]
pub const fn precedence(token: Token) -> u8 {
    match token {
        Token::UnaryMinus | Token::UnaryPlus => 3,
        Token::Star | Token::Slash | Token::Percent => 2,
        Token::Plus | Token::Minus => 1,
        _ => 0,
    }
}

/// An operator waiting on the operator stack.
///
/// `LParen` entries act as group boundaries: they are never applied and stop
/// every reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorEntry {
    /// The operator token.
    pub token:      Token,
    /// Cached [`precedence`] of `token`.
    pub precedence: u8,
    /// Byte offset of the operator in the source.
    pub position:   usize,
}

impl OperatorEntry {
    /// Creates an entry for `token` found at `position`.
    #[must_use]
    pub const fn new(token: Token, position: usize) -> Self {
        Self { token,
               precedence: precedence(token),
               position }
    }

    /// Whether this entry marks an open parenthesis.
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        matches!(self.token, Token::LParen)
    }

    /// Whether this entry applies to a single operand.
    #[must_use]
    pub const fn is_unary(&self) -> bool {
        matches!(self.token, Token::UnaryMinus | Token::UnaryPlus)
    }

    /// Signs are right associative; every binary operator is left
    /// associative.
    #[must_use]
    pub const fn is_right_associative(&self) -> bool {
        self.is_unary()
    }

    /// Whether this stacked entry has to be applied before `incoming` is
    /// pushed.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::{evaluator::operator::OperatorEntry, lexer::Token};
    ///
    /// let star = OperatorEntry::new(Token::Star, 1);
    /// let plus = OperatorEntry::new(Token::Plus, 3);
    /// let minus = OperatorEntry::new(Token::Minus, 5);
    ///
    /// assert!(star.reduces_before(&plus));
    /// assert!(plus.reduces_before(&minus));
    /// assert!(!plus.reduces_before(&star));
    /// ```
    #[must_use]
    pub const fn reduces_before(&self, incoming: &Self) -> bool {
        if self.is_boundary() {
            return false;
        }
        if incoming.is_right_associative() {
            self.precedence > incoming.precedence
        } else {
            self.precedence >= incoming.precedence
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_never_reduces() {
        let paren = OperatorEntry::new(Token::LParen, 0);
        assert!(paren.is_boundary());
        assert_eq!(paren.precedence, 0);
        assert!(!paren.reduces_before(&OperatorEntry::new(Token::Plus, 1)));
    }

    #[test]
    fn signs_bind_tightest_and_associate_right() {
        let neg = OperatorEntry::new(Token::UnaryMinus, 0);
        let pos = OperatorEntry::new(Token::UnaryPlus, 1);
        assert!(neg.reduces_before(&OperatorEntry::new(Token::Percent, 2)));
        assert!(!neg.reduces_before(&pos));
    }
}
