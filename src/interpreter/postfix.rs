use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Operands, run},
        operator::OperatorEntry,
    },
    lexer::{Token, Tokenizer},
};

/// Collects tokens in the order the evaluator would consume them.
#[derive(Debug, Default)]
pub struct PostfixOutput {
    tokens: Vec<Token>,
}

impl Operands for PostfixOutput {
    type Output = Vec<Token>;

    fn push_number(&mut self, value: f64, _position: usize) {
        self.tokens.push(Token::Number(value));
    }

    fn apply(&mut self, entry: &OperatorEntry) -> EvalResult<()> {
        self.tokens.push(entry.token);
        Ok(())
    }

    fn finish(&mut self, _position: usize) -> EvalResult<Vec<Token>> {
        Ok(std::mem::take(&mut self.tokens))
    }
}

/// Converts an infix expression into reverse-Polish order.
///
/// Runs the same operator-precedence pass as evaluation, so every lexing and
/// parsing error is reported identically. Nothing is computed, hence no
/// arithmetic errors: `1/0` converts fine.
///
/// # Errors
/// Returns a `LexError` or `ParseError` when the expression is malformed.
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::Token, postfix::to_postfix};
///
/// assert_eq!(to_postfix("1 + 2 * 3").unwrap(),
///            vec![Token::Number(1.0),
///                 Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Star,
///                 Token::Plus]);
/// ```
pub fn to_postfix(source: &str) -> EvalResult<Vec<Token>> {
    run(Tokenizer::new(source), PostfixOutput::default())
}

/// Renders a postfix sequence separated by single spaces.
///
/// Signs are spelled `neg` and `pos` so they cannot be confused with the
/// binary operators.
///
/// # Example
/// ```
/// use tally::interpreter::postfix::{format_postfix, to_postfix};
///
/// let tokens = to_postfix("-(2.5 - 1)4").unwrap();
/// assert_eq!(format_postfix(&tokens), "2.5 1 - neg 4 *");
/// ```
#[must_use]
pub fn format_postfix(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|token| match token {
              Token::UnaryMinus => "neg".to_string(),
              Token::UnaryPlus => "pos".to_string(),
              _ => token.to_string(),
          })
          .collect::<Vec<_>>()
          .join(" ")
}
